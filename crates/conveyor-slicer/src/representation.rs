//! Wire representation handed to the slicer invocation step.
//!
//! Key names and encodings are fixed by the consumer: `support` is singular,
//! `extruder` is the string `"1"` (left) or `"0"` (right), and `path` is
//! always `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::configuration::{Extruder, Slicer, SlicerConfiguration};
use crate::error::Result;

/// Serialized form of a [`SlicerConfiguration`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Representation {
    /// `MIRACLEGRUE` or `SKEINFORGE`.
    pub slicer: String,
    /// `"1"` for left, `"0"` for right.
    pub extruder: String,
    /// Raft under the model.
    pub raft: bool,
    /// Support structures.
    pub support: bool,
    /// Infill density.
    pub infill: f64,
    /// Layer height (mm).
    pub layer_height: f64,
    /// Perimeter shells.
    pub shells: u32,
    /// Nozzle temperature (°C).
    pub extruder_temperature: u32,
    /// Platform temperature (°C).
    pub platform_temperature: u32,
    /// Travel speed (mm/s).
    pub travel_speed: u32,
    /// Extrusion move speed (mm/s).
    pub print_speed: u32,
    /// Slicer profile path. Never populated here.
    pub path: Option<String>,
}

// Incoming keys are all optional; absent ones keep the library default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncomingRepresentation {
    slicer: Option<String>,
    extruder: Option<String>,
    raft: Option<bool>,
    support: Option<bool>,
    infill: Option<f64>,
    layer_height: Option<f64>,
    shells: Option<u32>,
    extruder_temperature: Option<u32>,
    platform_temperature: Option<u32>,
    travel_speed: Option<u32>,
    print_speed: Option<u32>,
    path: Option<String>,
    #[serde(flatten)]
    unknown: Map<String, Value>,
}

impl SlicerConfiguration {
    /// Build the wire representation.
    pub fn to_representation(&self) -> Representation {
        Representation {
            slicer: self.slicer().name().to_string(),
            extruder: self.extruder().wire_code().to_string(),
            raft: self.raft(),
            support: self.supports(),
            infill: self.infill(),
            layer_height: self.layer_height(),
            shells: self.shells(),
            extruder_temperature: self.extruder_temperature(),
            platform_temperature: self.platform_temperature(),
            travel_speed: self.travel_speed(),
            print_speed: self.print_speed(),
            path: None,
        }
    }

    /// Wire representation as a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_representation())?)
    }

    /// Wire representation as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_representation())?)
    }

    /// Parse a stored representation.
    ///
    /// Only the wire spellings are read (`support`, `layer_height`, ...).
    /// Other keys are logged and skipped. `null` and missing keys yield
    /// library defaults. Unknown slicer names, bad extruder codes and values
    /// that fail [`SlicerConfiguration::validate`] are errors.
    pub fn from_representation(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let incoming = IncomingRepresentation::deserialize(value)?;

        let mut config = Self::default();
        if let Some(name) = incoming.slicer.as_deref() {
            config.set_slicer(name.parse::<Slicer>()?);
        }
        if let Some(code) = incoming.extruder.as_deref() {
            config.set_extruder(Extruder::from_wire_code(code)?);
        }
        if let Some(raft) = incoming.raft {
            config.set_raft(raft);
        }
        if let Some(support) = incoming.support {
            config.set_supports(support);
        }
        if let Some(infill) = incoming.infill {
            config.set_infill(infill);
        }
        if let Some(height) = incoming.layer_height {
            config.set_layer_height(height);
        }
        if let Some(shells) = incoming.shells {
            config.set_shells(shells);
        }
        if let Some(temp) = incoming.extruder_temperature {
            config.set_extruder_temperature(temp);
        }
        if let Some(temp) = incoming.platform_temperature {
            config.set_platform_temperature(temp);
        }
        if let Some(speed) = incoming.travel_speed {
            config.set_travel_speed(speed);
        }
        if let Some(speed) = incoming.print_speed {
            config.set_print_speed(speed);
        }
        if let Some(path) = incoming.path {
            debug!(path = %path, "ignoring slicer profile path in representation");
        }
        if !incoming.unknown.is_empty() {
            let keys: Vec<&String> = incoming.unknown.keys().collect();
            warn!(keys = ?keys, "ignoring unrecognized keys in representation");
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a stored representation from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_representation(&value)
    }
}
