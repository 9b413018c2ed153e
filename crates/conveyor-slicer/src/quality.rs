//! Quality tiers and the preset table.
//!
//! Each tier maps to a [`PresetOverrides`] entry. A preset is built by taking
//! the library defaults and overlaying only the fields the entry sets, so a
//! field a tier does not mention keeps its default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::configuration::{Extruder, Slicer, SlicerConfiguration};
use crate::error::{ConfigError, Result};

/// Named print quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Thick layers, fastest print.
    Low,
    /// Balanced speed and surface finish.
    Medium,
    /// Thin layers, best surface finish.
    High,
}

impl Quality {
    /// All tiers, lowest first.
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::Medium, Quality::High];

    /// Lowercase tier name.
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }

    /// Fields this tier changes relative to the library defaults.
    pub fn overrides(&self) -> PresetOverrides {
        match self {
            Quality::Low => PresetOverrides {
                slicer: Some(Slicer::MiracleGrue),
                layer_height: Some(0.34),
                ..Default::default()
            },
            Quality::Medium => PresetOverrides {
                slicer: Some(Slicer::MiracleGrue),
                raft: Some(false),
                supports: Some(false),
                infill: Some(0.1),
                layer_height: Some(0.27),
                shells: Some(2),
                extruder_temperature: Some(230),
                print_speed: Some(80),
                travel_speed: Some(100),
                ..Default::default()
            },
            Quality::High => PresetOverrides {
                slicer: Some(Slicer::Skeinforge),
                layer_height: Some(0.1),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Quality::ALL
            .into_iter()
            .find(|quality| quality.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConfigError::InvalidArgument(format!(
                    "unsupported quality {s:?}, expected low, medium or high"
                ))
            })
    }
}

/// A partial configuration. `None` leaves the underlying field untouched.
///
/// Also the shape of user overrides in a profile file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetOverrides {
    /// Slicer backend.
    pub slicer: Option<Slicer>,
    /// Active extruder.
    pub extruder: Option<Extruder>,
    /// Raft under the model.
    pub raft: Option<bool>,
    /// Support structures.
    pub supports: Option<bool>,
    /// Infill density (0.0 to 1.0).
    pub infill: Option<f64>,
    /// Layer height (mm).
    pub layer_height: Option<f64>,
    /// Perimeter shells.
    pub shells: Option<u32>,
    /// Nozzle temperature (°C).
    pub extruder_temperature: Option<u32>,
    /// Platform temperature (°C).
    pub platform_temperature: Option<u32>,
    /// Extrusion move speed (mm/s).
    pub print_speed: Option<u32>,
    /// Travel speed (mm/s).
    pub travel_speed: Option<u32>,
}

impl PresetOverrides {
    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay the set fields onto `config`.
    pub fn apply(&self, config: &mut SlicerConfiguration) {
        if let Some(slicer) = self.slicer {
            config.set_slicer(slicer);
        }
        if let Some(extruder) = self.extruder {
            config.set_extruder(extruder);
        }
        if let Some(raft) = self.raft {
            config.set_raft(raft);
        }
        if let Some(supports) = self.supports {
            config.set_supports(supports);
        }
        if let Some(infill) = self.infill {
            config.set_infill(infill);
        }
        if let Some(height) = self.layer_height {
            config.set_layer_height(height);
        }
        if let Some(shells) = self.shells {
            config.set_shells(shells);
        }
        if let Some(temp) = self.extruder_temperature {
            config.set_extruder_temperature(temp);
        }
        if let Some(temp) = self.platform_temperature {
            config.set_platform_temperature(temp);
        }
        if let Some(speed) = self.print_speed {
            config.set_print_speed(speed);
        }
        if let Some(speed) = self.travel_speed {
            config.set_travel_speed(speed);
        }
    }
}

impl SlicerConfiguration {
    /// Configuration for a quality tier: library defaults, then the tier's overrides.
    pub fn for_quality(quality: Quality) -> Self {
        let mut config = Self::default();
        quality.overrides().apply(&mut config);
        debug!(
            quality = %quality,
            slicer = %config.slicer(),
            layer_height = config.layer_height(),
            "derived preset configuration"
        );
        config
    }
}
