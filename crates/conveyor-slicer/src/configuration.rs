//! The slicer configuration value object.
//!
//! A [`SlicerConfiguration`] holds the parameters of one print job. It is a
//! plain value: cloning it yields an independent copy and nothing inside it is
//! shared. Setters accept any value of the right type; call
//! [`SlicerConfiguration::validate`] (or go through
//! [`SlicerConfigurationBuilder::build`]) to enforce the field invariants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Backend engine that turns a model into toolpaths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slicer {
    /// MakerBot's MiracleGrue engine.
    #[default]
    #[serde(alias = "MIRACLEGRUE")]
    MiracleGrue,
    /// The Skeinforge toolchain.
    #[serde(alias = "SKEINFORGE")]
    Skeinforge,
}

impl Slicer {
    /// All known backends.
    pub const ALL: [Slicer; 2] = [Slicer::MiracleGrue, Slicer::Skeinforge];

    /// Name used in the wire representation.
    pub fn name(&self) -> &'static str {
        match self {
            Slicer::MiracleGrue => "MIRACLEGRUE",
            Slicer::Skeinforge => "SKEINFORGE",
        }
    }
}

impl fmt::Display for Slicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slicer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Slicer::ALL
            .into_iter()
            .find(|slicer| slicer.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownSlicer(s.to_string()))
    }
}

/// Which extruder head prints the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extruder {
    /// Left head.
    Left,
    /// Right head (the only head on single-extruder machines).
    #[default]
    Right,
}

impl Extruder {
    /// String code used in the wire representation: "1" for left, "0" for right.
    pub fn wire_code(&self) -> &'static str {
        match self {
            Extruder::Left => "1",
            Extruder::Right => "0",
        }
    }

    /// Parse a wire code produced by [`Extruder::wire_code`].
    pub fn from_wire_code(code: &str) -> Result<Self> {
        match code {
            "1" => Ok(Extruder::Left),
            "0" => Ok(Extruder::Right),
            other => Err(ConfigError::InvalidExtruder(other.to_string())),
        }
    }
}

impl FromStr for Extruder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Extruder::Left),
            "right" => Ok(Extruder::Right),
            _ => Err(ConfigError::InvalidArgument(format!(
                "extruder must be left or right, got {s:?}"
            ))),
        }
    }
}

/// Slicing parameters for a single print job.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicerConfiguration {
    slicer: Slicer,
    extruder: Extruder,
    raft: bool,
    supports: bool,
    infill: f64,
    layer_height: f64,
    shells: u32,
    extruder_temperature: u32,
    platform_temperature: u32,
    print_speed: u32,
    travel_speed: u32,
}

impl Default for SlicerConfiguration {
    fn default() -> Self {
        Self {
            slicer: Slicer::MiracleGrue,
            extruder: Extruder::Right,
            raft: false,
            supports: false,
            infill: 0.10,
            layer_height: 0.2,
            shells: 3,
            extruder_temperature: 230,
            platform_temperature: 110,
            print_speed: 80,
            travel_speed: 150,
        }
    }
}

impl SlicerConfiguration {
    /// Configuration with every field at its library default.
    pub fn default_configuration() -> Self {
        Self::default()
    }

    /// Start a validated builder from the library defaults.
    pub fn builder() -> SlicerConfigurationBuilder {
        SlicerConfigurationBuilder::new()
    }

    /// Check the field invariants.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.infill) {
            return Err(ConfigError::InvalidArgument(format!(
                "infill must be between 0 and 1, got {}",
                self.infill
            )));
        }
        if !self.layer_height.is_finite() || self.layer_height <= 0.0 {
            return Err(ConfigError::InvalidArgument(format!(
                "layer_height must be positive, got {}",
                self.layer_height
            )));
        }
        if self.shells == 0 {
            return Err(ConfigError::InvalidArgument(
                "shells must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Slicer backend.
    pub fn slicer(&self) -> Slicer {
        self.slicer
    }

    /// Active extruder.
    pub fn extruder(&self) -> Extruder {
        self.extruder
    }

    /// Whether a raft is printed under the model.
    pub fn raft(&self) -> bool {
        self.raft
    }

    /// Whether support structures are generated.
    pub fn supports(&self) -> bool {
        self.supports
    }

    /// Infill density (0.0 to 1.0).
    pub fn infill(&self) -> f64 {
        self.infill
    }

    /// Layer height (mm).
    pub fn layer_height(&self) -> f64 {
        self.layer_height
    }

    /// Number of perimeter shells.
    pub fn shells(&self) -> u32 {
        self.shells
    }

    /// Nozzle temperature (°C).
    pub fn extruder_temperature(&self) -> u32 {
        self.extruder_temperature
    }

    /// Build platform temperature (°C).
    pub fn platform_temperature(&self) -> u32 {
        self.platform_temperature
    }

    /// Extrusion move speed (mm/s).
    pub fn print_speed(&self) -> u32 {
        self.print_speed
    }

    /// Non-extruding move speed (mm/s).
    pub fn travel_speed(&self) -> u32 {
        self.travel_speed
    }

    /// Set the slicer backend.
    pub fn set_slicer(&mut self, slicer: Slicer) {
        self.slicer = slicer;
    }

    /// Set the active extruder.
    pub fn set_extruder(&mut self, extruder: Extruder) {
        self.extruder = extruder;
    }

    /// Enable or disable the raft.
    pub fn set_raft(&mut self, raft: bool) {
        self.raft = raft;
    }

    /// Enable or disable support generation.
    pub fn set_supports(&mut self, supports: bool) {
        self.supports = supports;
    }

    /// Set infill density. Not range-checked.
    pub fn set_infill(&mut self, infill: f64) {
        self.infill = infill;
    }

    /// Set layer height (mm). Not range-checked.
    pub fn set_layer_height(&mut self, height: f64) {
        self.layer_height = height;
    }

    /// Set the shell count. Not range-checked.
    pub fn set_shells(&mut self, shells: u32) {
        self.shells = shells;
    }

    /// Set nozzle temperature (°C).
    pub fn set_extruder_temperature(&mut self, temperature: u32) {
        self.extruder_temperature = temperature;
    }

    /// Set platform temperature (°C).
    pub fn set_platform_temperature(&mut self, temperature: u32) {
        self.platform_temperature = temperature;
    }

    /// Set extrusion move speed (mm/s).
    pub fn set_print_speed(&mut self, speed: u32) {
        self.print_speed = speed;
    }

    /// Set travel speed (mm/s).
    pub fn set_travel_speed(&mut self, speed: u32) {
        self.travel_speed = speed;
    }
}

/// Builder producing a validated [`SlicerConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct SlicerConfigurationBuilder {
    config: SlicerConfiguration,
}

impl SlicerConfigurationBuilder {
    /// Builder seeded with the library defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with an existing configuration.
    pub fn from_configuration(config: SlicerConfiguration) -> Self {
        Self { config }
    }

    /// Override `slicer`.
    pub fn slicer(mut self, slicer: Slicer) -> Self {
        self.config.slicer = slicer;
        self
    }

    /// Override `extruder`.
    pub fn extruder(mut self, extruder: Extruder) -> Self {
        self.config.extruder = extruder;
        self
    }

    /// Override `raft`.
    pub fn raft(mut self, raft: bool) -> Self {
        self.config.raft = raft;
        self
    }

    /// Override `supports`.
    pub fn supports(mut self, supports: bool) -> Self {
        self.config.supports = supports;
        self
    }

    /// Override `infill`.
    pub fn infill(mut self, infill: f64) -> Self {
        self.config.infill = infill;
        self
    }

    /// Override `layer_height`.
    pub fn layer_height(mut self, height: f64) -> Self {
        self.config.layer_height = height;
        self
    }

    /// Override `shells`.
    pub fn shells(mut self, shells: u32) -> Self {
        self.config.shells = shells;
        self
    }

    /// Override `extruder_temperature`.
    pub fn extruder_temperature(mut self, temperature: u32) -> Self {
        self.config.extruder_temperature = temperature;
        self
    }

    /// Override `platform_temperature`.
    pub fn platform_temperature(mut self, temperature: u32) -> Self {
        self.config.platform_temperature = temperature;
        self
    }

    /// Override `print_speed`.
    pub fn print_speed(mut self, speed: u32) -> Self {
        self.config.print_speed = speed;
        self
    }

    /// Override `travel_speed`.
    pub fn travel_speed(mut self, speed: u32) -> Self {
        self.config.travel_speed = speed;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SlicerConfiguration> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = SlicerConfiguration::default_configuration();
        assert_eq!(config.slicer(), Slicer::MiracleGrue);
        assert_eq!(config.extruder(), Extruder::Right);
        assert!(!config.raft());
        assert!(!config.supports());
        assert_relative_eq!(config.infill(), 0.10);
        assert_relative_eq!(config.layer_height(), 0.2);
        assert_eq!(config.shells(), 3);
        assert_eq!(config.extruder_temperature(), 230);
        assert_eq!(config.platform_temperature(), 110);
        assert_eq!(config.print_speed(), 80);
        assert_eq!(config.travel_speed(), 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut config = SlicerConfiguration::default();
        config.set_layer_height(-0.1);
        config.set_infill(1.5);
        config.set_shells(0);
        assert_relative_eq!(config.layer_height(), -0.1);
        assert_relative_eq!(config.infill(), 1.5);
        assert_eq!(config.shells(), 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_each_invariant() {
        let mut config = SlicerConfiguration::default();
        config.set_infill(-0.01);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArgument(_))));

        let mut config = SlicerConfiguration::default();
        config.set_layer_height(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArgument(_))));

        let mut config = SlicerConfiguration::default();
        config.set_layer_height(f64::NAN);
        assert!(config.validate().is_err());

        let mut config = SlicerConfiguration::default();
        config.set_shells(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidArgument(_))));
    }

    #[test]
    fn test_infill_bounds_inclusive() {
        let mut config = SlicerConfiguration::default();
        config.set_infill(0.0);
        assert!(config.validate().is_ok());
        config.set_infill(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = SlicerConfiguration::default();
        let mut copy = original.clone();
        copy.set_raft(true);
        copy.set_extruder(Extruder::Left);
        assert!(!original.raft());
        assert_eq!(original.extruder(), Extruder::Right);
    }

    #[test]
    fn test_builder() {
        let config = SlicerConfiguration::builder()
            .slicer(Slicer::Skeinforge)
            .extruder(Extruder::Left)
            .raft(true)
            .supports(true)
            .infill(0.25)
            .shells(2)
            .build()
            .unwrap();
        assert_eq!(config.slicer(), Slicer::Skeinforge);
        assert_eq!(config.extruder(), Extruder::Left);
        assert!(config.raft());
        assert!(config.supports());
        assert_relative_eq!(config.infill(), 0.25);
        assert_eq!(config.shells(), 2);
        assert_eq!(config.travel_speed(), 150);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let err = SlicerConfiguration::builder().layer_height(-0.2).build();
        assert!(matches!(err, Err(ConfigError::InvalidArgument(_))));
    }

    #[test]
    fn test_slicer_names() {
        assert_eq!(Slicer::MiracleGrue.name(), "MIRACLEGRUE");
        assert_eq!(Slicer::Skeinforge.to_string(), "SKEINFORGE");
        assert_eq!("skeinforge".parse::<Slicer>().unwrap(), Slicer::Skeinforge);
        assert!(matches!(
            "cura".parse::<Slicer>(),
            Err(ConfigError::UnknownSlicer(_))
        ));
    }

    #[test]
    fn test_extruder_codes() {
        assert_eq!(Extruder::Left.wire_code(), "1");
        assert_eq!(Extruder::Right.wire_code(), "0");
        assert_eq!(Extruder::from_wire_code("1").unwrap(), Extruder::Left);
        assert_eq!(Extruder::from_wire_code("0").unwrap(), Extruder::Right);
        assert!(Extruder::from_wire_code("2").is_err());
        assert_eq!("LEFT".parse::<Extruder>().unwrap(), Extruder::Left);
    }
}
