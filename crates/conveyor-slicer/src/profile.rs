//! TOML print profiles.
//!
//! A profile names an optional quality tier and any number of field
//! overrides:
//!
//! ```toml
//! quality = "medium"
//! extruder = "left"
//! raft = true
//! infill = 0.2
//! ```
//!
//! Resolution order is library defaults, then the tier, then the file's own
//! fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::configuration::SlicerConfiguration;
use crate::error::{ConfigError, Result};
use crate::quality::{PresetOverrides, Quality};

/// A user print profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Base tier. Absent means plain defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    /// Fields applied on top of the tier.
    #[serde(flatten)]
    pub overrides: PresetOverrides,
    // Whatever neither of the above claimed; a non-empty table is a typo.
    #[serde(flatten, skip_serializing)]
    unknown: toml::Table,
}

impl Profile {
    /// Parse a profile from TOML text.
    ///
    /// Keys that are not a quality tier or a configuration field are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let profile: Self = toml::from_str(text)?;
        if !profile.unknown.is_empty() {
            let keys: Vec<&str> = profile.unknown.keys().map(String::as_str).collect();
            return Err(ConfigError::InvalidArgument(format!(
                "unknown profile keys: {}",
                keys.join(", ")
            )));
        }
        Ok(profile)
    }

    /// Read and parse a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&text)?;
        info!(path = %path.display(), quality = ?profile.quality, "loaded print profile");
        Ok(profile)
    }

    /// Resolve to a validated configuration.
    pub fn resolve(&self) -> Result<SlicerConfiguration> {
        let mut config = match self.quality {
            Some(quality) => SlicerConfiguration::for_quality(quality),
            None => SlicerConfiguration::default(),
        };
        if !self.overrides.is_empty() {
            debug!(overrides = ?self.overrides, "applying profile overrides");
            self.overrides.apply(&mut config);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{Extruder, Slicer};
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_profile_is_default() {
        let profile = Profile::from_toml_str("").unwrap();
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.resolve().unwrap(), SlicerConfiguration::default());
    }

    #[test]
    fn test_tier_then_overrides() {
        let profile = Profile::from_toml_str(
            r#"
            quality = "high"
            extruder = "left"
            raft = true
            infill = 0.2
            "#,
        )
        .unwrap();
        let config = profile.resolve().unwrap();
        assert_eq!(config.slicer(), Slicer::Skeinforge);
        assert_relative_eq!(config.layer_height(), 0.1);
        assert_eq!(config.extruder(), Extruder::Left);
        assert!(config.raft());
        assert_relative_eq!(config.infill(), 0.2);
    }

    #[test]
    fn test_override_beats_tier() {
        let profile = Profile::from_toml_str(
            r#"
            quality = "medium"
            travel_speed = 120
            slicer = "skeinforge"
            "#,
        )
        .unwrap();
        let config = profile.resolve().unwrap();
        assert_eq!(config.travel_speed(), 120);
        assert_eq!(config.slicer(), Slicer::Skeinforge);
        assert_eq!(config.shells(), 2);
    }

    #[test]
    fn test_unknown_quality_is_rejected() {
        let err = Profile::from_toml_str(r#"quality = "draft""#);
        assert!(matches!(err, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Profile::from_toml_str("quality = \"high\"\nlayer_heigth = 0.05\n");
        match err {
            Err(ConfigError::InvalidArgument(msg)) => assert!(msg.contains("layer_heigth")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_wire_slicer_names_accepted() {
        let profile = Profile::from_toml_str(r#"slicer = "SKEINFORGE""#).unwrap();
        assert_eq!(profile.resolve().unwrap().slicer(), Slicer::Skeinforge);

        let profile = Profile::from_toml_str(r#"slicer = "MIRACLEGRUE""#).unwrap();
        assert_eq!(profile.resolve().unwrap().slicer(), Slicer::MiracleGrue);
    }

    #[test]
    fn test_invalid_values_fail_resolve() {
        let profile = Profile::from_toml_str("shells = 0").unwrap();
        assert!(matches!(
            profile.resolve(),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("profile.toml");
        fs::write(&path, "quality = \"low\"\nsupports = true\n").unwrap();

        let config = Profile::load(&path).unwrap().resolve().unwrap();
        assert_relative_eq!(config.layer_height(), 0.34);
        assert!(config.supports());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = Profile::load(dir.path().join("nope.toml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
