#![warn(missing_docs)]

//! Slicer configuration for the conveyor print daemon.
//!
//! This crate holds the per-job slicing parameters, derives them from named
//! quality tiers, and converts them to and from the representation consumed
//! by the slicer invocation step.
//!
//! # Example
//!
//! ```
//! use conveyor_slicer::{Extruder, Quality, SlicerConfiguration};
//!
//! let mut config = SlicerConfiguration::for_quality(Quality::High);
//! config.set_extruder(Extruder::Left);
//!
//! let value = config.to_value()?;
//! assert_eq!(value["slicer"], "SKEINFORGE");
//! assert_eq!(value["extruder"], "1");
//! # Ok::<(), conveyor_slicer::ConfigError>(())
//! ```

pub mod configuration;
pub mod error;
pub mod profile;
pub mod quality;
pub mod representation;

pub use configuration::{Extruder, Slicer, SlicerConfiguration, SlicerConfigurationBuilder};
pub use error::{ConfigError, Result};
pub use profile::Profile;
pub use quality::{PresetOverrides, Quality};
pub use representation::Representation;
