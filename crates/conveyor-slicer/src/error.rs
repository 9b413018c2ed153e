//! Error types for slicer configuration.

use thiserror::Error;

/// Errors that can occur while building or parsing a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A value violates a configuration invariant, or a name is not recognized.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Representation names a slicer backend that does not exist.
    #[error("unknown slicer: {0:?}")]
    UnknownSlicer(String),

    /// Extruder code is neither "0" nor "1".
    #[error("invalid extruder code: {0:?}")]
    InvalidExtruder(String),

    /// Malformed JSON representation.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML profile.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
