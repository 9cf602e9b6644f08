//! Error type definitions
//!
//! Defines the error types surfaced by the settings accessor and loader.

use thiserror::Error;

/// Main error type for the PayU Latam settings crate
#[derive(Error, Debug)]
pub enum Error {
    /// Requested setting name is outside the declared universe
    #[error("Invalid PayU Latam setting: {name:?}")]
    InvalidSetting {
        /// The requested setting name
        name: String,
    },

    /// A declared-mandatory setting resolved to an empty value
    #[error("PayU Latam setting {name:?} is mandatory")]
    MandatorySettingMissing {
        /// The mandatory setting name
        name: String,
    },

    /// Configuration loading or shape errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-setting error
    pub fn invalid_setting(name: impl Into<String>) -> Self {
        Self::InvalidSetting { name: name.into() }
    }

    /// Create a mandatory-setting-missing error
    pub fn mandatory_missing(name: impl Into<String>) -> Self {
        Self::MandatorySettingMissing { name: name.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
