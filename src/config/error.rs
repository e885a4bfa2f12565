//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A required environment variable was not set (the judge credential).
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Judge model identifier is empty.
    #[error("invalid judge model '{value}': must not be empty")]
    InvalidModel { value: String },

    /// Judge timeout is zero or not a whole number of seconds.
    #[error("invalid judge timeout '{value}': must be a positive number of seconds")]
    InvalidTimeout { value: String },
}
