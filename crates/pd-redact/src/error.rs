//! Error types for the redaction crate.

use thiserror::Error;

/// Result type for redaction configuration operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while building or loading redaction configuration.
///
/// The `redact` function itself has no failure modes; these errors cover
/// the configuration surface only.
#[derive(Error, Debug)]
pub enum RedactError {
    /// Invalid configuration value (empty separator, token/separator
    /// collision, malformed field name).
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while reading or writing a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a config file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
