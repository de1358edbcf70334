//! Error types for credential hashing.

use thiserror::Error;

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;

/// Errors that can occur while creating a credential hash.
///
/// Verification never surfaces an error: any internal fault is logged and
/// collapsed to "not authenticated" at the public boundary.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The underlying salt or digest primitive failed. Fatal for hash
    /// creation; a weak or empty hash must never be stored.
    #[error("credential hashing failed: {0}")]
    Hash(String),
}
