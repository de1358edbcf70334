//! Salted one-way credential hashing.
//!
//! Independent of the redaction pipeline: invoked directly by
//! credential-management code at account creation and authentication time.
//!
//! # Example
//!
//! ```
//! use pd_credential::{hash_credential, verify_credential};
//!
//! let stored = hash_credential("hunter2").unwrap();
//! assert!(verify_credential(&stored, "hunter2"));
//! assert!(!verify_credential(&stored, "hunter3"));
//! ```

pub mod error;
pub mod hasher;

pub use error::{CredentialError, Result};
pub use hasher::{hash_credential, verify_credential};
