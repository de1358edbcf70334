//! Salted one-way hashing of plaintext credentials.
//!
//! Hashes are Argon2id PHC strings: a self-describing encoding carrying
//! the algorithm identifier, parameters, salt, and digest. Persistence
//! layers store and retrieve them byte-for-byte; nothing here ever decodes
//! a hash back to plaintext.

use crate::error::{CredentialError, Result};
use argon2::password_hash::{
    rand_core::OsRng, Error as PhcError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::Argon2;

/// Hash a plaintext credential with a fresh random salt.
///
/// Two calls with identical plaintext produce different strings, since the
/// salt is drawn from the OS RNG per call. Failures of the underlying
/// primitive propagate; the plaintext is not retained beyond the call.
pub fn hash_credential(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Outcome of a verification attempt, before collapsing to bool.
///
/// A fault (malformed stored hash, algorithm error) is distinct from a
/// plain mismatch so it can be logged for operational visibility, but both
/// mean "not authenticated" to the caller.
enum VerifyOutcome {
    Verified,
    Rejected,
    Fault(String),
}

fn check(stored: &str, candidate: &str) -> VerifyOutcome {
    let parsed = match PasswordHash::new(stored) {
        Ok(parsed) => parsed,
        Err(e) => return VerifyOutcome::Fault(format!("malformed stored hash: {e}")),
    };

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => VerifyOutcome::Verified,
        Err(PhcError::Password) => VerifyOutcome::Rejected,
        Err(e) => VerifyOutcome::Fault(e.to_string()),
    }
}

/// Verify a candidate credential against a stored hash.
///
/// Returns `true` only when the candidate reproduces the stored digest
/// under the salt embedded in `stored`. Any internal fault is logged and
/// treated as a verification failure; this function never panics and
/// never propagates an error, so an inability to verify can never be
/// mistaken for "authenticated".
pub fn verify_credential(stored: &str, candidate: &str) -> bool {
    match check(stored, candidate) {
        VerifyOutcome::Verified => true,
        VerifyOutcome::Rejected => false,
        VerifyOutcome::Fault(reason) => {
            tracing::error!(%reason, "credential verification fault; treating as not authenticated");
            false
        }
    }
}
