//! Salted password hashing
//!
//! Passwords are stored as Argon2id PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`) with a fresh random
//! salt per hash. Verification parses the stored string, so parameters can
//! change later without invalidating existing rows.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use survey_core_types::Sensitive;

use crate::errors::{Result, SurveyError};

/// Hash a plain-text password with a fresh salt
///
/// # Errors
/// * `PasswordHash` - the hasher rejected the input
pub fn hash_password(password: &Sensitive<String>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SurveyError::PasswordHash {
            message: e.to_string(),
        })
}

/// Check a plain-text password against a stored hash
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &Sensitive<String>, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "stored password hash is not a PHC string");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed)
        .is_ok()
}
