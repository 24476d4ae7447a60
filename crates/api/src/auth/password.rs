//! Account password storage.
//!
//! Stored values are Argon2id PHC strings (`$argon2id$v=19$...`), so the
//! parameters and per-password salt travel with the hash. The plaintext is
//! never persisted. Both operations are CPU-bound; the Account Directory
//! calls them from `spawn_blocking`.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};

/// Produce a PHC string for `plaintext` under a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string())
}

/// Check `plaintext` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; an unparseable stored value is an error.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, HashError> {
    let stored = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Enforce the minimum password length, counted in characters rather than
/// bytes.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    match password.chars().count() {
        n if n >= min_length => Ok(()),
        _ => Err(format!(
            "Password must be at least {min_length} characters long"
        )),
    }
}
