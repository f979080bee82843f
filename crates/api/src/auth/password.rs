//! Credential hashing for account passwords.
//!
//! Stored values are Argon2id PHC strings (`$argon2id$v=19$...`), so the
//! salt and cost parameters travel with each hash and older hashes keep
//! verifying if the defaults change.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// Hash a signup password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(hasher()
        .hash_password(plaintext.as_bytes(), &salt)?
        .to_string())
}

/// Check a login password against the stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, password_hash::Error> {
    let stored = PasswordHash::new(stored)?;
    match hasher().verify_password(plaintext.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(other) => Err(other),
    }
}
