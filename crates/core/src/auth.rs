//! Credential hashing.
//!
//! Argon2id with per-credential random salts. Hashes are stored in PHC
//! string format so parameters travel with the hash and can be upgraded
//! without a migration.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rupkala_types::error::{Error, Result};

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a stored hash.
///
/// An unparseable stored hash verifies as false rather than erroring;
/// a corrupted record must read as a failed login, not a 500.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
