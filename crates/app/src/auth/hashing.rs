//! Password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::auth::errors::AuthServiceError;

/// Hash a plain-text password with Argon2 and a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthServiceError> {
    if password.is_empty() {
        return Err(AuthServiceError::EmptyPassword);
    }

    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthServiceError::Hashing(e.to_string()))
}

/// Verify a plain-text password against a stored Argon2 hash string.
///
/// A non-matching password is `Ok(false)`; only a malformed stored hash or an
/// internal hasher failure is an error.
pub(crate) fn verify_password(hash: &str, password: &str) -> Result<bool, AuthServiceError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthServiceError::Hashing(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(other) => Err(AuthServiceError::Hashing(other.to_string())),
    }
}
