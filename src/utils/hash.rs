use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use crate::error::AppError;

/// Hashing failures are server faults, never the caller's.
fn hashing_error(err: argon2::password_hash::Error) -> AppError {
    AppError::InternalServerError(format!("password hashing failed: {err}"))
}

/// Hashes a plaintext password into an Argon2 PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(hashing_error)?;

    Ok(digest.to_string())
}

/// Checks a plaintext password against a stored digest.
/// A mismatch is `Ok(false)`; only an unparseable digest is an error.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let stored = PasswordHash::new(password_hash).map_err(hashing_error)?;

    match Argon2::default().verify_password(password.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(hashing_error(err)),
    }
}
