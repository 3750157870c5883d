//! Verification token and code generation, used by the creation path.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use rand::RngExt;
use uuid::Uuid;

use crate::error::{UserError, UserResult};

/// Length of the numeric verification code sent to new accounts
pub const VERIFICATION_CODE_LENGTH: usize = 6;

/// Build a numeric verification code: each character drawn independently
/// and uniformly from the digits 0-9.
///
/// Not cryptographically secure; collisions across users are possible and
/// not checked.
pub fn create_code(length: usize) -> String {
    const DIGITS: &[u8] = b"0123456789";

    let mut rng = rand::rng();
    (0..length)
        .map(|_| DIGITS[rng.random_range(0..DIGITS.len())] as char)
        .collect()
}

/// Build an opaque verification token: a random 128-bit identifier (hyphens
/// removed) concatenated with the current timestamp in milliseconds, hashed
/// with argon2 under a fresh salt.
///
/// The pre-hash nonce is discarded, so the token can only be compared by
/// equality against the stored value, never re-derived from caller input.
pub fn create_token() -> UserResult<String> {
    let nonce = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        chrono::Utc::now().timestamp_millis()
    );

    let salt = SaltString::generate(&mut OsRng);
    let token = Argon2::default()
        .hash_password(nonce.as_bytes(), &salt)
        .map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(token.to_string())
}
