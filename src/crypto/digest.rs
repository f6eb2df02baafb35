//! Password hashing
//!
//! One-way digest over password and salt. Deterministic: the same inputs
//! always produce the same digest.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `password ‖ salt`.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}
