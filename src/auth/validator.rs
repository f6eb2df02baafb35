//! Credential format validation
//!
//! Checks the shape of usernames and passwords before they reach the store.

use crate::error::AuthError;

/// Validates that the username is exactly `length` lowercase ASCII letters.
pub fn validate_username(username: &str, length: usize) -> Result<(), AuthError> {
    if username.len() != length || !username.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(AuthError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Validates the password composition policy: exactly `length` alphanumeric
/// characters with at least one lowercase letter, one uppercase letter, and
/// one digit. The error carries the violated rule, never the password.
pub fn validate_password(password: &str, length: usize) -> Result<(), AuthError> {
    if password.len() != length {
        return Err(AuthError::InvalidPassword(format!(
            "must be exactly {} characters",
            length
        )));
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AuthError::InvalidPassword(
            "may only contain letters and digits".into(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase())
        || !password.chars().any(|c| c.is_ascii_uppercase())
        || !password.chars().any(|c| c.is_ascii_digit())
    {
        return Err(AuthError::InvalidPassword(
            "needs a lowercase letter, an uppercase letter, and a digit".into(),
        ));
    }
    Ok(())
}
