//! Error types
//!
//! Defines domain-specific error types for each module of the authentication
//! system. Credential failures are expected control outcomes and are returned
//! as typed results; storage failures are the only class that aborts the
//! current operation. No variant ever carries a raw password or digest.

use std::fmt;
use std::io;
use std::time::Duration;

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    InvalidUsername(String),
    /// Carries the rule that was violated, never the password itself.
    InvalidPassword(String),
    DuplicateUser(String),
    UserNotFound(String),
    WrongPassword { attempts: u32 },
    Locked { remaining: Duration },
    Banned(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::InvalidPassword(rule) => write!(f, "Invalid password: {}", rule),
            AuthError::DuplicateUser(u) => write!(f, "Username already taken: {}", u),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::WrongPassword { attempts } => {
                write!(f, "Wrong password ({} failed attempts)", attempts)
            }
            AuthError::Locked { remaining } => {
                write!(f, "Account locked for {} more seconds", remaining.as_secs())
            }
            AuthError::Banned(u) => write!(f, "Account permanently banned: {}", u),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// General error that encompasses all module error types
#[derive(Debug)]
pub enum PassgateError {
    Auth(AuthError),
    Storage(StorageError),
}

impl fmt::Display for PassgateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassgateError::Auth(e) => write!(f, "Authentication error: {}", e),
            PassgateError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for PassgateError {}

impl From<AuthError> for PassgateError {
    fn from(error: AuthError) -> Self {
        PassgateError::Auth(error)
    }
}

impl From<StorageError> for PassgateError {
    fn from(error: StorageError) -> Self {
        PassgateError::Storage(error)
    }
}
