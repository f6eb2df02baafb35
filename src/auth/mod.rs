//! Authentication system
//!
//! Composes the credential store, hasher, and lockout policy into the
//! register/authenticate operations, enforcing format validation on the way
//! in.

pub mod service;
pub mod validator;

pub use service::AuthService;
pub use validator::{validate_password, validate_username};
