//! Error handling
//!
//! Defines error types and handling for the authentication module.

pub mod types;

pub use types::*;
