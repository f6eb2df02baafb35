//! Lockout policy
//!
//! Pure state machine that converts a stream of failed login attempts into
//! timed locks and an eventual permanent ban.

pub mod policy;

pub use policy::{AccountStatus, LockoutPolicy};
