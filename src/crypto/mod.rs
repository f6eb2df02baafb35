//! Salt generation and password hashing
//!
//! Provides the one-way digest used for stored credentials and the random
//! salt source mixed into it.

pub mod digest;
pub mod salt;

pub use digest::hash_password;
pub use salt::{RandomSaltSource, SaltSource};
