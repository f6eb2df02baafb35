//! Interactive shell
//!
//! Thin CLI collaborator: collects raw strings, calls the authentication
//! service, and renders the structured outcomes it returns.

pub mod commands;
pub mod repl;

pub use commands::{Command, parse_command};
pub use repl::run;
