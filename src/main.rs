//! Passgate - Entry Point
//!
//! A local authentication tool: registers salted password hashes in a flat
//! record store and authenticates logins under an escalating lockout policy.

use log::info;

use passgate::{AppConfig, AuthService};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => panic!("Failed to load configuration: {}", e),
    };

    info!("Credential store: {}", config.store.path);

    let mut service = AuthService::new(&config);
    if let Err(e) = passgate::shell::run(&mut service) {
        panic!("Shell I/O failed: {}", e);
    }
}
