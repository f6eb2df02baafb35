pub mod auth;
pub mod config;
pub mod crypto;
pub mod error;
pub mod lockout;
pub mod shell;
pub mod store;

pub use auth::AuthService;
pub use config::AppConfig;
