//! Configuration management
//!
//! Loads settings from an optional `config.toml` with environment overrides
//! (`PASSGATE_` prefix) layered over coded defaults, then validates them.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Complete application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub rules: RulesConfig,
    pub policy: PolicyConfig,
}

/// Credential store location.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the flat record file; created on first write.
    pub path: String,
}

/// Credential shape rules.
#[derive(Debug, Deserialize, Clone)]
pub struct RulesConfig {
    pub username_length: usize,
    pub password_length: usize,
    pub salt_length: usize,
}

/// Lockout policy knobs.
#[derive(Debug, Deserialize, Clone)]
pub struct PolicyConfig {
    /// Escalating lock durations for the 1st, 2nd, ... lock, in seconds.
    pub lock_durations_secs: Vec<u64>,

    /// Cumulative failure count that permanently bans the account.
    pub ban_threshold: u32,
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment
    /// overrides, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("store.path", "password.txt")?
            .set_default("rules.username_length", 5_i64)?
            .set_default("rules.password_length", 8_i64)?
            .set_default("rules.salt_length", 5_i64)?
            .set_default("policy.lock_durations_secs", vec![5_i64, 10, 20])?
            .set_default("policy.ban_threshold", 10_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("PASSGATE").separator("__"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.path.is_empty() {
            return Err(ConfigError::Message("store.path cannot be empty".into()));
        }

        if self.rules.username_length == 0
            || self.rules.password_length == 0
            || self.rules.salt_length == 0
        {
            return Err(ConfigError::Message(
                "username, password, and salt lengths must be greater than 0".into(),
            ));
        }

        if self.policy.lock_durations_secs.is_empty() {
            return Err(ConfigError::Message(
                "policy.lock_durations_secs cannot be empty".into(),
            ));
        }

        if !self
            .policy
            .lock_durations_secs
            .windows(2)
            .all(|pair| pair[0] < pair[1])
        {
            return Err(ConfigError::Message(
                "policy.lock_durations_secs must be strictly increasing".into(),
            ));
        }

        if self.policy.ban_threshold == 0 {
            return Err(ConfigError::Message(
                "policy.ban_threshold must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl PolicyConfig {
    /// Lock duration ladder as `Duration`s.
    pub fn lock_durations(&self) -> Vec<Duration> {
        self.lock_durations_secs
            .iter()
            .map(|&secs| Duration::from_secs(secs))
            .collect()
    }
}
