//! Authentication service
//!
//! Implements register and authenticate over the credential store and the
//! lockout policy. Lock enforcement is a status query against an expiry
//! timestamp; the service never sleeps, the caller decides whether to wait.

use log::{info, warn};
use std::time::Instant;

use crate::auth::validator::{validate_password, validate_username};
use crate::config::{AppConfig, RulesConfig};
use crate::crypto::{RandomSaltSource, SaltSource, hash_password};
use crate::error::{AuthError, PassgateError};
use crate::lockout::{AccountStatus, LockoutPolicy};
use crate::store::{CredentialRecord, CredentialStore};

pub struct AuthService {
    store: CredentialStore,
    policy: LockoutPolicy,
    salts: Box<dyn SaltSource>,
    rules: RulesConfig,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: CredentialStore::new(&config.store.path),
            policy: LockoutPolicy::new(config.policy.lock_durations(), config.policy.ban_threshold),
            salts: Box::new(RandomSaltSource::new(config.rules.salt_length)),
            rules: config.rules.clone(),
        }
    }

    /// Assembles a service from explicit parts, letting tests inject a
    /// deterministic salt source.
    pub fn with_parts(
        store: CredentialStore,
        policy: LockoutPolicy,
        salts: Box<dyn SaltSource>,
        rules: RulesConfig,
    ) -> Self {
        Self {
            store,
            policy,
            salts,
            rules,
        }
    }

    /// Registers a new user: validates the credential shape, generates a
    /// fresh salt, and persists the salted digest. The raw password is never
    /// stored.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), PassgateError> {
        validate_username(username, self.rules.username_length)?;
        validate_password(password, self.rules.password_length)?;

        if self.store.exists(username)? {
            return Err(AuthError::DuplicateUser(username.to_string()).into());
        }

        let salt = self.salts.generate_salt();
        let digest = hash_password(password, &salt);
        self.store.insert(&CredentialRecord {
            username: username.to_string(),
            salt,
            digest,
        })?;

        info!("Registered user {}", username);
        Ok(())
    }

    /// Authenticates a login attempt at `now`. Check order: ban, active lock
    /// (auto-clearing if expired), existence, digest. A match resets the
    /// failure counter; a mismatch records a failure and may lock or ban.
    pub fn authenticate(
        &mut self,
        username: &str,
        password: &str,
        now: Instant,
    ) -> Result<(), PassgateError> {
        match self.policy.check_status(username, now) {
            AccountStatus::Banned => {
                return Err(AuthError::Banned(username.to_string()).into());
            }
            AccountStatus::Locked { remaining } => {
                return Err(AuthError::Locked { remaining }.into());
            }
            AccountStatus::Ok => {}
        }

        let Some(record) = self.store.lookup(username)? else {
            return Err(AuthError::UserNotFound(username.to_string()).into());
        };

        if hash_password(password, &record.salt) == record.digest {
            self.policy.record_success(username);
            info!("User {} authenticated", username);
            return Ok(());
        }

        warn!("Wrong password for user {}", username);
        match self.policy.record_failure(username, now) {
            AccountStatus::Banned => Err(AuthError::Banned(username.to_string()).into()),
            AccountStatus::Locked { remaining } => Err(AuthError::Locked { remaining }.into()),
            AccountStatus::Ok => Err(AuthError::WrongPassword {
                attempts: self.policy.failure_count(username),
            }
            .into()),
        }
    }

    /// Rewrites the store dropping malformed records. Returns the kept count.
    pub fn compact_store(&self) -> Result<usize, PassgateError> {
        Ok(self.store.compact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::time::Duration;

    /// Salt source that always yields the same salt.
    struct FixedSaltSource;

    impl SaltSource for FixedSaltSource {
        fn generate_salt(&mut self) -> String {
            "12345".to_string()
        }
    }

    fn service(dir: &tempfile::TempDir) -> AuthService {
        AuthService::with_parts(
            CredentialStore::new(dir.path().join("password.txt")),
            LockoutPolicy::new(
                vec![
                    Duration::from_secs(5),
                    Duration::from_secs(10),
                    Duration::from_secs(20),
                ],
                10,
            ),
            Box::new(FixedSaltSource),
            RulesConfig {
                username_length: 5,
                password_length: 8,
                salt_length: 5,
            },
        )
    }

    fn auth_err(result: Result<(), PassgateError>) -> AuthError {
        match result {
            Err(PassgateError::Auth(e)) => e,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_register_then_authenticate() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        assert!(service.authenticate("abcde", "Abcd1234", Instant::now()).is_ok());
    }

    #[test]
    fn test_register_rejects_invalid_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        assert!(matches!(
            auth_err(service.register("Abcde", "Abcd1234")),
            AuthError::InvalidUsername(_)
        ));
        assert!(matches!(
            auth_err(service.register("abcde", "password")),
            AuthError::InvalidPassword(_)
        ));
    }

    #[test]
    fn test_duplicate_registration_keeps_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        assert!(matches!(
            auth_err(service.register("abcde", "Efgh5678")),
            AuthError::DuplicateUser(_)
        ));
        assert_eq!(service.compact_store().unwrap(), 1);
    }

    #[test]
    fn test_unknown_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        assert!(matches!(
            auth_err(service.authenticate("zzzzz", "Abcd1234", Instant::now())),
            AuthError::UserNotFound(_)
        ));
    }

    #[test]
    fn test_wrong_password_reports_attempt_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        let now = Instant::now();
        assert!(matches!(
            auth_err(service.authenticate("abcde", "wrong000", now)),
            AuthError::WrongPassword { attempts: 1 }
        ));
        assert!(matches!(
            auth_err(service.authenticate("abcde", "wrong000", now)),
            AuthError::WrongPassword { attempts: 2 }
        ));
    }

    #[test]
    fn test_third_failure_locks_and_lock_rejects_without_password_check() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        let now = Instant::now();
        service.authenticate("abcde", "wrong000", now).unwrap_err();
        service.authenticate("abcde", "wrong000", now).unwrap_err();
        assert!(matches!(
            auth_err(service.authenticate("abcde", "wrong000", now)),
            AuthError::Locked { remaining } if remaining == Duration::from_secs(5)
        ));
        // Even the correct password is rejected while the lock is active.
        assert!(matches!(
            auth_err(service.authenticate("abcde", "Abcd1234", now + Duration::from_secs(1))),
            AuthError::Locked { .. }
        ));
    }

    #[test]
    fn test_lock_expiry_allows_login_without_resetting_counter() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        let now = Instant::now();
        for _ in 0..3 {
            service.authenticate("abcde", "wrong000", now).unwrap_err();
        }
        let after_expiry = now + Duration::from_secs(6);
        // Counter is still 3, so failures 4 and 5 pass through and the 6th
        // locks with the second-tier duration.
        service.authenticate("abcde", "wrong000", after_expiry).unwrap_err();
        service.authenticate("abcde", "wrong000", after_expiry).unwrap_err();
        assert!(matches!(
            auth_err(service.authenticate("abcde", "wrong000", after_expiry)),
            AuthError::Locked { remaining } if remaining == Duration::from_secs(10)
        ));
    }

    #[test]
    fn test_ban_rejects_correct_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        let mut now = Instant::now();
        for _ in 0..10 {
            service.authenticate("abcde", "wrong000", now).unwrap_err();
            now += Duration::from_secs(30);
        }
        assert!(matches!(
            auth_err(service.authenticate("abcde", "Abcd1234", now)),
            AuthError::Banned(_)
        ));
    }

    #[test]
    fn test_success_resets_failure_counter() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = service(&dir);
        service.register("abcde", "Abcd1234").unwrap();
        let now = Instant::now();
        service.authenticate("abcde", "wrong000", now).unwrap_err();
        service.authenticate("abcde", "wrong000", now).unwrap_err();
        service.authenticate("abcde", "Abcd1234", now).unwrap();
        // Two more failures land on 2, not 4, so no lock triggers.
        service.authenticate("abcde", "wrong000", now).unwrap_err();
        assert!(matches!(
            auth_err(service.authenticate("abcde", "wrong000", now)),
            AuthError::WrongPassword { attempts: 2 }
        ));
    }

    #[test]
    fn test_storage_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        // Point the store at a directory so reads fail with a real I/O error.
        let mut service = AuthService::with_parts(
            CredentialStore::new(dir.path()),
            LockoutPolicy::new(vec![Duration::from_secs(5)], 10),
            Box::new(FixedSaltSource),
            RulesConfig {
                username_length: 5,
                password_length: 8,
                salt_length: 5,
            },
        );
        assert!(matches!(
            service.register("abcde", "Abcd1234"),
            Err(PassgateError::Storage(StorageError::IoError(_)))
        ));
    }
}
