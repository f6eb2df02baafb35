//! Lockout state machine
//!
//! Tracks per-username failure counters in process memory, no I/O. Every
//! third failure locks the account with an escalating duration; reaching the
//! ban threshold bans it permanently. An expired lock clears lazily on the
//! next status check without touching the counter; only a successful
//! authentication resets the counter. A ban is terminal.

use log::warn;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Every LOCK_INTERVAL-th failure triggers a timed lock.
const LOCK_INTERVAL: u32 = 3;

/// Standing of one username at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    Ok,
    Locked { remaining: Duration },
    Banned,
}

#[derive(Debug, Default)]
struct LockoutState {
    failed_attempts: u32,
    locked_until: Option<Instant>,
    banned: bool,
}

/// Per-username lockout state map with an injectable duration ladder.
pub struct LockoutPolicy {
    states: HashMap<String, LockoutState>,
    lock_durations: Vec<Duration>,
    ban_threshold: u32,
}

impl LockoutPolicy {
    /// `lock_durations` is the escalating ladder for the 1st, 2nd, ... lock;
    /// `ban_threshold` is the cumulative failure count that bans the account.
    pub fn new(lock_durations: Vec<Duration>, ban_threshold: u32) -> Self {
        Self {
            states: HashMap::new(),
            lock_durations,
            ban_threshold,
        }
    }

    /// Reports the account's standing at `now`. Side-effect-free except for
    /// lazily clearing an expired lock marker; the failure counter survives
    /// lock expiry.
    pub fn check_status(&mut self, username: &str, now: Instant) -> AccountStatus {
        let Some(state) = self.states.get_mut(username) else {
            return AccountStatus::Ok;
        };
        if state.banned {
            return AccountStatus::Banned;
        }
        if let Some(until) = state.locked_until {
            if now < until {
                return AccountStatus::Locked {
                    remaining: until - now,
                };
            }
            state.locked_until = None;
        }
        AccountStatus::Ok
    }

    /// Increments the failure counter and returns the resulting standing.
    pub fn record_failure(&mut self, username: &str, now: Instant) -> AccountStatus {
        let state = self.states.entry(username.to_string()).or_default();
        if state.banned {
            return AccountStatus::Banned;
        }

        state.failed_attempts += 1;

        if state.failed_attempts >= self.ban_threshold {
            state.banned = true;
            state.locked_until = None;
            warn!(
                "Banning {} after {} failed attempts",
                username, state.failed_attempts
            );
            return AccountStatus::Banned;
        }

        if state.failed_attempts % LOCK_INTERVAL == 0 {
            let step = (state.failed_attempts / LOCK_INTERVAL - 1) as usize;
            let duration = self.lock_durations[step.min(self.lock_durations.len() - 1)];
            state.locked_until = Some(now + duration);
            warn!(
                "Locking {} for {}s after {} failed attempts",
                username,
                duration.as_secs(),
                state.failed_attempts
            );
            return AccountStatus::Locked {
                remaining: duration,
            };
        }

        AccountStatus::Ok
    }

    /// Resets the failure counter and clears any active lock. Never clears a
    /// ban.
    pub fn record_success(&mut self, username: &str) {
        if let Some(state) = self.states.get_mut(username) {
            if state.banned {
                return;
            }
            state.failed_attempts = 0;
            state.locked_until = None;
        }
    }

    /// Cumulative failure count since the last successful authentication.
    pub fn failure_count(&self, username: &str) -> u32 {
        self.states
            .get(username)
            .map(|s| s.failed_attempts)
            .unwrap_or(0)
    }
}
