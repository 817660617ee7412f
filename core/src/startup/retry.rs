//! Retry policy — attempt budget plus closed-form backoff delays.
//!
//! The delay is a pure function of the 1-based attempt number; there is no
//! generator state to carry between attempts.

use std::time::Duration;

use crate::types::config::{BackoffStrategy, Settings};

const SECS_PER_MIN: u64 = 60;

/// Controls how many start attempts a group gets and how long to wait
/// between a restart command and its health poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub strategy: BackoffStrategy,
    pub base_delay_mins: u64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, strategy: BackoffStrategy, base_delay_mins: u64) -> Self {
        RetryPolicy {
            max_attempts,
            strategy,
            base_delay_mins,
        }
    }

    /// Build a policy from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        RetryPolicy {
            max_attempts: settings.max_attempts,
            strategy: settings.backoff_strategy.clone(),
            base_delay_mins: settings.base_delay_mins,
        }
    }

    /// Whether the given 1-based attempt number is within the budget.
    pub fn within_budget(&self, attempt: u32) -> bool {
        attempt <= self.max_attempts
    }

    /// Delay in whole minutes before the poll of the given 1-based attempt.
    ///
    /// `Ramp` waits a single minute on the first attempt and
    /// `base · (attempt − 1)` minutes afterwards: 1, 5, 10, 15, … with the
    /// default base of 5. Unbounded, and strictly increasing from the second
    /// term on.
    pub fn delay_mins(&self, attempt: u32) -> u64 {
        match self.strategy {
            BackoffStrategy::Ramp => {
                if attempt <= 1 {
                    1
                } else {
                    self.base_delay_mins * (attempt as u64 - 1)
                }
            }
            BackoffStrategy::Fixed => self.base_delay_mins,
            BackoffStrategy::Linear => self.base_delay_mins * attempt as u64,
        }
    }

    /// The same delay as a `Duration`.
    pub fn delay(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.delay_mins(attempt) * SECS_PER_MIN)
    }
}

impl Default for RetryPolicy {
    /// Default: 4 attempts, ramp backoff of 1, 5, 10, 15, … minutes.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 4,
            strategy: BackoffStrategy::Ramp,
            base_delay_mins: 5,
        }
    }
}
