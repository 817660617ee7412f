//! Group controller — drives one process group from restart to observed health.
//!
//! Each cycle issues the restart command, sleeps for the attempt's backoff
//! delay, then polls and evaluates the snapshot. Restarts are assumed
//! idempotent, so every retry restarts again rather than merely re-polling.
//! Agent invocation failures and malformed reports count as a not-yet-healthy
//! attempt; only an exhausted budget is terminal. One `start_process` call
//! owns one attempt counter — nothing is shared across calls or groups.

use std::fmt;

use crate::infrastructure::control::AgentCommand;
use crate::infrastructure::runner::AgentRunner;
use crate::infrastructure::Sleeper;
use crate::monitor::health::GroupHealth;
use crate::monitor::report::{parse_process_list, ParseError};
use crate::startup::retry::RetryPolicy;
use crate::types::process::GroupSnapshot;

/// Why one poll produced no usable snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The agent could not be launched or exited abnormally.
    Invocation(String),
    /// The agent ran but its report was malformed.
    Report(ParseError),
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollError::Invocation(message) => write!(f, "agent invocation failed: {}", message),
            PollError::Report(e) => write!(f, "{}", e),
        }
    }
}

/// Outcome of one `start_process` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReport {
    pub group: u32,
    /// True when a poll observed the group fully healthy within budget.
    pub started: bool,
    /// Restart commands issued (equals polls performed).
    pub attempts: u32,
}

/// Drives a single group through restart-and-poll cycles.
pub struct GroupController<'a> {
    group: u32,
    policy: RetryPolicy,
    command: AgentCommand,
    runner: &'a dyn AgentRunner,
    sleeper: &'a dyn Sleeper,
}

impl<'a> GroupController<'a> {
    pub fn new(
        group: u32,
        policy: RetryPolicy,
        command: AgentCommand,
        runner: &'a dyn AgentRunner,
        sleeper: &'a dyn Sleeper,
    ) -> Self {
        GroupController {
            group,
            policy,
            command,
            runner,
            sleeper,
        }
    }

    /// Start the group and wait for it to converge to fully healthy.
    pub fn start_process(&self) -> StartReport {
        let mut attempt = 1;
        while self.policy.within_budget(attempt) {
            log::info!(
                "Starting process group {}. This is attempt {} of {}",
                self.group,
                attempt,
                self.policy.max_attempts
            );
            // Restart success is judged solely by the poll that follows.
            if let Err(e) = self.runner.invoke(&self.command.restart_system(self.group)) {
                log::warn!("group {}: restart command failed: {}", self.group, e);
            }

            log::info!(
                "group {}: sleeping for {} minute(s)",
                self.group,
                self.policy.delay_mins(attempt)
            );
            self.sleeper.sleep(self.policy.delay(attempt));

            match self.poll() {
                Ok(snapshot) => {
                    let health = GroupHealth::new(&snapshot);
                    if health.is_fully_healthy() {
                        log::info!(
                            "Successful start of process group {} ({})",
                            self.group,
                            health.summary()
                        );
                        return StartReport {
                            group: self.group,
                            started: true,
                            attempts: attempt,
                        };
                    }
                    log::info!(
                        "group {}: not healthy yet ({})",
                        self.group,
                        health.summary()
                    );
                }
                Err(e) => {
                    log::warn!(
                        "group {}: poll failed, counting the attempt as unhealthy: {}",
                        self.group,
                        e
                    );
                }
            }
            attempt += 1;
        }

        log::error!(
            "Failed to start process group {} after {} attempts",
            self.group,
            self.policy.max_attempts
        );
        StartReport {
            group: self.group,
            started: false,
            attempts: self.policy.max_attempts,
        }
    }

    /// One status poll: invoke `GetProcessList` and parse the report.
    pub fn poll(&self) -> Result<GroupSnapshot, PollError> {
        let raw = self
            .runner
            .invoke(&self.command.process_list(self.group))
            .map_err(PollError::Invocation)?;
        parse_process_list(self.group, &raw).map_err(PollError::Report)
    }
}
