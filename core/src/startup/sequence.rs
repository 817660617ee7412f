//! Sequence runner — starts groups in order, aborting on the first failure.
//!
//! Later groups in a deployment may depend on earlier ones being healthy, so
//! groups start strictly one after another and the first group to exhaust its
//! attempt budget stops the whole sequence. Groups already started are left
//! running; restarts are idempotent, so nothing is rolled back.

use crate::infrastructure::control::AgentCommand;
use crate::infrastructure::runner::AgentRunner;
use crate::infrastructure::Sleeper;
use crate::startup::controller::GroupController;
use crate::startup::retry::RetryPolicy;

/// Outcome of one sequence run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOutcome {
    /// Groups observed fully healthy, in start order.
    pub started: Vec<u32>,
    /// The first group that exhausted its attempt budget, if any.
    pub failed: Option<u32>,
}

impl SequenceOutcome {
    pub fn succeeded(&self) -> bool {
        self.failed.is_none()
    }
}

/// Starts process groups strictly in order, with a fresh controller (and a
/// fresh attempt counter) per group.
pub struct SequenceRunner<'a> {
    policy: RetryPolicy,
    agent_path: String,
    runner: &'a dyn AgentRunner,
    sleeper: &'a dyn Sleeper,
}

impl<'a> SequenceRunner<'a> {
    pub fn new(
        policy: RetryPolicy,
        agent_path: &str,
        runner: &'a dyn AgentRunner,
        sleeper: &'a dyn Sleeper,
    ) -> Self {
        SequenceRunner {
            policy,
            agent_path: agent_path.to_string(),
            runner,
            sleeper,
        }
    }

    /// Start each group in order; stop at the first that fails to converge.
    pub fn run(&self, groups: &[u32]) -> SequenceOutcome {
        let mut started = Vec::new();
        for &group in groups {
            let controller = GroupController::new(
                group,
                self.policy.clone(),
                AgentCommand::new(&self.agent_path),
                self.runner,
                self.sleeper,
            );
            let report = controller.start_process();
            if !report.started {
                log::error!(
                    "Startup sequence aborted: process group {} failed after {} attempts",
                    group,
                    report.attempts
                );
                return SequenceOutcome {
                    started,
                    failed: Some(group),
                };
            }
            started.push(group);
        }
        log::info!("Startup sequence completed: {} group(s) healthy", started.len());
        SequenceOutcome {
            started,
            failed: None,
        }
    }
}
