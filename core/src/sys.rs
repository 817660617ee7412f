//! Sys — executes typed commands against the configured agent.
//!
//! `Sys` owns the loaded settings plus the injected agent runner and sleeper.
//! It is the single dispatch point the CLI talks to; all side effects flow
//! through the injected runner, so the whole surface runs against a mock in
//! tests.

use crate::command::Command;
use crate::help;
use crate::infrastructure::control::AgentCommand;
use crate::infrastructure::runner::{AgentRunner, ProcessRunner};
use crate::infrastructure::{Sleeper, ThreadSleeper};
use crate::monitor::health::GroupHealth;
use crate::response::Response;
use crate::startup::controller::GroupController;
use crate::startup::retry::RetryPolicy;
use crate::startup::sequence::SequenceRunner;
use crate::types::config::Settings;


pub struct Sys {
    settings: Settings,
    runner: Box<dyn AgentRunner>,
    sleeper: Box<dyn Sleeper>,
}

impl Sys {
    /// Production Sys: spawns the real agent, blocks on real sleeps.
    pub fn new(settings: Settings) -> Sys {
        Sys::with_runner(settings, Box::new(ProcessRunner), Box::new(ThreadSleeper))
    }

    /// Sys with an injected runner and sleeper.
    pub fn with_runner(
        settings: Settings,
        runner: Box<dyn AgentRunner>,
        sleeper: Box<dyn Sleeper>,
    ) -> Sys {
        Sys {
            settings,
            runner,
            sleeper,
        }
    }

    /// Execute one command and produce a printable response.
    pub fn execute(&self, cmd: Command) -> Response {
        match cmd {
            Command::Start { groups, retries } => self.start_sequence(&groups, retries),
            Command::Status { group, format } => self.show_status(group, format.as_deref()),
            Command::Help { topic } => Response::Ok {
                output: help::help_text(topic.as_deref()),
            },
        }
    }

    fn start_sequence(&self, groups: &[u32], retries: Option<u32>) -> Response {
        let mut policy = RetryPolicy::from_settings(&self.settings);
        if let Some(max) = retries {
            policy.max_attempts = max;
        }
        let sequence = SequenceRunner::new(
            policy,
            &self.settings.agent_path,
            self.runner.as_ref(),
            self.sleeper.as_ref(),
        );
        let outcome = sequence.run(groups);
        match outcome.failed {
            None => Response::Ok {
                output: format!(
                    "Startup sequence completed: {} group(s) healthy",
                    outcome.started.len()
                ),
            },
            Some(group) => Response::Error {
                message: format!("Startup sequence failed at process group {}", group),
            },
        }
    }

    fn show_status(&self, group: u32, format: Option<&str>) -> Response {
        let controller = GroupController::new(
            group,
            RetryPolicy::from_settings(&self.settings),
            AgentCommand::new(&self.settings.agent_path),
            self.runner.as_ref(),
            self.sleeper.as_ref(),
        );
        let snapshot = match controller.poll() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                return Response::Error {
                    message: e.to_string(),
                }
            }
        };
        match format {
            Some("json") => match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => Response::Ok { output: json },
                Err(e) => Response::Error {
                    message: format!("cannot render snapshot: {}", e),
                },
            },
            _ => Response::Ok {
                output: format!("group {}: {}", group, GroupHealth::new(&snapshot).summary()),
            },
        }
    }
}
