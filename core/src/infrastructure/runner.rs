//! Agent invocation — executing argument vectors against the real agent.
//!
//! `AgentRunner` is the single I/O boundary of the orchestration core.
//! `ProcessRunner` is the production implementation that spawns the agent
//! binary. `MockRunner` is the test double that records invocations and
//! returns preset responses.

use std::cell::RefCell;
use std::process::Command;

/// Trait for invoking the control agent with a full argument vector
/// (`argv[0]` is the agent binary).
pub trait AgentRunner {
    fn invoke(&self, argv: &[String]) -> Result<String, String>;
}

/// Production runner that spawns the agent and waits for it to exit.
///
/// The entire output stream is consumed before the exit status is checked,
/// so a chatty agent can never deadlock on a full pipe.
pub struct ProcessRunner;

impl AgentRunner for ProcessRunner {
    fn invoke(&self, argv: &[String]) -> Result<String, String> {
        let (program, args) = argv.split_first().ok_or("empty agent command")?;
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| format!("failed to launch {}: {}", program, e))?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
    }
}

/// Test-double runner that records invocations and returns pre-configured
/// responses in order. Once the script runs dry it returns empty output.
pub struct MockRunner {
    responses: RefCell<Vec<Result<String, String>>>,
    invocations: RefCell<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        MockRunner {
            responses: RefCell::new(Vec::new()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub fn with_responses(responses: Vec<Result<String, String>>) -> Self {
        let mut reversed = responses;
        reversed.reverse();
        MockRunner {
            responses: RefCell::new(reversed),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// All argument vectors invoked against this runner, in order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.borrow().clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentRunner for MockRunner {
    fn invoke(&self, argv: &[String]) -> Result<String, String> {
        self.invocations.borrow_mut().push(argv.to_vec());
        let mut responses = self.responses.borrow_mut();
        if let Some(response) = responses.pop() {
            response
        } else {
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mock_records_invocations() {
        let runner = MockRunner::with_responses(vec![Ok("one".into()), Ok("two".into())]);
        runner.invoke(&argv(&["agent", "-nr", "1"])).unwrap();
        runner.invoke(&argv(&["agent", "-nr", "2"])).unwrap();
        let calls = runner.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], argv(&["agent", "-nr", "1"]));
        assert_eq!(calls[1], argv(&["agent", "-nr", "2"]));
    }

    #[test]
    fn mock_returns_responses_in_order() {
        let runner = MockRunner::with_responses(vec![
            Ok("first".into()),
            Err("fail".into()),
            Ok("third".into()),
        ]);
        assert_eq!(runner.invoke(&argv(&["a"])).unwrap(), "first");
        assert_eq!(runner.invoke(&argv(&["b"])).unwrap_err(), "fail");
        assert_eq!(runner.invoke(&argv(&["c"])).unwrap(), "third");
    }

    #[test]
    fn mock_defaults_to_empty_ok() {
        let runner = MockRunner::new();
        assert_eq!(runner.invoke(&argv(&["anything"])).unwrap(), "");
    }

    #[test]
    fn process_runner_rejects_empty_argv() {
        let runner = ProcessRunner;
        assert!(runner.invoke(&[]).is_err());
    }
}
