//! Control agent command builder.
//!
//! `AgentCommand` builds the argument vectors for the external control agent
//! without spawning it. The agent addresses a group by number via `-nr` and
//! an operation via `-function`; `GetProcessList` additionally asks for the
//! machine-readable `script` format.

/// Builds argv for control agent invocations. `argv[0]` is the agent binary.
#[derive(Debug, Clone)]
pub struct AgentCommand {
    agent_path: String,
}

impl AgentCommand {
    pub fn new(agent_path: &str) -> Self {
        AgentCommand {
            agent_path: agent_path.to_string(),
        }
    }

    /// `<agent> -nr <group> -function GetProcessList -format script`
    pub fn process_list(&self, group: u32) -> Vec<String> {
        vec![
            self.agent_path.clone(),
            "-nr".to_string(),
            group.to_string(),
            "-function".to_string(),
            "GetProcessList".to_string(),
            "-format".to_string(),
            "script".to_string(),
        ]
    }

    /// `<agent> -nr <group> -function RestartSystem`
    pub fn restart_system(&self, group: u32) -> Vec<String> {
        vec![
            self.agent_path.clone(),
            "-nr".to_string(),
            group.to_string(),
            "-function".to_string(),
            "RestartSystem".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_list_argv() {
        let cmd = AgentCommand::new("/opt/agent/ctl");
        assert_eq!(
            cmd.process_list(10),
            vec![
                "/opt/agent/ctl",
                "-nr",
                "10",
                "-function",
                "GetProcessList",
                "-format",
                "script",
            ]
        );
    }

    #[test]
    fn restart_system_argv() {
        let cmd = AgentCommand::new("/opt/agent/ctl");
        assert_eq!(
            cmd.restart_system(3),
            vec!["/opt/agent/ctl", "-nr", "3", "-function", "RestartSystem"]
        );
    }
}
