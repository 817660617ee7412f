use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackoffStrategy {
    /// One minute before the first poll, then `base · (attempt − 1)` minutes.
    Ramp,
    Fixed,
    Linear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Path to the control agent binary.
    #[serde(default = "default_agent_path")]
    pub agent_path: String,
    /// Maximum start attempts per group.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_strategy")]
    pub backoff_strategy: BackoffStrategy,
    /// Base backoff delay in minutes.
    #[serde(default = "default_base_delay_mins")]
    pub base_delay_mins: u64,
}

fn default_agent_path() -> String {
    "/usr/sap/hostctrl/exe/sapcontrol".to_string()
}

fn default_max_attempts() -> u32 {
    4
}

fn default_backoff_strategy() -> BackoffStrategy {
    BackoffStrategy::Ramp
}

fn default_base_delay_mins() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            agent_path: default_agent_path(),
            max_attempts: default_max_attempts(),
            backoff_strategy: default_backoff_strategy(),
            base_delay_mins: default_base_delay_mins(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Settings, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Settings::parse(&content)
    }

    /// Parse settings from a YAML string. Absent keys keep their defaults.
    pub fn parse(content: &str) -> Result<Settings, String> {
        serde_yaml::from_str(content).map_err(|e| format!("invalid settings: {}", e))
    }

    /// Save settings to a YAML file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("cannot serialize settings: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write {}: {}", path.display(), e))
    }
}
