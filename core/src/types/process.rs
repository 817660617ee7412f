use serde::{Deserialize, Serialize};

/// Status of one managed process as reported by the control agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Green,
    Yellow,
    Red,
    Gray,
    /// Any unrecognized or missing status token.
    Unknown,
}

impl ProcessStatus {
    /// Map a raw report token to a status. Exact matches only; anything else
    /// (including the empty string) is `Unknown`.
    pub fn from_token(token: &str) -> ProcessStatus {
        match token {
            "GREEN" => ProcessStatus::Green,
            "YELLOW" => ProcessStatus::Yellow,
            "RED" => ProcessStatus::Red,
            "GRAY" => ProcessStatus::Gray,
            _ => ProcessStatus::Unknown,
        }
    }
}

/// One managed OS-level process at one point in time. All fields except
/// `status` are carried verbatim from the report; the agent may emit
/// non-numeric placeholders for `pid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessRecord {
    pub name: String,
    pub description: String,
    pub status: ProcessStatus,
    pub text_status: String,
    pub start_time: String,
    pub elapsed_time: String,
    pub pid: String,
}

/// The ordered process records for one group at one point in time.
/// A snapshot is a value: every poll builds a fresh one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupSnapshot {
    pub group: u32,
    pub processes: Vec<ProcessRecord>,
}
