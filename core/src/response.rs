//! Response — the result envelope printed by the CLI.

use serde::{Deserialize, Serialize};

/// Result of executing a `Command`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}
