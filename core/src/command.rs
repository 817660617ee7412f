//! Command — the typed interface for every startseq operation.
//!
//! Each CLI invocation parses to exactly one `Command` variant, dispatched
//! through `Sys::execute()`. Commands serialize as JSON objects with a
//! `"command"` discriminant, which keeps the surface scriptable:
//!
//! ```json
//! {"command": "start", "groups": [10, 20]}
//! {"command": "status", "group": 10, "format": "json"}
//! ```

use serde::{Deserialize, Serialize};

/// A typed startseq operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "command")]
pub enum Command {
    /// Start the given process groups strictly in order.
    #[serde(rename = "start")]
    Start {
        /// Group numbers in start order.
        groups: Vec<u32>,
        /// Override for the maximum start attempts per group.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        retries: Option<u32>,
    },

    /// Poll one group and render its process records.
    #[serde(rename = "status")]
    Status {
        group: u32,
        /// Output format: "json" for pretty JSON, omit for a summary line.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    /// Show help.
    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
