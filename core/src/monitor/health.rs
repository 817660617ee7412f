//! Group health — read-only aggregates over one snapshot.
//!
//! A group is fully healthy when every reported process is GREEN and at
//! least one process was reported at all. The second clause matters: an
//! empty snapshot means the agent or its report went missing, not that the
//! group converged, so zero records never count as success.

use crate::types::process::{GroupSnapshot, ProcessStatus};

/// Read-only health view over one group snapshot.
pub struct GroupHealth<'a> {
    snapshot: &'a GroupSnapshot,
}

impl<'a> GroupHealth<'a> {
    pub fn new(snapshot: &'a GroupSnapshot) -> Self {
        GroupHealth { snapshot }
    }

    /// Number of records reporting the given status.
    pub fn count_by_status(&self, status: ProcessStatus) -> usize {
        self.snapshot
            .processes
            .iter()
            .filter(|p| p.status == status)
            .count()
    }

    /// Total records in the snapshot.
    pub fn count_total(&self) -> usize {
        self.snapshot.processes.len()
    }

    /// True iff the snapshot is non-empty and every process is GREEN.
    pub fn is_fully_healthy(&self) -> bool {
        let total = self.count_total();
        total > 0 && self.count_by_status(ProcessStatus::Green) == total
    }

    /// One-line summary, e.g. `"3 processes: 2 green, 1 red"`.
    pub fn summary(&self) -> String {
        let total = self.count_total();
        if total == 0 {
            return "0 processes".to_string();
        }
        let labels = [
            (ProcessStatus::Green, "green"),
            (ProcessStatus::Yellow, "yellow"),
            (ProcessStatus::Red, "red"),
            (ProcessStatus::Gray, "gray"),
            (ProcessStatus::Unknown, "unknown"),
        ];
        let mut parts = Vec::new();
        for (status, label) in labels {
            let count = self.count_by_status(status);
            if count > 0 {
                parts.push(format!("{} {}", count, label));
            }
        }
        format!("{} processes: {}", total, parts.join(", "))
    }
}
