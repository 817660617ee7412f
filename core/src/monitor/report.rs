//! Status report parser — turns the agent's tabular process list into records.
//!
//! The `GetProcessList` report has a fixed shape: a 4-line header, one 7-line
//! block per process, and a final line of trailing data. Each block line
//! carries its value as the third whitespace token. The extraction is
//! tolerant but lossy: a short line yields an empty field, not an error. A
//! missing line is different — it shifts every later block, so a trimmed line
//! count that is not a multiple of the block size is rejected outright rather
//! than truncated.

use std::fmt;

use crate::types::process::{GroupSnapshot, ProcessRecord, ProcessStatus};

/// Fixed header lines preceding the first process block.
pub const HEADER_LINES: usize = 4;
/// Fixed trailing lines after the last process block.
pub const TRAILER_LINES: usize = 1;
/// Lines per process block: name, description, status, text status,
/// start time, elapsed time, pid — in that order.
pub const BLOCK_LINES: usize = 7;

/// The trimmed report's line count was not a multiple of [`BLOCK_LINES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Line count after stripping header and trailer.
    pub line_count: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed process list: {} lines after trimming is not a multiple of {}",
            self.line_count, BLOCK_LINES
        )
    }
}

/// Parse a raw `GetProcessList` report into a snapshot for `group`.
///
/// Records appear in block order, which is the agent's intrinsic ordering.
/// A report with no blocks parses to an empty snapshot; the health model is
/// responsible for refusing to call that healthy.
pub fn parse_process_list(group: u32, raw: &str) -> Result<GroupSnapshot, ParseError> {
    let lines: Vec<&str> = raw.split('\n').collect();
    let body = if lines.len() <= HEADER_LINES + TRAILER_LINES {
        &[][..]
    } else {
        &lines[HEADER_LINES..lines.len() - TRAILER_LINES]
    };
    if body.len() % BLOCK_LINES != 0 {
        return Err(ParseError {
            line_count: body.len(),
        });
    }

    let mut processes = Vec::with_capacity(body.len() / BLOCK_LINES);
    for block in body.chunks(BLOCK_LINES) {
        processes.push(ProcessRecord {
            name: field(block[0]),
            description: field(block[1]),
            status: ProcessStatus::from_token(&field(block[2])),
            text_status: field(block[3]),
            start_time: field(block[4]),
            elapsed_time: field(block[5]),
            pid: field(block[6]),
        });
    }
    Ok(GroupSnapshot { group, processes })
}

/// The value of a report line: the third whitespace token, or the empty
/// string when the line has fewer than three tokens.
fn field(line: &str) -> String {
    line.split_whitespace().nth(2).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a raw report: 4 header lines, one block per entry, and the
    /// trailing newline whose empty final split element is the trailer.
    fn report(blocks: &[(&str, &str)]) -> String {
        let mut lines: Vec<String> = vec![
            "23.07.2026 10:12:33".into(),
            "GetProcessList".into(),
            "OK".into(),
            "name, description, dispstatus, textstatus, starttime, elapsedtime, pid".into(),
        ];
        for (i, (name, status)) in blocks.iter().enumerate() {
            lines.push(format!("{} name: {}", i, name));
            lines.push(format!("{} description: {}", i, name));
            lines.push(format!("{} dispstatus: {}", i, status));
            lines.push(format!("{} textstatus: Running", i));
            lines.push(format!("{} starttime: 2026-07-23-10:00:00", i));
            lines.push(format!("{} elapsedtime: 0:12:33", i));
            lines.push(format!("{} pid: {}", i, 4000 + i));
        }
        lines.push(String::new());
        lines.join("\n")
    }

    #[test]
    fn one_record_per_block_in_input_order() {
        let raw = report(&[
            ("msg_server", "GREEN"),
            ("disp+work", "YELLOW"),
            ("enq_server", "GREEN"),
        ]);
        let snapshot = parse_process_list(10, &raw).unwrap();
        assert_eq!(snapshot.group, 10);
        assert_eq!(snapshot.processes.len(), 3);
        assert_eq!(snapshot.processes[0].name, "msg_server");
        assert_eq!(snapshot.processes[1].name, "disp+work");
        assert_eq!(snapshot.processes[2].name, "enq_server");
    }

    #[test]
    fn fields_follow_block_order() {
        let raw = report(&[("msg_server", "GREEN")]);
        let record = &parse_process_list(0, &raw).unwrap().processes[0];
        assert_eq!(record.name, "msg_server");
        assert_eq!(record.description, "msg_server");
        assert_eq!(record.status, ProcessStatus::Green);
        assert_eq!(record.text_status, "Running");
        assert_eq!(record.start_time, "2026-07-23-10:00:00");
        assert_eq!(record.elapsed_time, "0:12:33");
        assert_eq!(record.pid, "4000");
    }

    #[test]
    fn status_tokens_map_to_enum() {
        let raw = report(&[
            ("a", "GREEN"),
            ("b", "YELLOW"),
            ("c", "RED"),
            ("d", "GRAY"),
            ("e", "STOPPING"),
        ]);
        let snapshot = parse_process_list(0, &raw).unwrap();
        let statuses: Vec<ProcessStatus> =
            snapshot.processes.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                ProcessStatus::Green,
                ProcessStatus::Yellow,
                ProcessStatus::Red,
                ProcessStatus::Gray,
                ProcessStatus::Unknown,
            ]
        );
    }

    #[test]
    fn short_line_yields_empty_field() {
        let mut raw = report(&[("msg_server", "GREEN")]);
        // Drop the value from the pid line: "0 pid: 4000" -> "0 pid:".
        raw = raw.replace("0 pid: 4000", "0 pid:");
        let record = &parse_process_list(0, &raw).unwrap().processes[0];
        assert_eq!(record.pid, "");
        assert_eq!(record.name, "msg_server");
    }

    #[test]
    fn short_status_line_is_unknown_not_error() {
        let mut raw = report(&[("msg_server", "GREEN")]);
        raw = raw.replace("0 dispstatus: GREEN", "0 dispstatus:");
        let record = &parse_process_list(0, &raw).unwrap().processes[0];
        assert_eq!(record.status, ProcessStatus::Unknown);
    }

    #[test]
    fn extra_tokens_after_value_are_dropped() {
        let mut raw = report(&[("msg_server", "GREEN")]);
        raw = raw.replace("0 description: msg_server", "0 description: Message Server");
        let record = &parse_process_list(0, &raw).unwrap().processes[0];
        assert_eq!(record.description, "Message");
    }

    #[test]
    fn header_and_trailer_are_stripped() {
        let raw = report(&[("msg_server", "GREEN")]);
        let snapshot = parse_process_list(0, &raw).unwrap();
        assert_eq!(snapshot.processes.len(), 1);
        assert_ne!(snapshot.processes[0].name, "GetProcessList");
    }

    #[test]
    fn missing_line_is_a_parse_error_with_count() {
        let raw = report(&[("a", "GREEN"), ("b", "GREEN")]);
        // Remove one whole line from the middle of a block.
        let truncated: Vec<&str> = raw.split('\n').take(12).chain(raw.split('\n').skip(13)).collect();
        let err = parse_process_list(0, &truncated.join("\n")).unwrap_err();
        assert_eq!(err.line_count, 13);
    }

    #[test]
    fn parse_error_message_names_the_count() {
        let err = ParseError { line_count: 13 };
        let message = err.to_string();
        assert!(message.contains("13"));
        assert!(message.contains("7"));
    }

    #[test]
    fn report_with_no_blocks_is_empty_snapshot() {
        let raw = report(&[]);
        let snapshot = parse_process_list(0, &raw).unwrap();
        assert!(snapshot.processes.is_empty());
    }

    #[test]
    fn report_shorter_than_header_is_empty_snapshot() {
        let snapshot = parse_process_list(0, "just\ntwo lines").unwrap();
        assert!(snapshot.processes.is_empty());
    }
}
