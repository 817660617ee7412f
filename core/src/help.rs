//! Help system — usage text for the startseq commands.

/// Generate help text for a given topic.
///
/// - `None` → overview of all commands
/// - `Some("start")` / `Some("status")` / `Some("config")` → topic detail
pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some("start") => start_help(),
        Some("status") => status_help(),
        Some("config") => config_help(),
        Some(t) => format!(
            "Unknown help topic: '{}'. Run 'startseq help' for a list of commands.",
            t
        ),
    }
}


fn overview() -> String {
    "\
startseq — ordered startup of process groups via the control agent

Usage: startseq <command> [args...]

Commands:
  start <nr> [<nr>...] [--retries <n>]   Start groups in order, waiting for
                                         each to report fully healthy
  status <nr> [--json]                   Poll one group and show its processes
  help [topic]                           Show help (topics: start, status, config)
"
    .to_string()
}

fn start_help() -> String {
    "\
startseq start <nr> [<nr>...] [--retries <n>]

Starts each process group strictly in the given order. For every group the
control agent's RestartSystem is issued, then the group is polled until every
process reports GREEN. A group that is not healthy is restarted again, with a
growing wait between attempts (1 minute, then 5, 10, 15, ...). The sequence
stops at the first group that is still unhealthy after the attempt budget
(default 4, override with --retries).
"
    .to_string()
}

fn status_help() -> String {
    "\
startseq status <nr> [--json]

Polls the control agent once for the given group and shows the parsed process
records: a one-line health summary by default, or the full records as pretty
JSON with --json.
"
    .to_string()
}

fn config_help() -> String {
    "\
Configuration is read from $STARTSEQ_CONFIG, falling back to
~/.config/startseq/config.yaml. A missing file means defaults. Keys:

  agent_path        Path to the control agent binary
  max_attempts      Start attempts per group (default 4)
  backoff_strategy  ramp (default), fixed, or linear
  base_delay_mins   Base backoff delay in minutes (default 5)
"
    .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_commands() {
        let text = help_text(None);
        assert!(text.contains("start"));
        assert!(text.contains("status"));
        assert!(text.contains("help"));
    }

    #[test]
    fn start_topic_mentions_retries() {
        let text = help_text(Some("start"));
        assert!(text.contains("--retries"));
    }

    #[test]
    fn status_topic_mentions_json() {
        let text = help_text(Some("status"));
        assert!(text.contains("--json"));
    }

    #[test]
    fn config_topic_lists_keys() {
        let text = help_text(Some("config"));
        assert!(text.contains("agent_path"));
        assert!(text.contains("max_attempts"));
    }

    #[test]
    fn unknown_topic() {
        let text = help_text(Some("bogus"));
        assert!(text.contains("Unknown help topic"));
    }
}
