use crate::command::Command;


/// Parse CLI arguments into a typed Command enum.
///
/// Arguments are expected WITHOUT the program name (i.e., `args` should be
/// `["start", "10"]`, not `["startseq", "start", "10"]`).
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'startseq help' for usage.".into());
    }

    match args[0] {
        "start" => parse_start(args),
        "status" => parse_status(args),
        "help" => parse_help(args),
        _ => Err(format!("Unknown command: '{}'", args[0])),
    }
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `startseq start <nr> [<nr>...] [--retries <n>]`
fn parse_start(args: &[&str]) -> Result<Command, String> {
    let mut groups = Vec::new();
    let mut retries = None;

    let rest = &args[1..];
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--retries" => {
                i += 1;
                let value = take_arg(rest, i, "--retries")?;
                let count: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid retry count: '{}'", value))?;
                if count == 0 {
                    return Err("--retries must be positive".into());
                }
                retries = Some(count);
            }
            other => groups.push(parse_group(other)?),
        }
        i += 1;
    }
    if groups.is_empty() {
        return Err("Usage: startseq start <nr> [<nr>...] [--retries <n>]".into());
    }
    Ok(Command::Start { groups, retries })
}

/// `startseq status <nr> [--json]`
fn parse_status(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: startseq status <nr> [--json]".into());
    }
    let group = parse_group(args[1])?;
    let format = if args[2..].contains(&"--json") {
        Some("json".into())
    } else {
        None
    };
    Ok(Command::Status { group, format })
}

/// `startseq help [topic]`
fn parse_help(args: &[&str]) -> Result<Command, String> {
    let topic = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };
    Ok(Command::Help { topic })
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_group(token: &str) -> Result<u32, String> {
    token
        .parse()
        .map_err(|_| format!("Invalid group number: '{}'", token))
}

/// Safely take an argument value after a flag.
fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    if index >= args.len() {
        return Err(format!("{} requires a value", flag));
    }
    Ok(args[index].into())
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
