//! startseq CLI — the command-line entry point.
//!
//! # Usage
//!
//! ```text
//! startseq start 10 20 30
//! startseq status 10 --json
//! startseq help
//! ```

use std::path::PathBuf;
use std::process;

use startseq_core::cli::parse_args;
use startseq_core::response::Response;
use startseq_core::sys::Sys;
use startseq_core::types::config::Settings;


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("startseq: {}", e);
            process::exit(1);
        }
    };

    let settings = match load_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("startseq: {}", e);
            process::exit(1);
        }
    };

    match Sys::new(settings).execute(cmd) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("startseq error: {}", message);
            process::exit(1);
        }
    }
}


/// Settings come from `$STARTSEQ_CONFIG`, falling back to
/// `~/.config/startseq/config.yaml`; a missing file means defaults.
fn load_settings() -> Result<Settings, String> {
    let path = resolve_config_path();
    if path.exists() {
        Settings::load(&path)
    } else {
        Ok(Settings::default())
    }
}


fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("STARTSEQ_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home)
        .join(".config")
        .join("startseq")
        .join("config.yaml")
}
