//! startseq-core — ordered startup of process groups via an external control agent.
//!
//! The control agent is an opaque binary that restarts a group and reports
//! per-process status as a fixed tabular text report. This crate parses that
//! report (`monitor::report`), derives health aggregates (`monitor::health`),
//! drives one group through restart-and-poll cycles with bounded retries
//! (`startup::controller`), and chains groups strictly in order
//! (`startup::sequence`). All side effects flow through the injected
//! `infrastructure` traits, so the orchestration core runs against a mock
//! agent in tests.

pub mod cli;
pub mod command;
pub mod help;
pub mod infrastructure;
pub mod monitor;
pub mod response;
pub mod startup;
pub mod sys;
pub mod types;
