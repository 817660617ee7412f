//! Startup subsystem — retry policy, per-group controller, sequence runner.
//!
//! `retry` holds the attempt budget and backoff arithmetic. `controller`
//! drives one group through restart-and-poll cycles. `sequence` chains
//! groups in order and stops at the first group that exhausts its budget.

pub mod controller;
pub mod retry;
pub mod sequence;
