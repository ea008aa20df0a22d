//! CLI library for vpc.
//!
//! The binary in `main.rs` parses arguments and dispatches into
//! [`commands`]; keeping the logic here lets the command handlers be
//! integration-tested without spawning a process.

pub mod cli;
pub mod commands;
