//! # CLI Behavior
//!
//! Running `assistant` with no subcommand starts an interactive session: a
//! greeting, then one command per line until `close`, `exit` or end of input.
//! Both collections are saved when the session ends either way. On a terminal
//! the session reads through a line editor with history, and Tab completes the
//! command word.
//!
//! `assistant run <command> [args…]` executes a single command line and saves,
//! which makes the assistant scriptable.
//!
//! `assistant __complete <prefix>` is hidden; it prints the command names that
//! start with `prefix`, one per line, for shell completion scripts.

mod commands;
mod complete;
mod render;
pub mod setup;

pub use commands::run;
