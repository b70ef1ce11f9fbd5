//! # Assistant CLI
//!
//! The binary is thin: it calls `cli::run()` and turns a returned error into a
//! message on stderr and exit status 1. Everything else lives in `cli/`:
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: logging, session wiring, the read-eval loop, one-shot runs
//! - `render.rs`: turns a `CmdResult` into colored text
//!
//! Only storage failures reach `main`; user mistakes are reported inside the
//! session and never end it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
