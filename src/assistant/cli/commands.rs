//! Session wiring and dispatch for the binary.
//!
//! - `run()`: parses arguments, sets up logging, picks a mode
//! - `handle_session()`: the interactive loop, edited on a terminal and plain
//!   line reads otherwise
//! - `handle_run()`: a single command line from the arguments
//! - `handle_complete()`: command-name completion

use super::complete::CommandHelper;
use super::render::render_result;
use super::setup::{Cli, Commands};
use assistant::api::AssistantApi;
use assistant::commands::input::complete;
use assistant::error::{AssistantError, Result};
use assistant::init::{initialize, resolve_data_dir, AssistantContext};
use assistant::store::DataStore;
use clap::Parser;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

pub fn run() -> Result<()> {
    let Cli {
        command,
        data_dir,
        verbose,
    } = Cli::parse();
    init_logging(verbose);

    match command {
        Some(Commands::Complete { prefix }) => handle_complete(&prefix),
        Some(Commands::Run { tokens }) => handle_run(&mut open(data_dir)?, &tokens),
        None => handle_session(&mut open(data_dir)?),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn open(data_dir: Option<PathBuf>) -> Result<AssistantContext> {
    let dir = resolve_data_dir(data_dir.as_deref())?;
    initialize(dir)
}

fn handle_complete(prefix: &str) -> Result<()> {
    for name in complete(prefix) {
        println!("{}", name);
    }
    Ok(())
}

fn handle_run(ctx: &mut AssistantContext, tokens: &[String]) -> Result<()> {
    let line = tokens.join(" ");
    let result = ctx.api.execute(&line)?;
    print!("{}", render_result(&result));
    if !result.exit {
        ctx.api.save()?;
    }
    Ok(())
}

fn handle_session(ctx: &mut AssistantContext) -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return edited_session(&mut ctx.api);
    }
    let stdout = io::stdout();
    session(&mut ctx.api, stdin.lock(), stdout.lock())
}

/// The terminal session: history plus Tab completion of the command word.
/// Ctrl-C and Ctrl-D end it the same way end of input does.
fn edited_session<S: DataStore>(api: &mut AssistantApi<S>) -> Result<()> {
    let mut editor: Editor<CommandHelper, DefaultHistory> =
        Editor::new().map_err(editor_error)?;
    editor.set_helper(Some(CommandHelper));

    println!("{}", WELCOME);
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let result = api.execute(&line)?;
                print!("{}", render_result(&result));
                if result.exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                debug!("session interrupted, saving");
                api.save()?;
                return Ok(());
            }
            Err(err) => return Err(editor_error(err)),
        }
    }
}

fn editor_error(err: ReadlineError) -> AssistantError {
    match err {
        ReadlineError::Io(err) => AssistantError::Io(err),
        other => AssistantError::Io(io::Error::other(other.to_string())),
    }
}

/// Reads commands from `input` until `close`/`exit` or end of input, saving
/// on the way out in both cases.
fn session<S, R, W>(api: &mut AssistantApi<S>, mut input: R, mut out: W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, saving");
            writeln!(out)?;
            api.save()?;
            return Ok(());
        }

        let result = api.execute(&line)?;
        write!(out, "{}", render_result(&result))?;
        if result.exit {
            return Ok(());
        }
    }
}
