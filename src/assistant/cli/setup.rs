use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assistant", bin_name = "assistant", version)]
#[command(about = "Personal assistant for contacts, birthdays and notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts, notes and config.json
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one command line and save, e.g. `assistant run add Ivan 0501234567`
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Print command names starting with PREFIX
    #[command(name = "__complete", hide = true)]
    Complete {
        #[arg(default_value = "")]
        prefix: String,
    },
}
