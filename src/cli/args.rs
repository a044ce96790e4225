//! Command-line argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::OutputFormat;

/// Binary name used as argv[0] when parsing translated argument vectors.
pub const BIN_NAME: &str = "cgkit";

/// CommandGuiKit - fill in a form or pass a command, and it gets routed
#[derive(Parser, Debug)]
#[command(name = "cgkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Collect the command through the interactive form instead of arguments
    #[arg(long, default_value = "false")]
    pub form: bool,

    /// Shell configuration file (JSON).
    /// Defaults to <config dir>/cgkit/shell.json when that file exists.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Routes reachable from the command line.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Greet dynamically
    #[command(name = "dynamic-greet", subcommand)]
    DynamicGreet(GreetCommand),

    /// Process file and save output
    #[command(name = "enhanced-file")]
    EnhancedFile(FileArgs),

    /// Start an interactive command session
    Interactive,

    /// Any other command name; rejected by the router
    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

/// Subcommands nested under `dynamic-greet`.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GreetCommand {
    /// Print the greeting the requested number of times
    #[command(name = "greet-subcommand")]
    Greet(GreetArgs),
}

/// Arguments for `dynamic-greet greet-subcommand`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GreetArgs {
    /// Your name
    #[arg(long, default_value = "User", allow_hyphen_values = true)]
    pub name: String,

    /// Custom greeting
    #[arg(long, default_value = "Hello", allow_hyphen_values = true)]
    pub greeting: String,

    /// Number of times to repeat the greeting (negative values print nothing)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub repeat: i64,
}

/// Arguments for `enhanced-file`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct FileArgs {
    /// Path to input file
    #[arg(long, allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Save output to file (accepted, currently writes nothing)
    #[arg(long, default_value = "false")]
    pub save: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
