//! Command routing - maps a route name to its handler
//!
//! [`dispatch`] takes a translated [`ArgumentVector`], [`route`] takes an
//! already-parsed command. Both end in the same routing table.

use std::io::Write;

use clap::Parser;
use tracing::{debug, info};

use super::args::{Cli, Commands, FileArgs, GreetArgs, GreetCommand, BIN_NAME};
use super::form::{ArgumentVector, CommandSelection};
use crate::commands::{describe_file, greeting_lines, CommandError, InteractiveSession};

/// Line printed when no command was given.
pub const BASE_MESSAGE: &str =
    "Base command for navigation and help. Run with --help to list commands.";

/// Parse and execute an argument vector.
///
/// An empty vector takes the base route. A first token that names no route
/// fails with [`CommandError::UnrecognizedCommand`] before any parsing, and
/// launcher options are rejected after it.
pub fn dispatch(
    args: &ArgumentVector,
    out: &mut dyn Write,
    session: &mut dyn InteractiveSession,
) -> Result<(), CommandError> {
    if let Some(name) = args.route() {
        if !name.starts_with('-') && CommandSelection::from_route_name(name).is_none() {
            return Err(CommandError::UnrecognizedCommand(name.to_string()));
        }
    }

    debug!(args = %args, "dispatching argument vector");
    let argv = std::iter::once(BIN_NAME).chain(args.tokens().iter().map(String::as_str));
    let cli = Cli::try_parse_from(argv)?;
    if cli.form {
        return Err(CommandError::LauncherOption("--form"));
    }
    if cli.config.is_some() {
        return Err(CommandError::LauncherOption("--config"));
    }
    route(cli.command, out, session)
}

/// Execute a parsed command.
pub fn route(
    command: Option<Commands>,
    out: &mut dyn Write,
    session: &mut dyn InteractiveSession,
) -> Result<(), CommandError> {
    match command {
        None => {
            writeln!(out, "{}", BASE_MESSAGE)?;
            Ok(())
        }
        Some(Commands::DynamicGreet(GreetCommand::Greet(args))) => greet(&args, out),
        Some(Commands::EnhancedFile(args)) => process_file(&args, out),
        Some(Commands::Interactive) => {
            info!("handing off to interactive session");
            session.run(out)
        }
        Some(Commands::Unrecognized(tokens)) => Err(CommandError::UnrecognizedCommand(
            tokens.into_iter().next().unwrap_or_default(),
        )),
    }
}

fn greet(args: &GreetArgs, out: &mut dyn Write) -> Result<(), CommandError> {
    if args.repeat < 0 {
        debug!(repeat = args.repeat, "negative repeat count treated as zero");
    }
    for line in greeting_lines(&args.name, &args.greeting, args.repeat) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn process_file(args: &FileArgs, out: &mut dyn Write) -> Result<(), CommandError> {
    if args.save {
        debug!("--save accepted; no output file is written");
    }
    writeln!(out, "{}", describe_file(args.file.as_deref(), args.format))?;
    Ok(())
}
