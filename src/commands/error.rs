//! Error types for command routing and execution.

use thiserror::Error;

/// Errors that can occur while routing or running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The first token of the argument vector names no known route.
    #[error("unrecognized command '{0}' (expected one of: dynamic-greet, enhanced-file, interactive)")]
    UnrecognizedCommand(String),

    /// A known route received arguments it could not parse.
    ///
    /// Also carries clap's help and version "errors" when those flags reach the router.
    #[error(transparent)]
    InvalidArguments(#[from] clap::Error),

    /// A launcher-only option (`--form`, `--config`) reached the router.
    #[error("'{0}' is only accepted when launching cgkit, not inside a routed command")]
    LauncherOption(&'static str),

    /// `interactive` was requested from inside a running prompt session.
    #[error("an interactive session is already running")]
    NestedSession,

    /// No interactive session runner was supplied to the router.
    #[error("interactive sessions are not available in this context")]
    SessionUnavailable,

    /// The prompt backend failed to read input.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommandError {
    /// Whether the error is clap asking to print help or version text.
    ///
    /// Such errors are informational and should not fail the invocation.
    pub fn is_informational(&self) -> bool {
        match self {
            CommandError::InvalidArguments(err) => matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ),
            _ => false,
        }
    }
}
