//! Hand-off point for the `interactive` command

use std::io::Write;

use super::CommandError;

/// Runner for an interactive session started by the `interactive` command.
pub trait InteractiveSession {
    /// Run the session to completion, writing any output to `out`.
    fn run(&mut self, out: &mut dyn Write) -> Result<(), CommandError>;
}

/// Stand-in runner for contexts that cannot host a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSession;

impl InteractiveSession for NoSession {
    fn run(&mut self, _out: &mut dyn Write) -> Result<(), CommandError> {
        Err(CommandError::SessionUnavailable)
    }
}

/// Runner used while a session is already active; refuses to nest.
#[derive(Debug, Default, Clone, Copy)]
pub struct NestedSessionGuard;

impl InteractiveSession for NestedSessionGuard {
    fn run(&mut self, _out: &mut dyn Write) -> Result<(), CommandError> {
        Err(CommandError::NestedSession)
    }
}
