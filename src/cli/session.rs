//! Line-oriented prompt session behind the `interactive` command

use std::io::{self, BufRead, IsTerminal, Write};

use clap::CommandFactory;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{debug, warn};

use super::args::Cli;
use super::form::ArgumentVector;
use super::router::dispatch;
use crate::commands::{CommandError, InteractiveSession, NestedSessionGuard};

const PROMPT: &str = "cgkit";

const SESSION_KEYWORDS: &str = "\
Session keywords:
  help        show this list
  exit, quit  leave the session
Values with spaces can be quoted: --name \"Mary Ann\"
Use <command> --help for the flags of a command.";

/// One interpreted line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    Empty,
    Help,
    Exit,
    Command(ArgumentVector),
    /// The line could not be split into tokens
    Invalid(String),
}

/// Interpret a raw input line using shell quoting rules.
pub fn parse_session_line(line: &str) -> SessionInput {
    let Some(tokens) = shlex::split(line) else {
        return SessionInput::Invalid("unbalanced quotes or trailing escape".to_string());
    };
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] => SessionInput::Empty,
        ["help"] | ["?"] => SessionInput::Help,
        ["exit"] | ["quit"] => SessionInput::Exit,
        _ => SessionInput::Command(tokens.into_iter().collect()),
    }
}

/// Help text listing the routable commands and the session keywords.
pub fn session_help() -> String {
    let mut cmd = Cli::command()
        .mut_arg("form", |a| a.hide(true))
        .mut_arg("config", |a| a.hide(true));
    format!("{}\n{}", cmd.render_help(), SESSION_KEYWORDS)
}

/// Source of session input lines; `None` ends the session.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, CommandError>;
}

/// Reads session lines from stdin.
///
/// A terminal gets a themed prompt; piped input is read line by line and
/// ends the session at EOF.
pub struct TerminalLines {
    theme: ColorfulTheme,
    prompt: bool,
}

impl Default for TerminalLines {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            prompt: io::stdin().is_terminal(),
        }
    }
}

impl LineSource for TerminalLines {
    fn next_line(&mut self) -> Result<Option<String>, CommandError> {
        if self.prompt {
            let line: String = Input::with_theme(&self.theme)
                .with_prompt(PROMPT)
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(line));
        }
        read_plain_line(&mut io::stdin().lock())
    }
}

/// Read one line without its terminator; `None` at end of input.
pub fn read_plain_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, CommandError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Interactive session that routes each entered line like a command line.
pub struct PromptSession<L: LineSource> {
    lines: L,
}

impl PromptSession<TerminalLines> {
    pub fn terminal() -> Self {
        Self::new(TerminalLines::default())
    }
}

impl<L: LineSource> PromptSession<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }
}

impl<L: LineSource> InteractiveSession for PromptSession<L> {
    fn run(&mut self, out: &mut dyn Write) -> Result<(), CommandError> {
        writeln!(out, "Interactive session. Type 'help' for commands, 'exit' to leave.")?;
        let mut guard = NestedSessionGuard;

        while let Some(line) = self.lines.next_line()? {
            match parse_session_line(&line) {
                SessionInput::Empty => continue,
                SessionInput::Help => writeln!(out, "{}", session_help())?,
                SessionInput::Exit => break,
                SessionInput::Invalid(reason) => writeln!(out, "error: {}", reason)?,
                SessionInput::Command(args) => match dispatch(&args, out, &mut guard) {
                    Ok(()) => {}
                    Err(err) if err.is_informational() => {
                        if let CommandError::InvalidArguments(err) = err {
                            write!(out, "{}", err.render())?;
                        }
                    }
                    Err(CommandError::InvalidArguments(err)) => {
                        debug!(kind = ?err.kind(), "session command rejected by parser");
                        write!(out, "{}", err.render())?;
                    }
                    Err(CommandError::Output(err)) => return Err(CommandError::Output(err)),
                    Err(err) => {
                        warn!(error = %err, "session command failed");
                        writeln!(out, "error: {}", err)?;
                    }
                },
            }
        }

        writeln!(out, "Session closed.")?;
        Ok(())
    }
}
