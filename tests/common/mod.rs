//! Shared test utilities

#![allow(dead_code)]

use std::collections::VecDeque;

use cgkit::cli::{dispatch, ArgumentVector, LineSource};
use cgkit::commands::{CommandError, InteractiveSession};

/// Line source that replays a fixed script, then ends the session.
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> Result<Option<String>, CommandError> {
        Ok(self.lines.pop_front())
    }
}

/// Session runner that records how often it was started.
#[derive(Default)]
pub struct CountingSession {
    pub runs: usize,
}

impl InteractiveSession for CountingSession {
    fn run(&mut self, out: &mut dyn std::io::Write) -> Result<(), CommandError> {
        self.runs += 1;
        writeln!(out, "session started")?;
        Ok(())
    }
}

/// Build an argument vector from string literals.
pub fn argv(tokens: &[&str]) -> ArgumentVector {
    tokens.iter().copied().collect()
}

/// Dispatch `args` and return everything written to the output.
pub fn dispatch_to_string(
    args: &ArgumentVector,
    session: &mut dyn InteractiveSession,
) -> Result<String, CommandError> {
    let mut out: Vec<u8> = Vec::new();
    dispatch(args, &mut out, session)?;
    Ok(String::from_utf8(out).expect("command output is UTF-8"))
}

/// Split captured output into lines.
pub fn output_lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}
