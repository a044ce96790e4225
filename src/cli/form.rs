//! Form input model and its translation into an argument vector
//!
//! The presentation shell fills in a [`GuiInputSet`]; [`translate`] turns it
//! into the tokens the router parses, exactly as if they had been typed on
//! the command line.

use std::fmt;
use std::path::PathBuf;

use crate::commands::OutputFormat;

/// Route name tokens, shared with the router.
pub const DYNAMIC_GREET: &str = "dynamic-greet";
pub const ENHANCED_FILE: &str = "enhanced-file";
pub const INTERACTIVE: &str = "interactive";
pub const GREET_SUBCOMMAND: &str = "greet-subcommand";

/// Top-level choice of which behavior an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSelection {
    DynamicGreet,
    EnhancedFile,
    Interactive,
}

impl CommandSelection {
    /// All selections in the order they are offered in the form.
    pub const ALL: [CommandSelection; 3] = [
        CommandSelection::DynamicGreet,
        CommandSelection::EnhancedFile,
        CommandSelection::Interactive,
    ];

    /// Route name understood by the router.
    pub fn route_name(&self) -> &'static str {
        match self {
            CommandSelection::DynamicGreet => DYNAMIC_GREET,
            CommandSelection::EnhancedFile => ENHANCED_FILE,
            CommandSelection::Interactive => INTERACTIVE,
        }
    }

    /// Resolve a route name back to a selection.
    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.route_name() == name)
    }
}

impl fmt::Display for CommandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Fields collected by one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiInputSet {
    pub command: CommandSelection,
    pub file_path: Option<PathBuf>,
    pub save: bool,
    pub format: OutputFormat,
    pub name: String,
    pub greeting: String,
    pub repeat_count: i64,
}

impl GuiInputSet {
    /// Input set for `command` with every other field at its form default.
    pub fn with_defaults(command: CommandSelection) -> Self {
        Self {
            command,
            file_path: None,
            save: false,
            format: OutputFormat::Json,
            name: "User".to_string(),
            greeting: "Hello".to_string(),
            repeat_count: 1,
        }
    }
}

/// Ordered argument tokens handed to the router (argv without the binary name).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Route name, if any token is present.
    pub fn route(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ArgumentVector {
    /// Shell-quoted rendering, readable back by the prompt session.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match shlex::try_join(self.0.iter().map(String::as_str)) {
            Ok(line) => f.write_str(&line),
            // tokens with NUL bytes cannot be shell-quoted
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

/// Translate a form submission into router arguments.
///
/// Only the fields relevant to the selected command are emitted.
pub fn translate(input: &GuiInputSet) -> ArgumentVector {
    let mut args = vec![input.command.route_name().to_string()];

    match input.command {
        CommandSelection::DynamicGreet => {
            args.push(GREET_SUBCOMMAND.to_string());
            args.extend(["--name".to_string(), input.name.clone()]);
            args.extend(["--greeting".to_string(), input.greeting.clone()]);
            args.extend(["--repeat".to_string(), input.repeat_count.to_string()]);
        }
        CommandSelection::EnhancedFile => {
            if let Some(path) = input.file_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
                args.extend(["--file".to_string(), path.display().to_string()]);
            }
            if input.save {
                args.push("--save".to_string());
            }
            args.extend(["--format".to_string(), input.format.to_string()]);
        }
        CommandSelection::Interactive => {}
    }

    ArgumentVector(args)
}
