//! CLI module - argument parsing, form translation, routing and prompts

mod args;
pub mod config;
pub mod form;
pub mod router;
pub mod session;
pub mod shell;

pub use args::{Cli, Commands, FileArgs, GreetArgs, GreetCommand, BIN_NAME};
pub use config::{FormDefaults, ShellConfig};
pub use form::{translate, ArgumentVector, CommandSelection, GuiInputSet};
pub use router::{dispatch, route, BASE_MESSAGE};
pub use session::{parse_session_line, LineSource, PromptSession, SessionInput};
pub use shell::{run_form, FormResult};
