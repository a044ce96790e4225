//! Command handlers - the behaviors the router dispatches to

pub mod error;
pub mod file;
pub mod greeting;
pub mod interactive;

pub use error::CommandError;
pub use file::{describe_file, OutputFormat, NO_FILE_PLACEHOLDER};
pub use greeting::greeting_lines;
pub use interactive::{InteractiveSession, NestedSessionGuard, NoSession};
