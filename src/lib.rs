//! CommandGuiKit: Command Dispatch Library
//!
//! Translates form input into argument vectors and routes them to the
//! greeting, file and interactive commands.

pub mod cli;
pub mod commands;
pub mod utils;
