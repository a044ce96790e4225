//! Utilities - logging setup and terminal styling

pub mod logging;
pub mod styling;

pub use styling::*;
