//! File processing status line (`enhanced-file`)
//!
//! Nothing is read or written here: the command reports what it would
//! process and in which format.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholder shown when no file path was supplied.
pub const NO_FILE_PLACEHOLDER: &str = "<none>";

/// Output format tag accepted by `enhanced-file --format`.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
    Csv,
}

impl OutputFormat {
    /// All formats in the order they are offered to users.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Xml, OutputFormat::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describe the file that would be processed.
pub fn describe_file(file_path: Option<&Path>, format: OutputFormat) -> String {
    let file = match file_path {
        Some(path) => path.display().to_string(),
        None => NO_FILE_PLACEHOLDER.to_string(),
    };
    format!("Processing file: {}, Format: {}", file, format)
}
