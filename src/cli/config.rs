//! Presentation shell configuration
//!
//! Everything the form needs to know about its look and its defaults lives in
//! [`ShellConfig`], which is loaded once and passed down by reference.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::form::{CommandSelection, GuiInputSet};
use crate::commands::OutputFormat;

/// File name looked up inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "shell.json";

/// Default values pre-filled in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub format: OutputFormat,
    pub name: String,
    pub greeting: String,
    pub repeat: i64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            name: "User".to_string(),
            greeting: "Hello".to_string(),
            repeat: 1,
        }
    }
}

/// Look and defaults of the presentation shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Title shown in the form header
    pub program_name: String,
    /// Subtitle shown under the title
    pub description: String,
    /// Clear the terminal between the form and the command output
    pub clear_before_run: bool,
    /// Header colour name (black, red, green, yellow, blue, magenta, cyan, white)
    pub accent: String,
    pub defaults: FormDefaults,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program_name: "Advanced CLI-GUI Application".to_string(),
            description: "CLI-GUI App".to_string(),
            clear_before_run: true,
            accent: "blue".to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

impl ShellConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. Without one, the per-user
    /// config file is used when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no shell configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ShellConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded shell configuration");
        Ok(config)
    }

    /// Header colour; unknown names fall back to blue.
    pub fn accent_color(&self) -> Color {
        match self.accent.to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => Color::Blue,
        }
    }

    /// Starting input set for `command`, pre-filled from the configured defaults.
    pub fn initial_input(&self, command: CommandSelection) -> GuiInputSet {
        GuiInputSet {
            format: self.defaults.format,
            name: self.defaults.name.clone(),
            greeting: self.defaults.greeting.clone(),
            repeat_count: self.defaults.repeat,
            ..GuiInputSet::with_defaults(command)
        }
    }
}

/// `<config dir>/cgkit/shell.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cgkit").join(CONFIG_FILE_NAME))
}
