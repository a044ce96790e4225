//! Presentation shell - the interactive input form
//!
//! Walks the user through the fields relevant to the chosen command using
//! dialoguer prompts, shows a summary of what will run and asks for
//! confirmation. The result is a [`GuiInputSet`] ready for translation.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::config::ShellConfig;
use super::form::{translate, CommandSelection, GuiInputSet};
use crate::commands::OutputFormat;

/// Outcome of one pass through the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResult {
    /// User confirmed the collected input
    Submit(Box<GuiInputSet>),
    /// User declined at the summary step
    Cancelled,
}

/// Run the form against the terminal.
pub fn run_form(config: &ShellConfig) -> Result<FormResult> {
    let theme = ColorfulTheme::default();
    print_header(config);

    let choices: Vec<String> = CommandSelection::ALL
        .iter()
        .map(|c| format!("{:<14} {}", c.route_name(), command_help(*c)))
        .collect();
    let selected = Select::with_theme(&theme)
        .with_prompt("Choose a command")
        .items(&choices)
        .default(0)
        .interact()?;
    let command = CommandSelection::ALL[selected];
    let mut input = config.initial_input(command);

    match command {
        CommandSelection::EnhancedFile => {
            let file: String = Input::with_theme(&theme)
                .with_prompt("Path to input file (optional)")
                .allow_empty(true)
                .interact_text()?;
            input.file_path = normalize_path_field(&file);

            input.save = Confirm::with_theme(&theme)
                .with_prompt("Save output to file?")
                .default(false)
                .interact()?;

            let formats: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.as_str()).collect();
            let default_format = OutputFormat::ALL
                .iter()
                .position(|f| *f == config.defaults.format)
                .unwrap_or(0);
            let format_idx = Select::with_theme(&theme)
                .with_prompt("Output format")
                .items(&formats)
                .default(default_format)
                .interact()?;
            input.format = OutputFormat::ALL[format_idx];
        }
        CommandSelection::DynamicGreet => {
            input.name = Input::with_theme(&theme)
                .with_prompt("Your name")
                .default(input.name.clone())
                .validate_with(|v: &String| validate_text_field(v))
                .interact_text()?;
            input.greeting = Input::with_theme(&theme)
                .with_prompt("Custom greeting")
                .default(input.greeting.clone())
                .validate_with(|v: &String| validate_text_field(v))
                .interact_text()?;
            input.repeat_count = Input::with_theme(&theme)
                .with_prompt("Number of times to repeat the greeting")
                .default(input.repeat_count)
                .validate_with(|v: &i64| validate_repeat(*v))
                .interact_text()?;
        }
        CommandSelection::Interactive => {}
    }

    println!();
    println!("{}", summary_table(&input));
    println!();

    let proceed = Confirm::with_theme(&theme)
        .with_prompt("Run this command?")
        .default(true)
        .interact()?;
    if !proceed {
        return Ok(FormResult::Cancelled);
    }

    if config.clear_before_run {
        Term::stdout().clear_screen()?;
    }
    Ok(FormResult::Submit(Box::new(input)))
}

/// Render the collected fields and the resulting command line.
pub fn summary_table(input: &GuiInputSet) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Command"),
        Cell::new(input.command).fg(Color::Cyan),
    ]);

    match input.command {
        CommandSelection::EnhancedFile => {
            let file = input
                .file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![Cell::new("File"), Cell::new(file)]);
            table.add_row(vec![Cell::new("Save"), Cell::new(if input.save { "yes" } else { "no" })]);
            table.add_row(vec![Cell::new("Format"), Cell::new(input.format)]);
        }
        CommandSelection::DynamicGreet => {
            table.add_row(vec![Cell::new("Name"), Cell::new(&input.name)]);
            table.add_row(vec![Cell::new("Greeting"), Cell::new(&input.greeting)]);
            table.add_row(vec![Cell::new("Repeat"), Cell::new(input.repeat_count)]);
        }
        CommandSelection::Interactive => {}
    }

    table.add_row(vec![
        Cell::new("Runs").add_attribute(Attribute::Bold),
        Cell::new(translate(input))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Greeting repeat counts must not be negative.
pub fn validate_repeat(value: i64) -> Result<(), String> {
    if value < 0 {
        Err(format!("Repeat count must be 0 or more, got {}", value))
    } else {
        Ok(())
    }
}

/// Free-text fields must contain something other than whitespace.
pub fn validate_text_field(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Value cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Blank path input means "no file".
pub fn normalize_path_field(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn command_help(command: CommandSelection) -> &'static str {
    match command {
        CommandSelection::DynamicGreet => "Greet dynamically",
        CommandSelection::EnhancedFile => "Process file and save output",
        CommandSelection::Interactive => "Interactive command session",
    }
}

fn print_header(config: &ShellConfig) {
    let accent = config.accent_color();
    let width = config.program_name.chars().count().max(40);
    println!();
    println!("  {}", style(&config.program_name).fg(accent).bold());
    println!("  {}", style(&config.description).dim());
    println!("  {}", style("━".repeat(width)).fg(accent));
    println!();
}
