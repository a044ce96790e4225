//! CommandGuiKit: form-driven command dispatcher
//!
//! Run with a command to execute it directly, or with `--form` to collect
//! the command through the interactive form first.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};

use cgkit::cli::{dispatch, route, run_form, translate, Cli, FormResult, PromptSession, ShellConfig};
use cgkit::utils::{logging, print_info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    let mut session = PromptSession::terminal();

    if !cli.form {
        if cli.config.is_some() {
            warn!("--config only applies to --form and is ignored");
        }
        let mut out = io::stdout().lock();
        route(cli.command, &mut out, &mut session)?;
        return Ok(());
    }

    if cli.command.is_some() {
        bail!("--form cannot be combined with a command. Run either `cgkit --form` or `cgkit <command>`.");
    }

    let config = ShellConfig::load(cli.config.as_deref())?;
    let input = match run_form(&config)? {
        FormResult::Submit(input) => *input,
        FormResult::Cancelled => {
            print_info("Cancelled by user.");
            return Ok(());
        }
    };

    let args = translate(&input);
    info!(args = %args, "form submitted");

    let mut out = io::stdout().lock();
    dispatch(&args, &mut out, &mut session)?;
    Ok(())
}
