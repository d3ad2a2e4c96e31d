// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! filemanip - whole-file text transformations
//!
//! Entry point for the filemanip CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;

use filemanip::cli::Cli;
use filemanip::config::Settings;
use filemanip::dispatch::{read_single_line, CommandLine, DispatchOutcome, Dispatcher};
use filemanip::error::{FileManipError, Result};
use filemanip::ops::FileOperator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    for directive in cli.log_directives() {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let outcome = match prepare(&cli) {
        Ok(operator) => run(&cli, Dispatcher::stderr(operator)).await,
        Err(err) => Dispatcher::stderr(FileOperator::new()).fail(err),
    };

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Switch directory and load settings into an operator.
fn prepare(cli: &Cli) -> Result<FileOperator> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            FileManipError::Config(format!("cannot change to {}: {}", dir.display(), e))
        })?;
    }

    let mut settings = Settings::load_from(&cli.config_path())?;
    cli.apply_overrides(&mut settings);
    tracing::debug!(?settings, "settings loaded");

    Ok(FileOperator::from_settings(&settings))
}

/// Take the command line from the arguments, or read exactly one line of stdin.
async fn run(cli: &Cli, dispatcher: Dispatcher<std::io::Stderr>) -> DispatchOutcome {
    if !cli.words.is_empty() {
        return dispatcher
            .handle(CommandLine::from_words(cli.words.iter().cloned()))
            .await;
    }

    match read_single_line(BufReader::new(tokio::io::stdin())).await {
        Ok(Some(line)) => dispatcher.handle_line(&line).await,
        Ok(None) => dispatcher.fail(FileManipError::InvalidPrompt),
        Err(err) => dispatcher.fail(err),
    }
}
