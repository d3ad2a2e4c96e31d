// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ReplaceMode, Settings};

/// filemanip - whole-file text transformations
///
/// Reads one command line from stdin (or takes it from the trailing
/// arguments) and runs it:
///
///   reverse <input> <output>
///   copy <input> <output>
///   duplicate-contents <input> <n>
///   replace-string <input> <needle> <newstring>
#[derive(Parser, Debug)]
#[command(name = "filemanip")]
#[command(version, about = "Whole-file text transformations", long_about = None)]
pub struct Cli {
    /// Working directory (defaults to current)
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Replace every occurrence in replace-string instead of the first
    #[arg(long)]
    pub replace_all: bool,

    /// Command and arguments; stdin is read when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Settings file to load: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }

    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if self.replace_all {
            settings.replace.mode = ReplaceMode::All;
        }
    }

    /// Tracing directives implied by `-v`.
    pub fn log_directives(&self) -> &'static [&'static str] {
        match self.verbose {
            0 => &[],
            1 => &["filemanip=info"],
            _ => &["filemanip=debug"],
        }
    }
}
