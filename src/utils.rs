// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for filemanip
//!
//! User-facing formatting of errors.

use crossterm::style::Stylize;

use crate::error::FileManipError;

/// Format an error for display to the user
pub fn format_error(error: &FileManipError) -> String {
    match error {
        FileManipError::InvalidPrompt => format!(
            "Error: {}. Expected: <command> <arg1> <arg2> [<arg3>]",
            error
        ),
        _ => format!("Error: {}", error),
    }
}

/// Same as [`format_error`] with the prefix coloured for a terminal
pub fn format_error_colored(error: &FileManipError) -> String {
    let plain = format_error(error);
    match plain.strip_prefix("Error:") {
        Some(rest) => format!("{}{}", "Error:".red().bold(), rest),
        None => plain,
    }
}
