// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Single-shot command dispatch
//!
//! A [`Dispatcher`] accepts exactly one command line. Handling a line consumes
//! it, so there is no way to feed it a second one.

use std::io::{IsTerminal, Write};

use super::parser::CommandLine;
use crate::error::{FileManipError, Result};
use crate::ops::{Command, FileOperator};
use crate::utils::{format_error, format_error_colored};

/// Result of handling one line
#[derive(Debug)]
pub enum DispatchOutcome {
    Completed(Command),
    Failed(FileManipError),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Completed(_))
    }

    pub fn error(&self) -> Option<&FileManipError> {
        match self {
            DispatchOutcome::Completed(_) => None,
            DispatchOutcome::Failed(err) => Some(err),
        }
    }
}

pub struct Dispatcher<W: Write> {
    operator: FileOperator,
    diagnostics: W,
    color: bool,
}

impl Dispatcher<std::io::Stderr> {
    /// Dispatcher that reports to stderr, coloured when it is a terminal.
    pub fn stderr(operator: FileOperator) -> Self {
        let stderr = std::io::stderr();
        let color = stderr.is_terminal();
        Self::new(operator, stderr).with_color(color)
    }
}

impl<W: Write> Dispatcher<W> {
    pub fn new(operator: FileOperator, diagnostics: W) -> Self {
        Self {
            operator,
            diagnostics,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Parse, validate and run one raw input line.
    pub async fn handle_line(self, line: &str) -> DispatchOutcome {
        self.handle(CommandLine::parse(line)).await
    }

    /// Validate and run an already-split command line.
    ///
    /// Errors never escape: they are written to the diagnostics sink and
    /// returned in the outcome.
    pub async fn handle(mut self, line: CommandLine) -> DispatchOutcome {
        tracing::debug!(
            target: "filemanip.dispatch",
            command = %line.command,
            args = line.args.len(),
            "dispatching"
        );

        match Self::dispatch(&self.operator, line).await {
            Ok(command) => DispatchOutcome::Completed(command),
            Err(err) => {
                self.report(&err);
                DispatchOutcome::Failed(err)
            }
        }
    }

    /// Report an error that happened before a line was available.
    pub fn fail(mut self, err: FileManipError) -> DispatchOutcome {
        self.report(&err);
        DispatchOutcome::Failed(err)
    }

    async fn dispatch(operator: &FileOperator, line: CommandLine) -> Result<Command> {
        let command = Command::try_from(line)?;
        operator.execute(&command).await?;
        Ok(command)
    }

    fn report(&mut self, err: &FileManipError) {
        tracing::debug!(
            target: "filemanip.dispatch",
            error = %err,
            io = err.is_io_failure(),
            "command failed"
        );
        let message = if self.color {
            format_error_colored(err)
        } else {
            format_error(err)
        };
        // Nothing sensible to do if the diagnostics sink itself is broken.
        let _ = writeln!(self.diagnostics, "{}", message);
    }
}
