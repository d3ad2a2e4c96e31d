// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input line parsing
//!
//! Pure functions turning one line of text into a validated [`Command`].
//! Nothing here touches the filesystem.

use std::path::PathBuf;

use crate::error::{FileManipError, Result};
use crate::ops::Command;

/// Argument counts accepted before routing, regardless of command.
pub const MIN_ARGS: usize = 2;
pub const MAX_ARGS: usize = 3;

/// A command name and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a line on single spaces. Repeated spaces yield empty arguments.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut parts = line.split(' ').map(str::to_string);
        let command = parts.next().unwrap_or_default();
        Self {
            command,
            args: parts.collect(),
        }
    }

    /// Build from words that were already split (e.g. process arguments).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = words.into_iter().map(Into::into);
        let command = parts.next().unwrap_or_default();
        Self {
            command,
            args: parts.collect(),
        }
    }

    /// Reject lines whose argument count is outside 2..=3.
    pub fn validate(&self) -> Result<()> {
        if (MIN_ARGS..=MAX_ARGS).contains(&self.args.len()) {
            Ok(())
        } else {
            Err(FileManipError::InvalidPrompt)
        }
    }
}

fn expect_arity(command: &str, args: &[String], arity: usize) -> Result<()> {
    if args.len() == arity {
        Ok(())
    } else {
        Err(FileManipError::InvalidArgument(format!(
            "{} command requires exactly {} arguments.",
            command, arity
        )))
    }
}

/// Parse the repeat count for duplicate-contents.
///
/// Leading whitespace and an optional `+` are skipped, then the longest run of
/// decimal digits is taken and anything after it ignored (`"3abc"` is 3,
/// `"2.0"` is 2). No digits, or a negative sign, is an error.
pub fn parse_times(raw: &str) -> Result<usize> {
    let invalid = || FileManipError::InvalidArgument("n should be a number.".to_string());

    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse::<usize>().map_err(|_| invalid())
}

impl TryFrom<CommandLine> for Command {
    type Error = FileManipError;

    fn try_from(line: CommandLine) -> Result<Self> {
        line.validate()?;
        let CommandLine { command, args } = line;

        match command.as_str() {
            "reverse" => {
                expect_arity(&command, &args, 2)?;
                Ok(Command::Reverse {
                    input: PathBuf::from(&args[0]),
                    output: PathBuf::from(&args[1]),
                })
            }
            "copy" => {
                expect_arity(&command, &args, 2)?;
                Ok(Command::Copy {
                    input: PathBuf::from(&args[0]),
                    output: PathBuf::from(&args[1]),
                })
            }
            "duplicate-contents" => {
                expect_arity(&command, &args, 2)?;
                let times = parse_times(&args[1])?;
                Ok(Command::DuplicateContents {
                    input: PathBuf::from(&args[0]),
                    times,
                })
            }
            "replace-string" => {
                expect_arity(&command, &args, 3)?;
                let mut args = args.into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(input), Some(needle), Some(replacement)) => Ok(Command::ReplaceString {
                        input: PathBuf::from(input),
                        needle,
                        replacement,
                    }),
                    _ => Err(FileManipError::InvalidArgument(
                        "replace-string command requires exactly 3 arguments.".to_string(),
                    )),
                }
            }
            other => Err(FileManipError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parse and validate one input line.
pub fn parse_command(line: &str) -> Result<Command> {
    Command::try_from(CommandLine::parse(line))
}
