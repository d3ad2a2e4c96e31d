// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Whole-file operations
//!
//! Each operation loads the full file into memory, transforms it and writes
//! the result back in one go. Operations never print anything; failures are
//! returned to the caller and only traced here.

use std::path::{Path, PathBuf};

use crate::config::{ReplaceMode, Settings};
use crate::error::{FileManipError, Result};

mod copy;
mod duplicate;
mod replace;
mod reverse;

pub use duplicate::repeat_text;
pub use replace::replace_text;
pub use reverse::reverse_text;

/// A validated operation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reverse {
        input: PathBuf,
        output: PathBuf,
    },
    Copy {
        input: PathBuf,
        output: PathBuf,
    },
    DuplicateContents {
        input: PathBuf,
        times: usize,
    },
    ReplaceString {
        input: PathBuf,
        needle: String,
        replacement: String,
    },
}

impl Command {
    /// The command name as typed on the input line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Reverse { .. } => "reverse",
            Command::Copy { .. } => "copy",
            Command::DuplicateContents { .. } => "duplicate-contents",
            Command::ReplaceString { .. } => "replace-string",
        }
    }
}

/// Executes file operations.
///
/// Holds configuration only; nothing carries over between calls.
#[derive(Debug, Clone, Copy)]
pub struct FileOperator {
    replace_mode: ReplaceMode,
    create_parent_dirs: bool,
}

impl Default for FileOperator {
    fn default() -> Self {
        Self {
            replace_mode: ReplaceMode::First,
            create_parent_dirs: true,
        }
    }
}

impl FileOperator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            replace_mode: settings.replace.mode,
            create_parent_dirs: settings.output.create_parent_dirs,
        }
    }

    pub fn with_replace_mode(mut self, mode: ReplaceMode) -> Self {
        self.replace_mode = mode;
        self
    }

    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    pub fn replace_mode(&self) -> ReplaceMode {
        self.replace_mode
    }

    /// Run a command against the matching operation.
    pub async fn execute(&self, command: &Command) -> Result<()> {
        tracing::debug!(target: "filemanip.ops", command = command.name(), "executing");
        match command {
            Command::Reverse { input, output } => self.reverse(input, output).await,
            Command::Copy { input, output } => self.copy(input, output).await,
            Command::DuplicateContents { input, times } => {
                self.duplicate_contents(input, *times).await
            }
            Command::ReplaceString {
                input,
                needle,
                replacement,
            } => self.replace_string(input, needle, replacement).await,
        }
    }

    /// Create the directory holding `path` if configured to.
    async fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        if !self.create_parent_dirs {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    tracing::debug!(
                        target: "filemanip.ops",
                        dir = %parent.display(),
                        error = %e,
                        "failed to create parent directories"
                    );
                    FileManipError::write(path, e)
                })?;
            }
        }
        Ok(())
    }
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::debug!(target: "filemanip.ops", path = %path.display(), error = %e, "read failed");
        FileManipError::read(path, e)
    })
}

async fn write_text(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content).await.map_err(|e| {
        tracing::debug!(target: "filemanip.ops", path = %path.display(), error = %e, "write failed");
        FileManipError::write(path, e)
    })
}
