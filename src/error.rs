// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for filemanip
//!
//! Every failure an invocation can hit is one variant of [`FileManipError`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for filemanip operations
#[derive(Error, Debug)]
pub enum FileManipError {
    /// The input line did not have 2 or 3 arguments
    #[error("Invalid prompt")]
    InvalidPrompt,

    /// Wrong arity for a known command, or a malformed argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Command name not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Source file missing or unreadable
    #[error("Cannot read file {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination (or its directory) could not be created or written
    #[error("Cannot write file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// IO errors outside file operations (stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileManipError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileManipError::ReadFailure {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileManipError::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from filesystem I/O rather than input validation.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            FileManipError::ReadFailure { .. }
                | FileManipError::WriteFailure { .. }
                | FileManipError::Io(_)
        )
    }
}

/// Result type alias for filemanip operations
pub type Result<T> = std::result::Result<T, FileManipError>;

impl From<toml::de::Error> for FileManipError {
    fn from(err: toml::de::Error) -> Self {
        FileManipError::Toml(err.to_string())
    }
}
