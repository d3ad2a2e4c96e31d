// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for filemanip
//!
//! Handles loading settings from ~/.filemanip/settings.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FileManipError, Result};

/// Main settings structure, stored in ~/.filemanip/settings.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// replace-string behaviour
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Output path handling for reverse and copy
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReplaceConfig {
    #[serde(default)]
    pub mode: ReplaceMode,
}

/// Which occurrences of the needle replace-string rewrites
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    #[default]
    First,
    All,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Create missing directories above the output path
    #[serde(default = "default_true")]
    pub create_parent_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_parent_dirs: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::filemanip_home().join("settings.toml")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            FileManipError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the filemanip home directory (~/.filemanip or $FILEMANIP_HOME).
    pub fn filemanip_home() -> PathBuf {
        if let Ok(home) = std::env::var("FILEMANIP_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".filemanip")
    }
}
