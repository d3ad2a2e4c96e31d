// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! replace-string: substitute a literal substring in place

use std::path::Path;

use super::{read_text, write_text, FileOperator};
use crate::config::ReplaceMode;
use crate::error::Result;

/// Replace `needle` in `text` according to `mode`.
///
/// In `First` mode only the leftmost occurrence changes.
pub fn replace_text(text: &str, needle: &str, replacement: &str, mode: ReplaceMode) -> String {
    match mode {
        ReplaceMode::First => text.replacen(needle, replacement, 1),
        ReplaceMode::All => text.replace(needle, replacement),
    }
}

impl FileOperator {
    /// Rewrite `input` with `needle` replaced by `replacement`.
    ///
    /// The file is written back even when the needle is absent.
    pub async fn replace_string(&self, input: &Path, needle: &str, replacement: &str) -> Result<()> {
        let contents = read_text(input).await?;
        let found = contents.contains(needle);
        let replaced = replace_text(&contents, needle, replacement, self.replace_mode);
        write_text(input, &replaced).await?;

        tracing::info!(
            target: "filemanip.ops",
            input = %input.display(),
            mode = ?self.replace_mode,
            found,
            "replaced string"
        );
        Ok(())
    }
}
