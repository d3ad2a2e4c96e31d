// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! reverse: write a file's characters in reverse order to a new file

use std::path::Path;

use super::{read_text, write_text, FileOperator};
use crate::error::Result;

/// Reverse the character sequence of `text`.
///
/// Works on Unicode scalar values, so combining marks and multi-codepoint
/// graphemes are split apart.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

impl FileOperator {
    /// Write the reversed content of `input` to `output`.
    ///
    /// The input is read before anything touches the output side, so a
    /// missing input leaves no new directories behind.
    pub async fn reverse(&self, input: &Path, output: &Path) -> Result<()> {
        let contents = read_text(input).await?;
        let reversed = reverse_text(&contents);

        self.ensure_parent_dir(output).await?;
        write_text(output, &reversed).await?;

        tracing::info!(
            target: "filemanip.ops",
            input = %input.display(),
            output = %output.display(),
            chars = reversed.chars().count(),
            "reversed file"
        );
        Ok(())
    }
}
