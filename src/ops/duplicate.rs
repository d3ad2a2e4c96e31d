// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! duplicate-contents: repeat a file's text in place

use std::path::Path;

use super::{read_text, write_text, FileOperator};
use crate::error::Result;

/// `text` repeated `times` times with no separator.
pub fn repeat_text(text: &str, times: usize) -> String {
    text.repeat(times)
}

impl FileOperator {
    /// Overwrite `input` with its own content repeated `times` times.
    pub async fn duplicate_contents(&self, input: &Path, times: usize) -> Result<()> {
        let contents = read_text(input).await?;
        let repeated = repeat_text(&contents, times);
        write_text(input, &repeated).await?;

        tracing::info!(
            target: "filemanip.ops",
            input = %input.display(),
            times,
            bytes = repeated.len(),
            "duplicated contents"
        );
        Ok(())
    }
}
