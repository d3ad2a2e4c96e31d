// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! copy: byte-for-byte duplicate of a file

use std::path::Path;

use super::FileOperator;
use crate::error::{FileManipError, Result};

impl FileOperator {
    /// Copy `input` to `output`, overwriting any existing file.
    ///
    /// The output directory is prepared first, then the source is loaded as
    /// raw bytes, so binary files survive untouched.
    pub async fn copy(&self, input: &Path, output: &Path) -> Result<()> {
        self.ensure_parent_dir(output).await?;

        let bytes = tokio::fs::read(input).await.map_err(|e| {
            tracing::debug!(target: "filemanip.ops", path = %input.display(), error = %e, "read failed");
            FileManipError::read(input, e)
        })?;

        tokio::fs::write(output, &bytes).await.map_err(|e| {
            tracing::debug!(target: "filemanip.ops", path = %output.display(), error = %e, "write failed");
            FileManipError::write(output, e)
        })?;

        tracing::info!(
            target: "filemanip.ops",
            input = %input.display(),
            output = %output.display(),
            bytes = bytes.len(),
            "copied file"
        );
        Ok(())
    }
}
