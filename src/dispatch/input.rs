// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reading the single input line

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Result;

/// Read one line from `reader`. Returns `None` on immediate EOF.
///
/// Only the first line is consumed; anything after it is left unread.
pub async fn read_single_line<R>(mut reader: R) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
