// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! filemanip - whole-file text transformations driven by one command line.
//!
//! Architecture:
//! - `ops`: the four file operations (reverse, copy, duplicate-contents,
//!   replace-string), stateless apart from configuration
//! - `dispatch`: parses the input line, validates arity and routes to `ops`,
//!   reporting every failure at that boundary
//! - `config`, `cli`, `error`, `utils`: settings, process arguments, error
//!   types and user-facing formatting

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod utils;

pub use error::{FileManipError, Result};
