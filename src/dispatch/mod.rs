// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command dispatch
//!
//! Turns one line of input into a [`crate::ops::Command`], runs it and
//! reports any failure at this boundary.

pub mod dispatcher;
pub mod input;
pub mod parser;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use input::read_single_line;
pub use parser::{parse_command, parse_times, CommandLine};
