// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! The check cycle takes no arguments. Parsing still runs so `--help`
//! and `--version` work and unexpected arguments are rejected before
//! the prompt is shown.

use clap::Parser;

/// Pattern checks for a single line of text
#[derive(Parser, Debug)]
#[command(name = "linesift")]
#[command(version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
