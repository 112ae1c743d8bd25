// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linesift CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use linesift::check::PasswordPolicy;
use linesift::checks::all_checks;
use linesift::cli::Cli;
use linesift::color::resolve_color;
use linesift::error::ExitCode;
use linesift::output::TextFormatter;
use linesift::reader::LineReader;
use linesift::runner::CheckRunner;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINESIFT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("linesift: {}", e);
            match e.downcast_ref::<linesift::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();

    let mut formatter = TextFormatter::stdout(resolve_color());
    formatter.write_prompt()?;

    let line = LineReader::new(std::io::stdin().lock()).read_line()?;

    let runner = CheckRunner::new(PasswordPolicy::default());
    let output = runner.run(&all_checks(), line.as_deref());

    formatter.write_echo(&output)?;
    for check in &output.checks {
        formatter.write_check(check)?;
    }

    Ok(ExitCode::Success)
}
