// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Institutional email extraction check.
//!
//! Finds University of Toronto addresses per docs/specs/checks.md.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, CheckResult};

/// Matches `local@utoronto.ca` and `local@mail.utoronto.ca` where the local
/// part is one or more characters that are neither whitespace nor `@`.
/// `(?-u:\b)` keeps the word boundaries ASCII.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[^\s@]+@(?:mail\.)?utoronto\.ca(?-u:\b)").expect("valid regex")
});

/// Returns every institutional email address in `input`, left to right.
///
/// Matches are non-overlapping and duplicates are preserved. The domain
/// suffix is case-sensitive. Absent input yields an empty list.
pub fn extract_institutional_emails(input: Option<&str>) -> Vec<String> {
    let Some(input) = input else {
        return Vec::new();
    };

    EMAIL_PATTERN
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The emails check extracts institutional addresses.
pub struct EmailsCheck;

impl Check for EmailsCheck {
    fn name(&self) -> &'static str {
        "emails"
    }

    fn description(&self) -> &'static str {
        "Institutional email extraction"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        CheckResult::matches(self.name(), extract_institutional_emails(ctx.input))
    }
}

#[cfg(test)]
#[path = "emails_tests.rs"]
mod tests;
