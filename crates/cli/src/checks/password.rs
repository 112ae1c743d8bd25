// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Password strength check.
//!
//! Validates length and character-class requirements per
//! docs/specs/checks.md.

use crate::check::{Check, CheckContext, CheckResult};

/// Returns true when `input` is present, at least `min_length` characters
/// long, and contains an ASCII lowercase letter, an ASCII uppercase letter,
/// and a decimal digit.
///
/// Length counts Unicode scalar values, not bytes. Characters outside the
/// three required classes are allowed and count toward the length. Absent
/// input fails the check; it is not an error.
pub fn is_valid_password(input: Option<&str>, min_length: usize) -> bool {
    let Some(input) = input else {
        return false;
    };

    let mut count = 0usize;
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;

    for c in input.chars() {
        count += 1;
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
        has_digit |= c.is_ascii_digit();
    }

    count >= min_length && has_lower && has_upper && has_digit
}

/// The password check validates strength requirements.
pub struct PasswordCheck;

impl Check for PasswordCheck {
    fn name(&self) -> &'static str {
        "password"
    }

    fn description(&self) -> &'static str {
        "Password strength requirements"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        CheckResult::satisfied(
            self.name(),
            is_valid_password(ctx.input, ctx.policy.min_length),
        )
    }
}

#[cfg(test)]
#[path = "password_tests.rs"]
mod tests;
