// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repeated capital letter check.
//!
//! Detects a capital occurring twice per docs/specs/checks.md.

use crate::check::{Check, CheckContext, CheckResult};

/// Returns true when some ASCII capital letter occurs at least twice in
/// `input`, adjacent or not.
///
/// Two different capitals appearing once each do not count. A single pass
/// tracks capitals already seen in a 26-bit set and short-circuits on the
/// first revisit. Absent input yields false.
pub fn has_repeated_capital_letter(input: Option<&str>) -> bool {
    let Some(input) = input else {
        return false;
    };

    let mut seen = 0u32;
    for c in input.chars() {
        if c.is_ascii_uppercase() {
            let bit = 1u32 << (c as u32 - 'A' as u32);
            if seen & bit != 0 {
                return true;
            }
            seen |= bit;
        }
    }
    false
}

/// The doubles check looks for a repeated capital letter.
pub struct DoublesCheck;

impl Check for DoublesCheck {
    fn name(&self) -> &'static str {
        "doubles"
    }

    fn description(&self) -> &'static str {
        "Repeated capital letter detection"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        CheckResult::satisfied(self.name(), has_repeated_capital_letter(ctx.input))
    }
}

#[cfg(test)]
#[path = "doubles_tests.rs"]
mod tests;
