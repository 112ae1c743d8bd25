// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Runs each check once against the same input line, in the order given.
//! Checks are pure, so the only ordering that matters is the report order.

use std::sync::Arc;

use crate::check::{Check, CheckContext, CheckOutput, PasswordPolicy};

/// The check runner executes checks against a single input line.
pub struct CheckRunner {
    policy: PasswordPolicy,
}

impl CheckRunner {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Run all provided checks and collect their results.
    ///
    /// `input` is `None` when stdin closed before yielding a line; each
    /// check maps that to its default outcome. Results keep the order of
    /// `checks`, and the output records the input for echoing.
    pub fn run(&self, checks: &[Arc<dyn Check>], input: Option<&str>) -> CheckOutput {
        let ctx = CheckContext {
            input,
            policy: &self.policy,
        };

        let results = checks
            .iter()
            .map(|check| {
                let result = check.run(&ctx);
                tracing::debug!("{} check: {:?}", result.name, result.outcome);
                result
            })
            .collect();

        CheckOutput::new(input.map(str::to_string), results)
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new(PasswordPolicy::default())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
