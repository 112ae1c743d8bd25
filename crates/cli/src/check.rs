//! Check trait and result types.

use serde::Serialize;

/// Password length policy.
///
/// `usize` keeps a negative minimum unrepresentable. A zero minimum makes
/// the length requirement vacuous; the character classes still apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum number of characters (Unicode scalar values).
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// The line under test. `None` when stdin closed before yielding a line;
    /// distinct from a present empty line.
    pub input: Option<&'a str>,
    /// Password length policy.
    pub policy: &'a PasswordPolicy,
}

/// The Check trait defines a single pattern check.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Check>`.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "password", "emails").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check against the context's input.
    ///
    /// Implementations must be pure: absent input maps to the check's
    /// default outcome, never an error or panic.
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// What a check concluded about the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Yes/no verdict.
    Satisfied(bool),
    /// Extracted substrings, in order of first appearance, duplicates kept.
    Matches(Vec<String>),
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "password", "emails").
    pub name: String,

    /// The verdict or the extracted matches.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Create a yes/no result.
    pub fn satisfied(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Satisfied(value),
        }
    }

    /// Create an extraction result.
    pub fn matches(name: impl Into<String>, matches: Vec<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Matches(matches),
        }
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// The input line as read (None when stdin closed before a line).
    pub input: Option<String>,

    /// Results for each check, in registry order.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from the echoed input and check results.
    pub fn new(input: Option<String>, checks: Vec<CheckResult>) -> Self {
        Self { input, checks }
    }

    /// Look up a result by check name.
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
