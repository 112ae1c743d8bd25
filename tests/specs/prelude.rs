//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the linesift binary: pipe one line
//! (or nothing) into stdin and assert on the printed report.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};

use assert_cmd::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the linesift binary
pub fn linesift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("linesift"))
}

/// Run the binary with `line` piped to stdin, expecting exit code 0.
pub fn sift(line: &str) -> RunAssert {
    let mut cmd = linesift_cmd();
    cmd.write_stdin(format!("{line}\n"));
    run_passes(cmd)
}

/// Run the binary with stdin closed before any line arrives.
pub fn sift_eof() -> RunAssert {
    let mut cmd = linesift_cmd();
    cmd.write_stdin("");
    run_passes(cmd)
}

/// Run a prepared command, expecting exit code 0.
pub fn run_passes(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("failed to execute linesift");
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Run a prepared command, expecting the given exit code.
pub fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("failed to execute linesift");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {code}\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Assertion helper wrapping the captured output of a run.
pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    /// Returns stdout as a string.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    /// Returns stderr as a string.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Asserts stdout equals the expected text exactly.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(expected, self.stdout());
        self
    }

    /// Asserts stdout matches the predicate (or contains the string).
    pub fn stdout_has<P: Predicate<str>>(self, pred: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        let pred = pred.into_predicate();
        assert!(
            pred.eval(&stdout),
            "stdout did not match predicate.\nstdout: {stdout}"
        );
        self
    }

    /// Asserts stdout does NOT match the predicate.
    pub fn stdout_lacks<P: Predicate<str>>(self, pred: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        let pred = pred.into_predicate();
        assert!(
            !pred.eval(&stdout),
            "stdout unexpectedly matched predicate.\nstdout: {stdout}"
        );
        self
    }

    /// Asserts stderr matches the predicate (or contains the string).
    pub fn stderr_has<P: Predicate<str>>(self, pred: impl IntoStrPredicate<P>) -> Self {
        let stderr = self.stderr();
        let pred = pred.into_predicate();
        assert!(
            pred.eval(&stderr),
            "stderr did not match predicate.\nstderr: {stderr}"
        );
        self
    }

    /// Asserts stderr does NOT match the predicate.
    pub fn stderr_lacks<P: Predicate<str>>(self, pred: impl IntoStrPredicate<P>) -> Self {
        let stderr = self.stderr();
        let pred = pred.into_predicate();
        assert!(
            !pred.eval(&stderr),
            "stderr unexpectedly matched predicate.\nstderr: {stderr}"
        );
        self
    }
}
