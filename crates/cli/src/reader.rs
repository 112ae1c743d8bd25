//! Line reading from the console.
//!
//! Reads exactly one line and distinguishes two states the checks care
//! about:
//! - EOF before any byte: absent input (`Ok(None)`)
//! - a line, possibly empty: present input with the trailing newline
//!   stripped (`Ok(Some(..))`)

use std::io::BufRead;

use crate::error::{Error, Result};

/// Prompt shown before reading the line.
pub const PROMPT: &str = "Please enter a string: ";

/// One-shot line reader over any buffered source.
pub struct LineReader<R> {
    source: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read one line.
    ///
    /// Returns `Ok(None)` when the source is already at EOF, otherwise the
    /// line with its trailing `\n` or `\r\n` removed. An empty line is
    /// `Ok(Some(""))`, not absence.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .source
            .read_line(&mut line)
            .map_err(|e| Error::Input { source: e })?;

        if read == 0 {
            tracing::debug!("stdin closed before a line");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
