//! Text output for check results.
//!
//! Format per docs/specs/cli.md#output:
//! ```text
//! You entered "<input>"
//! password: true
//! emails: [a@utoronto.ca, b@mail.utoronto.ca]
//! doubles: false
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::{CheckOutput, CheckResult, Outcome};
use crate::color::scheme;
use crate::error::{Error, Result};
use crate::reader::PROMPT;

/// Text formatter with color support.
///
/// Generic over the writer so results can render into a buffer as well as
/// the process stdout.
pub struct TextFormatter<W> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a formatter over an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the input prompt without a newline and flush, so it is
    /// visible before the read blocks.
    pub fn write_prompt(&mut self) -> Result<()> {
        write!(self.out, "{PROMPT}").map_err(|e| Error::Output { source: e })?;
        self.out.flush().map_err(|e| Error::Output { source: e })
    }

    /// Echo what was read: `You entered "<input>"`, or `You entered
    /// nothing` when stdin closed before a line.
    pub fn write_echo(&mut self, output: &CheckOutput) -> Result<()> {
        match &output.input {
            Some(input) => writeln!(self.out, "You entered \"{input}\""),
            None => writeln!(self.out, "You entered nothing"),
        }
        .map_err(|e| Error::Output { source: e })
    }

    /// Write a single check result line (streaming).
    pub fn write_check(&mut self, result: &CheckResult) -> Result<()> {
        self.write_check_inner(result)
            .map_err(|e| Error::Output { source: e })
    }

    fn write_check_inner(&mut self, result: &CheckResult) -> std::io::Result<()> {
        // Check name: bold
        self.out.set_color(&scheme::check_name())?;
        write!(self.out, "{}", result.name)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        match &result.outcome {
            Outcome::Satisfied(value) => {
                let spec = if *value {
                    scheme::satisfied()
                } else {
                    scheme::unsatisfied()
                };
                self.out.set_color(&spec)?;
                write!(self.out, "{value}")?;
                self.out.reset()?;
            }
            Outcome::Matches(matches) => {
                write!(self.out, "[")?;
                for (i, m) in matches.iter().enumerate() {
                    if i > 0 {
                        write!(self.out, ", ")?;
                    }
                    self.out.set_color(&scheme::matched())?;
                    write!(self.out, "{m}")?;
                    self.out.reset()?;
                }
                write!(self.out, "]")?;
            }
        }

        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
