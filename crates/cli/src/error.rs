/// Linesift error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the input line
    #[error("input error: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// Failed to write results
    #[error("output error: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

/// Result type using linesift Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Checks ran and results were printed; verdicts do not affect this
    Success = 0,
    /// I/O failure reading input or writing results
    InternalError = 1,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Input { .. } => ExitCode::InternalError,
            Error::Output { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
