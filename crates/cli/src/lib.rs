pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod reader;
pub mod runner;

pub use check::{Check, CheckContext, CheckOutput, CheckResult, Outcome, PasswordPolicy};
pub use checks::doubles::has_repeated_capital_letter;
pub use checks::emails::extract_institutional_emails;
pub use checks::password::is_valid_password;
pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use reader::LineReader;
pub use runner::CheckRunner;
