#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::CommandFactory;

use super::*;

#[test]
fn verify_command_definition() {
    Cli::command().debug_assert();
}

#[test]
fn parse_bare_invocation() {
    let result = Cli::try_parse_from(["linesift"]);
    assert!(result.is_ok());
}

#[test]
fn unexpected_argument_is_rejected() {
    let result = Cli::try_parse_from(["linesift", "check"]);
    assert!(result.is_err());
}

#[test]
fn unexpected_flag_is_rejected() {
    let result = Cli::try_parse_from(["linesift", "--json"]);
    assert!(result.is_err());
}

#[test]
fn help_is_available() {
    let err = Cli::try_parse_from(["linesift", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn version_is_available() {
    let err = Cli::try_parse_from(["linesift", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
