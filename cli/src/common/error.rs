//! Error handling utilities for the CLI.

use std::error::Error as _;

use dsa_handbook::OutOfRange;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to write output")]
    Io(#[from] std::io::Error),

    #[error("unexpected rejected access")]
    OutOfRange(#[from] OutOfRange),
}

/// Render an error and its causes to stderr and exit with code 1.
pub fn render_and_exit(error: CliError) -> ! {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(1);
}
