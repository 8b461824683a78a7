//! Common utilities shared by the binary and the walkthrough.

pub mod error;

pub use error::{CliError, CliResult};
