//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! The walkthrough itself is in the `demo` module.

use clap::{Args, Parser};

/// dsa-demo - Fill a FixedArray, print it, then write past the end
#[derive(Parser, Debug)]
#[command(name = "dsa-demo", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub demo: DemoArgs,
}

/// Arguments for the walkthrough.
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Index used for the deliberate out-of-bounds write
    #[arg(long, value_name = "INDEX", default_value_t = 5)]
    pub out_of_bounds_index: usize,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            out_of_bounds_index: 5,
        }
    }
}
