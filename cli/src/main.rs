//! dsa-demo - A walkthrough of FixedArray's checked indexing.

use clap::Parser;
use dsa_cli::{cli::Cli, common, demo};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = demo::run(&cli.demo, &mut stdout) {
        common::error::render_and_exit(e);
    }
}
