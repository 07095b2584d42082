//! Lexiscope - text-complexity analysis CLI
//!
//! Computes readability, structure, vocabulary, and teaching-strategy
//! metrics over a corpus of explanation texts, grouped by the target
//! audience level and the concept being explained.

use anyhow::Result;
use clap::Parser;
use lexiscope::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
