//! semid - CLI for semantic IDs
//!
//! Encodes integers, byte arrays and UUIDs into prefixed, case-insensitive
//! IDs and decodes them back.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = Config::load().and_then(|config| {
        // Initialize tracing (prefer RUST_LOG, fallback to the configured level)
        tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        cli.run(config)
    });

    if let Err(e) = result {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
