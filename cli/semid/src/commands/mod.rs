//! CLI commands.

mod decode;
mod encode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use semid::SemanticIdCodec;

use crate::config::{split_prefix, Config};
use crate::error::CliError;
use crate::output::OutputFormat;

/// semid - Encode and decode prefixed semantic IDs.
#[derive(Debug, Parser)]
#[command(name = "semid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Comma-separated prefix components, e.g. `foo1,user`.
    ///
    /// Overrides SEMID_PREFIX and the config file. Pass an empty string for
    /// IDs without a prefix.
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode a signed 64-bit integer.
    EncodeLong(encode::EncodeLongCommand),

    /// Decode an ID into a signed 64-bit integer.
    DecodeLong(decode::DecodeLongCommand),

    /// Encode hex bytes.
    EncodeBytes(encode::EncodeBytesCommand),

    /// Decode an ID into hex bytes.
    DecodeBytes(decode::DecodeBytesCommand),

    /// Encode a UUID.
    EncodeUuid(encode::EncodeUuidCommand),

    /// Decode an ID into a UUID.
    DecodeUuid(decode::DecodeUuidCommand),

    /// Generate an ID for random bytes.
    Random(encode::RandomCommand),

    /// Check that an ID carries the configured prefix.
    Check(decode::CheckCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let names = match self.prefix.as_deref() {
            Some(prefix) => split_prefix(prefix),
            None => config.prefix,
        };
        let codec = SemanticIdCodec::for_prefix_names(names).map_err(CliError::from)?;
        tracing::debug!(codec = %codec, "codec ready");

        let ctx = CommandContext {
            codec,
            format: self.format,
        };

        match self.command {
            Commands::EncodeLong(cmd) => cmd.run(&ctx),
            Commands::DecodeLong(cmd) => cmd.run(&ctx),
            Commands::EncodeBytes(cmd) => cmd.run(&ctx),
            Commands::DecodeBytes(cmd) => cmd.run(&ctx),
            Commands::EncodeUuid(cmd) => cmd.run(&ctx),
            Commands::DecodeUuid(cmd) => cmd.run(&ctx),
            Commands::Random(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("semid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub codec: SemanticIdCodec,
    pub format: OutputFormat,
}
