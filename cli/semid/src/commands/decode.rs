//! Commands that turn semantic IDs back into raw identifiers.

use anyhow::Result;
use clap::Args;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_record, IdRecord};

/// Decode a semantic ID into a signed 64-bit integer.
#[derive(Debug, Args)]
pub struct DecodeLongCommand {
    /// Semantic ID to decode.
    id: String,
}

impl DecodeLongCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let value = ctx.codec.decode_long(&self.id).map_err(CliError::from)?;
        print_record(&IdRecord { id: self.id, value }, ctx.format, false);
        Ok(())
    }
}

/// Decode a semantic ID into bytes, printed as hex.
#[derive(Debug, Args)]
pub struct DecodeBytesCommand {
    /// Semantic ID to decode.
    id: String,

    /// Largest number of bytes the ID may hold.
    #[arg(long)]
    expected_size: Option<usize>,
}

impl DecodeBytesCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let bytes = match self.expected_size {
            Some(size) => ctx.codec.decode_bytes_with_size(&self.id, size),
            None => ctx.codec.decode_bytes(&self.id),
        }
        .map_err(CliError::from)?;

        print_record(
            &IdRecord {
                id: self.id,
                value: hex::encode(bytes),
            },
            ctx.format,
            false,
        );
        Ok(())
    }
}

/// Decode a semantic ID into a UUID.
#[derive(Debug, Args)]
pub struct DecodeUuidCommand {
    /// Semantic ID to decode.
    id: String,
}

impl DecodeUuidCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let value = ctx.codec.decode_uuid(&self.id).map_err(CliError::from)?;
        print_record(&IdRecord { id: self.id, value }, ctx.format, false);
        Ok(())
    }
}

/// Check whether a semantic ID carries the configured prefix.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Semantic ID to check.
    id: String,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        if !ctx.codec.can_decode(&self.id) {
            return Err(CliError::Rejected {
                id: self.id,
                prefix: ctx.codec.prefix(),
            }
            .into());
        }

        print_record(&IdRecord { id: self.id, value: true }, ctx.format, false);
        Ok(())
    }
}
