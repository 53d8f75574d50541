//! Commands that turn raw identifiers into semantic IDs.

use anyhow::Result;
use clap::Args;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_record, IdRecord};

/// Encode a signed 64-bit integer.
#[derive(Debug, Args)]
pub struct EncodeLongCommand {
    /// Integer to encode.
    #[arg(allow_negative_numbers = true)]
    value: i64,
}

impl EncodeLongCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = ctx.codec.encode_long(self.value);
        tracing::debug!(value = self.value, id = %id, "encoded long");
        print_record(&IdRecord { id, value: self.value }, ctx.format, true);
        Ok(())
    }
}

/// Encode a byte array given as hex.
#[derive(Debug, Args)]
pub struct EncodeBytesCommand {
    /// Hex-encoded bytes (1 to 256 bytes).
    hex: String,
}

impl EncodeBytesCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let bytes = hex::decode(self.hex.trim()).map_err(CliError::from)?;
        let id = ctx.codec.encode_bytes(&bytes).map_err(CliError::from)?;
        tracing::debug!(len = bytes.len(), id = %id, "encoded bytes");
        print_record(
            &IdRecord {
                id,
                value: hex::encode(&bytes),
            },
            ctx.format,
            true,
        );
        Ok(())
    }
}

/// Encode a UUID.
#[derive(Debug, Args)]
pub struct EncodeUuidCommand {
    /// UUID in any format accepted by the uuid crate.
    uuid: String,
}

impl EncodeUuidCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let uuid = uuid::Uuid::parse_str(self.uuid.trim()).map_err(CliError::from)?;
        let id = ctx.codec.encode_uuid(uuid);
        print_record(&IdRecord { id, value: uuid }, ctx.format, true);
        Ok(())
    }
}

/// Generate a semantic ID for a random byte array.
#[derive(Debug, Args)]
pub struct RandomCommand {
    /// Number of random bytes behind the ID.
    #[arg(default_value_t = 16)]
    byte_size: usize,
}

impl RandomCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = ctx
            .codec
            .encode_random_bytes(&mut rand::rng(), self.byte_size)
            .map_err(CliError::from)?;
        print_record(
            &IdRecord {
                id,
                value: self.byte_size,
            },
            ctx.format,
            true,
        );
        Ok(())
    }
}
