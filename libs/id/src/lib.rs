//! # semid
//!
//! Human-readable, case-insensitive semantic IDs.
//!
//! A semantic ID wraps an opaque internal identifier (an integer, a byte
//! array or a UUID) in a short string that names where it came from:
//!
//! - `foo1-1` is the integer `1` for service `foo1`
//! - `foo1-account-1p4x` adds an entity component
//! - `doc-1v3k$9qw` is a UUID, its two halves split by `$`
//!
//! ## Format
//!
//! `{component}-{component}-...-{payload}`
//!
//! The payload uses a 32-symbol alphabet (`0-9` and lowercase letters
//! without `i`, `l`, `o`, `u`) and never contains `-`. Decoding accepts any
//! casing of both the prefix and the payload.
//!
//! ## Limits
//!
//! - Integers take at most 13 symbols
//! - Byte arrays hold 1 to 256 bytes
//! - UUIDs take at most 27 symbols
//!
//! Generating, storing and keeping IDs unique is left to the caller.

pub mod base32;
mod codec;
mod error;
mod macros;

pub use codec::{
    SemanticIdCodec, DELIMITER, ENCODED_UUID_MAX_SIZE, MAX_BYTES_ID_SIZE, UUID_SEPARATOR,
};
pub use error::{Base32Error, IdError};

/// Re-export uuid for consumers of the UUID operations
pub use uuid::Uuid;
