//! Prefix framing around the Base32 payload.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::base32::{self, ENCODED_LONG_MAX_SIZE};
use crate::error::{Base32Error, IdError};

/// Separator between prefix components, and between the prefix and payload.
pub const DELIMITER: char = '-';

/// Separator between the two halves of an encoded UUID.
pub const UUID_SEPARATOR: char = '$';

/// Largest byte array accepted by [`SemanticIdCodec::encode_bytes`].
pub const MAX_BYTES_ID_SIZE: usize = 256;

/// Maximum payload length of an encoded UUID: two longs and a separator.
pub const ENCODED_UUID_MAX_SIZE: usize = 2 * ENCODED_LONG_MAX_SIZE + 1;

/// Encodes integers, byte arrays and UUIDs into prefixed, case-insensitive
/// semantic IDs such as `foo1-user-1p4x`, and decodes them back.
///
/// Prefix components keep their original casing for output and are matched
/// case-insensitively when decoding. Equality compares the stored components
/// as they are, so `["foo1"]` and `["Foo1"]` are different codecs that can
/// still read each other's IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SemanticIdCodec {
    names: Vec<String>,
    prefix_len: usize,
}

impl SemanticIdCodec {
    /// Creates a codec for the given prefix components.
    ///
    /// An empty list is allowed and produces IDs that are just the payload.
    /// Every component must be non-empty.
    pub fn for_prefix_names<I, S>(names: I) -> Result<Self, IdError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(index) = names.iter().position(String::is_empty) {
            return Err(IdError::invalid_argument(format!(
                "prefix component #{index} is empty"
            )));
        }
        Ok(Self::__from_checked_names(names))
    }

    /// Builds a codec from components already known to be non-empty.
    ///
    /// Used by `define_semantic_id!`, which checks its components at
    /// compile time. Not part of the public API.
    #[doc(hidden)]
    pub fn __from_checked_names(names: Vec<String>) -> Self {
        let prefix_len = names.iter().map(|name| name.len() + 1).sum();
        Self { names, prefix_len }
    }

    /// The prefix components in their original casing.
    pub fn prefix_names(&self) -> &[String] {
        &self.names
    }

    /// Length in bytes of the rendered prefix, delimiters included.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// The rendered prefix, e.g. `foo1-user-`.
    pub fn prefix(&self) -> String {
        let mut out = String::with_capacity(self.prefix_len);
        self.append_prefix(&mut out);
        out
    }

    fn append_prefix(&self, out: &mut String) {
        for name in &self.names {
            out.push_str(name);
            out.push(DELIMITER);
        }
    }

    fn with_prefix(&self, payload_capacity: usize) -> String {
        let mut out = String::with_capacity(self.prefix_len + payload_capacity);
        self.append_prefix(&mut out);
        out
    }

    /// Returns true if `semantic_id` carries this codec's prefix followed by
    /// a non-empty payload that contains no delimiter.
    ///
    /// Passing this check does not mean the payload is valid Base32.
    pub fn can_decode(&self, semantic_id: &str) -> bool {
        self.check_frame(semantic_id).is_ok()
    }

    fn check_frame(&self, semantic_id: &str) -> Result<(), &'static str> {
        if semantic_id.len() <= self.prefix_len {
            return Err("too short to hold the prefix and a payload");
        }

        let mut pos = 0;
        for name in &self.names {
            let end = pos + name.len();
            let matches = semantic_id
                .get(pos..end)
                .is_some_and(|candidate| eq_ignore_case(candidate, name));
            if !matches || semantic_id.as_bytes()[end] != DELIMITER as u8 {
                return Err("does not start with the expected prefix");
            }
            pos = end + 1;
        }

        if semantic_id.as_bytes()[pos..].contains(&(DELIMITER as u8)) {
            return Err("payload contains a delimiter");
        }
        Ok(())
    }

    /// Validates the framing and length bound, returning the payload bytes.
    fn payload<'a>(&self, semantic_id: &'a str, max_payload: usize) -> Result<&'a [u8], IdError> {
        if semantic_id.len() > self.prefix_len + max_payload {
            return Err(self.reject(semantic_id, "too long"));
        }
        self.check_frame(semantic_id)
            .map_err(|reason| self.reject(semantic_id, reason))?;
        Ok(&semantic_id.as_bytes()[self.prefix_len..])
    }

    fn reject(&self, semantic_id: &str, reason: impl Into<String>) -> IdError {
        let reason = reason.into();
        tracing::trace!(id = semantic_id, reason = %reason, "rejected semantic ID");
        IdError::malformed(semantic_id, self.prefix(), reason)
    }

    fn reject_symbol(&self, semantic_id: &str, err: Base32Error) -> IdError {
        self.reject(semantic_id, err.offset_by(self.prefix_len).to_string())
    }

    /// Encodes a signed integer by its two's-complement bit pattern.
    pub fn encode_long(&self, id: i64) -> String {
        let mut out = self.with_prefix(ENCODED_LONG_MAX_SIZE);
        base32::append_u64(&mut out, id as u64);
        out
    }

    /// Decodes an ID written by [`encode_long`](Self::encode_long).
    pub fn decode_long(&self, semantic_id: &str) -> Result<i64, IdError> {
        let payload = self.payload(semantic_id, ENCODED_LONG_MAX_SIZE)?;
        base32::decode_u64(payload)
            .map(|value| value as i64)
            .map_err(|err| self.reject_symbol(semantic_id, err))
    }

    /// Encodes a byte array of 1 to [`MAX_BYTES_ID_SIZE`] bytes.
    pub fn encode_bytes(&self, id: &[u8]) -> Result<String, IdError> {
        if id.is_empty() {
            return Err(IdError::invalid_argument("byte array ID is empty"));
        }
        if id.len() > MAX_BYTES_ID_SIZE {
            return Err(IdError::invalid_argument(format!(
                "byte array ID is {} bytes long, the limit is {MAX_BYTES_ID_SIZE}",
                id.len()
            )));
        }

        let mut out = self.with_prefix(base32::encoded_size(id.len()));
        base32::append_bytes(&mut out, id);
        Ok(out)
    }

    /// Decodes a byte array ID of any length up to [`MAX_BYTES_ID_SIZE`].
    pub fn decode_bytes(&self, semantic_id: &str) -> Result<Vec<u8>, IdError> {
        self.decode_bytes_bounded(semantic_id, MAX_BYTES_ID_SIZE)
    }

    /// Decodes a byte array ID that the caller expects to be
    /// `expected_size` bytes long.
    ///
    /// The expectation only bounds the accepted length of the encoded
    /// payload. A shorter ID still decodes to a shorter array, so callers
    /// that need an exact length must check the result. Expectations above
    /// [`MAX_BYTES_ID_SIZE`] are capped at it.
    pub fn decode_bytes_with_size(
        &self,
        semantic_id: &str,
        expected_size: usize,
    ) -> Result<Vec<u8>, IdError> {
        if expected_size == 0 {
            return Err(IdError::invalid_argument(
                "expected byte array size must be positive",
            ));
        }
        self.decode_bytes_bounded(semantic_id, expected_size.min(MAX_BYTES_ID_SIZE))
    }

    fn decode_bytes_bounded(&self, semantic_id: &str, max_bytes: usize) -> Result<Vec<u8>, IdError> {
        let payload = self.payload(semantic_id, base32::encoded_size(max_bytes))?;
        let bytes =
            base32::decode_bytes(payload).map_err(|err| self.reject_symbol(semantic_id, err))?;
        if bytes.is_empty() {
            return Err(self.reject(semantic_id, "payload is too short to hold a byte"));
        }
        Ok(bytes)
    }

    /// Generates the ID of a random `byte_size`-byte array.
    ///
    /// Every symbol of a padless encoding is independent, so the payload is
    /// drawn symbol by symbol without building the byte array. The result
    /// decodes to exactly `byte_size` bytes, which must be at most
    /// [`MAX_BYTES_ID_SIZE`].
    pub fn encode_random_bytes<R>(&self, rng: &mut R, byte_size: usize) -> Result<String, IdError>
    where
        R: Rng + ?Sized,
    {
        if byte_size == 0 {
            return Err(IdError::invalid_argument(
                "random byte array size must be positive",
            ));
        }
        if byte_size > MAX_BYTES_ID_SIZE {
            return Err(IdError::invalid_argument(format!(
                "random byte array size {byte_size} exceeds the limit of {MAX_BYTES_ID_SIZE}"
            )));
        }

        let symbols = base32::encoded_size(byte_size);
        let mut out = self.with_prefix(symbols);
        for _ in 0..symbols {
            out.push(base32::symbol(rng.random_range(0..32)));
        }
        Ok(out)
    }

    /// Encodes a UUID as its two 64-bit halves, most significant first.
    pub fn encode_uuid(&self, id: Uuid) -> String {
        let (high, low) = id.as_u64_pair();
        let mut out = self.with_prefix(ENCODED_UUID_MAX_SIZE);
        base32::append_u64(&mut out, high);
        out.push(UUID_SEPARATOR);
        base32::append_u64(&mut out, low);
        out
    }

    /// Decodes an ID written by [`encode_uuid`](Self::encode_uuid).
    pub fn decode_uuid(&self, semantic_id: &str) -> Result<Uuid, IdError> {
        let payload = self.payload(semantic_id, ENCODED_UUID_MAX_SIZE)?;
        let Some(split) = payload.iter().position(|&b| b == UUID_SEPARATOR as u8) else {
            return Err(self.reject(semantic_id, "missing UUID separator"));
        };

        let (high, low) = (&payload[..split], &payload[split + 1..]);
        for half in [high, low] {
            if half.is_empty() || half.len() > ENCODED_LONG_MAX_SIZE {
                return Err(self.reject(semantic_id, "UUID half has an invalid length"));
            }
        }

        let high =
            base32::decode_u64(high).map_err(|err| self.reject_symbol(semantic_id, err))?;
        let low = base32::decode_u64(low).map_err(|err| {
            self.reject_symbol(semantic_id, err.offset_by(split + 1))
        })?;
        Ok(Uuid::from_u64_pair(high, low))
    }
}

impl fmt::Display for SemanticIdCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SemanticIdCodec(")?;
        for (index, name) in self.names.iter().enumerate() {
            if index > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(name)?;
        }
        f.write_str(")")
    }
}

impl TryFrom<Vec<String>> for SemanticIdCodec {
    type Error = IdError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::for_prefix_names(names)
    }
}

impl From<SemanticIdCodec> for Vec<String> {
    fn from(codec: SemanticIdCodec) -> Self {
        codec.names
    }
}

/// Unicode case-insensitive comparison without allocating.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
