//! Case-insensitive, padless Base32.
//!
//! The alphabet is `0123456789abcdefghjkmnpqrstvwxyz`: digits plus lowercase
//! letters without `i`, `l`, `o` and `u`, which are too easy to confuse with
//! `1`, `0` and `v`. Output is always lowercase, input may use either case.
//!
//! Two encodings live here:
//!
//! - **Integers** are written least-significant digit first, with no padding
//!   and a single `0` for zero. A `u64` takes 1 to 13 symbols.
//! - **Byte arrays** are treated as one bitstream, least-significant bit of
//!   each byte first, and cut into 5-bit groups. The final group is
//!   zero-extended rather than padded, so `n` bytes always take
//!   `ceil(8n / 5)` symbols.
//!
//! Since nothing is padded, two encoded byte arrays can only be concatenated
//! and split again when the first one's length is a multiple of 5 bytes.

use crate::error::Base32Error;

/// Bits carried by a single symbol.
pub const BASE_BITS: u32 = 5;

const BASE_MASK: u64 = (1 << BASE_BITS) - 1;

/// Maximum number of symbols in an encoded `u64`: `ceil(64 / 5)`.
pub const ENCODED_LONG_MAX_SIZE: usize = (u64::BITS as usize).div_ceil(BASE_BITS as usize);

/// Symbol table, indexed by value.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

const INVALID: u8 = u8::MAX;

/// ASCII to value table; both cases of every letter map to the same value.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < ALPHABET.len() {
        let ch = ALPHABET[value];
        table[ch.to_ascii_lowercase() as usize] = value as u8;
        table[ch.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Number of symbols needed for `byte_count` bytes.
///
/// Saturates instead of overflowing for sizes near `usize::MAX`.
#[must_use]
pub const fn encoded_size(byte_count: usize) -> usize {
    byte_count.saturating_mul(8).div_ceil(BASE_BITS as usize)
}

/// Number of whole bytes carried by `symbol_count` symbols.
#[must_use]
pub const fn decoded_size(symbol_count: usize) -> usize {
    symbol_count * BASE_BITS as usize / 8
}

/// Returns the symbol for a value in `0..32`.
#[inline]
#[must_use]
pub fn symbol(value: u8) -> char {
    ALPHABET[usize::from(value) & BASE_MASK as usize] as char
}

/// Returns the value of `ch`, or `None` if it is not in the alphabet.
#[inline]
#[must_use]
pub fn value_of(ch: u8) -> Option<u8> {
    DECODE_TABLE
        .get(usize::from(ch))
        .copied()
        .filter(|&v| v != INVALID)
}

/// Returns true if `ch` belongs to the alphabet, in either case.
#[inline]
#[must_use]
pub fn is_symbol(ch: u8) -> bool {
    value_of(ch).is_some()
}

#[inline]
fn checked_value(symbols: &[u8], position: usize) -> Result<u8, Base32Error> {
    let code = symbols[position];
    value_of(code).ok_or(Base32Error::InvalidSymbol { code, position })
}

/// Appends the Base32 form of `num` to `out`.
pub fn append_u64(out: &mut String, mut num: u64) {
    if num == 0 {
        out.push(symbol(0));
        return;
    }

    while num != 0 {
        out.push(symbol((num & BASE_MASK) as u8));
        num >>= BASE_BITS;
    }
}

/// Encodes `num` into a fresh string.
#[must_use]
pub fn encode_u64(num: u64) -> String {
    let mut out = String::with_capacity(ENCODED_LONG_MAX_SIZE);
    append_u64(&mut out, num);
    out
}

/// Decodes an integer written by [`append_u64`].
///
/// Bits shifted past the 64th are dropped, so the 13th symbol only
/// contributes its lowest 4 bits. An empty slice decodes to zero.
pub fn decode_u64(symbols: &[u8]) -> Result<u64, Base32Error> {
    let mut result: u64 = 0;
    for position in (0..symbols.len()).rev() {
        let digit = checked_value(symbols, position)?;
        result = (result << BASE_BITS) | u64::from(digit);
    }
    Ok(result)
}

/// Appends the padless Base32 form of `bytes` to `out`.
pub fn append_bytes(out: &mut String, bytes: &[u8]) {
    out.reserve(encoded_size(bytes.len()));

    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for &byte in bytes {
        acc |= u32::from(byte) << acc_bits;
        acc_bits += 8;
        while acc_bits >= BASE_BITS {
            out.push(symbol((acc & BASE_MASK as u32) as u8));
            acc >>= BASE_BITS;
            acc_bits -= BASE_BITS;
        }
    }

    // high bits of the last byte, zero-extended
    if acc_bits > 0 {
        out.push(symbol(acc as u8));
    }
}

/// Encodes `bytes` into a fresh string.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_size(bytes.len()));
    append_bytes(&mut out, bytes);
    out
}

/// Decodes a byte array written by [`append_bytes`].
///
/// Produces `floor(5 * len / 8)` bytes. Leftover bits that do not fill a
/// whole byte are the zero extension added by the encoder and are dropped.
/// Every symbol is validated, including the ones that only carry leftovers.
pub fn decode_bytes(symbols: &[u8]) -> Result<Vec<u8>, Base32Error> {
    let mut out = Vec::with_capacity(decoded_size(symbols.len()));

    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    for position in 0..symbols.len() {
        let digit = checked_value(symbols, position)?;
        acc |= u32::from(digit) << acc_bits;
        acc_bits += BASE_BITS;
        if acc_bits >= 8 {
            out.push(acc as u8);
            acc >>= 8;
            acc_bits -= 8;
        }
    }

    Ok(out)
}
