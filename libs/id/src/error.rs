//! Error types for semantic ID encoding and decoding.

use thiserror::Error;

/// Errors raised by the Base32 transcoder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base32Error {
    /// A byte that is not part of the alphabet (in either case).
    #[error("illegal character with code={code} at position={position}")]
    InvalidSymbol { code: u8, position: usize },
}

impl Base32Error {
    /// Returns a copy of this error with the position shifted by `offset`.
    #[must_use]
    pub fn offset_by(self, offset: usize) -> Self {
        match self {
            Base32Error::InvalidSymbol { code, position } => Base32Error::InvalidSymbol {
                code,
                position: position + offset,
            },
        }
    }
}

/// Errors that can occur when encoding or decoding semantic IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The caller passed an argument the codec cannot work with.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The semantic ID failed structural validation.
    #[error("malformed ID '{id}' (expected prefix '{expected_prefix}'): {reason}")]
    MalformedId {
        id: String,
        expected_prefix: String,
        reason: String,
    },
}

impl IdError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        IdError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(
        id: impl Into<String>,
        expected_prefix: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        IdError::MalformedId {
            id: id.into(),
            expected_prefix: expected_prefix.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error rejects the content of an encoded ID.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IdError::MalformedId { .. })
    }

    /// Returns true if this error indicates caller misuse.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IdError::InvalidArgument { .. })
    }
}
