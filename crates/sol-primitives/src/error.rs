//! Common error types for primitives

use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Text is not valid base58
    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),

    /// Decoded key has the wrong size
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}
