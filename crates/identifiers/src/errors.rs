//! Errors during parsing/handling/conversion of identifiers.

use thiserror::Error;

/// Errors raised when turning a textual identifier into bytes.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The string is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The string is not valid base58.
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// The decoded payload is too short to carry a cb58 checksum.
    #[error("cb58 string is too short to hold a checksum")]
    MissingChecksum,

    /// The trailing cb58 checksum does not match the payload.
    #[error("cb58 checksum mismatch")]
    Checksum,

    /// The identifier decoded to the wrong number of bytes.
    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
}
