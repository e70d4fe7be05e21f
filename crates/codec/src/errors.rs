//! Encoding and decoding errors.

use thiserror::Error;

pub type EncodeResult<T> = Result<T, EncodeError>;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while packing a structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A numeric value does not fit in its target width.
    #[error("value {value} of {field} overflows a {width}-byte integer")]
    Overflow {
        field: &'static str,
        value: u128,
        width: usize,
    },

    /// A field with a mandated width was given a different width.
    #[error("{field} must be {expected} bytes, got {got}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors raised while unpacking a structure.
///
/// Offsets and lengths are kept so that callers can log exactly where a
/// buffer went wrong; host applications usually collapse all of these into a
/// single "malformed data" message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A read would run past the end of the buffer.
    #[error("reading {width} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// The buffer length differs from the length implied by the format.
    #[error("expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// The leading codec id is not the one we understand.
    #[error("unsupported codec id {got} (expected {expected})")]
    CodecMismatch { expected: u16, got: u16 },

    /// The type id is not the one the caller asked for.
    #[error("unexpected type id {got} (expected {expected})")]
    TypeMismatch { expected: u32, got: u32 },

    /// A field with a mandated width was encoded with a different width.
    #[error("{field} must be {expected} bytes, got {got}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// The buffer is shorter than the smallest valid envelope.
    #[error("buffer of {got} bytes is shorter than the minimum {min}")]
    TooShort { min: usize, got: usize },

    /// A declared length is zero or points past the end of the buffer.
    #[error("declared length {declared} is invalid with {available} bytes available")]
    InvalidLength { declared: usize, available: usize },

    /// Speculative decoding found no matching structure.
    #[error("no matching payload found")]
    NotFound,

    /// Access-list predicate bytes are not delimited correctly.
    #[error("predicate is missing its 0xff delimiter")]
    InvalidPredicate,
}
