//! Free-standing encode/parse functions.
//!
//! Encoders are checked: a value that does not fit in its target width is an
//! [`EncodeError::Overflow`], never a silent truncation. Parsers take an
//! absolute offset and fail with [`DecodeError::OutOfBounds`] instead of
//! reading past the end of the buffer.

use crate::{DecodeError, DecodeResult, EncodeError, EncodeResult, VAR_BYTES_PREFIX_LEN};

fn checked_be<const N: usize>(field: &'static str, value: u128) -> EncodeResult<[u8; N]> {
    if N < 16 && value >> (N * 8) != 0 {
        return Err(EncodeError::Overflow {
            field,
            value,
            width: N,
        });
    }

    let wide = value.to_be_bytes();
    let mut out = [0u8; N];
    out.copy_from_slice(&wide[16 - N..]);
    Ok(out)
}

/// Encodes a value as a 2-byte big-endian integer.
pub fn encode_uint16(value: u128) -> EncodeResult<[u8; 2]> {
    checked_be("uint16", value)
}

/// Encodes a value as a 4-byte big-endian integer.
pub fn encode_uint32(value: u128) -> EncodeResult<[u8; 4]> {
    checked_be("uint32", value)
}

/// Encodes a value as an 8-byte big-endian integer.
pub fn encode_uint64(value: u128) -> EncodeResult<[u8; 8]> {
    checked_be("uint64", value)
}

/// Converts a host length into the `u32` used by length prefixes.
pub(crate) fn checked_len(field: &'static str, len: usize) -> EncodeResult<u32> {
    u32::try_from(len).map_err(|_| EncodeError::Overflow {
        field,
        value: len as u128,
        width: 4,
    })
}

/// Encodes a `u32` length prefix followed by the raw bytes.
pub fn encode_var_bytes(bytes: &[u8]) -> EncodeResult<Vec<u8>> {
    let len = checked_len("var bytes length", bytes.len())?;
    let mut out = Vec::with_capacity(VAR_BYTES_PREFIX_LEN + bytes.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(bytes);
    Ok(out)
}

/// Concatenates byte strings into a fresh buffer.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Reads `length` bytes starting at `offset`.
pub fn parse_bytes(buf: &[u8], offset: usize, length: usize) -> DecodeResult<&[u8]> {
    let end = offset
        .checked_add(length)
        .filter(|end| *end <= buf.len())
        .ok_or(DecodeError::OutOfBounds {
            offset,
            width: length,
            len: buf.len(),
        })?;
    Ok(&buf[offset..end])
}

fn parse_arr<const N: usize>(buf: &[u8], offset: usize) -> DecodeResult<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(parse_bytes(buf, offset, N)?);
    Ok(out)
}

/// Reads a big-endian `u16` at `offset`.
pub fn parse_uint16(buf: &[u8], offset: usize) -> DecodeResult<u16> {
    parse_arr(buf, offset).map(u16::from_be_bytes)
}

/// Reads a big-endian `u32` at `offset`.
pub fn parse_uint32(buf: &[u8], offset: usize) -> DecodeResult<u32> {
    parse_arr(buf, offset).map(u32::from_be_bytes)
}

/// Reads a big-endian `u64` at `offset`.
pub fn parse_uint64(buf: &[u8], offset: usize) -> DecodeResult<u64> {
    parse_arr(buf, offset).map(u64::from_be_bytes)
}

/// Reads a length-prefixed byte field at `offset`.
///
/// Returns the field contents and the offset just past them.
pub fn parse_var_bytes(buf: &[u8], offset: usize) -> DecodeResult<(&[u8], usize)> {
    let len = parse_uint32(buf, offset)? as usize;
    let start = offset + VAR_BYTES_PREFIX_LEN;
    let bytes = parse_bytes(buf, start, len)?;
    Ok((bytes, start + len))
}
