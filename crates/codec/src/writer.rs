//! Append-only buffer used when packing structures.

use crate::{
    CODEC_VERSION, EncodeError, EncodeResult,
    primitives::checked_len,
};

/// Growable output buffer with big-endian helpers.
#[derive(Clone, Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn put_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Writes `1` for true and `0` for false.
    pub fn put_bool(&mut self, v: bool) {
        self.put_u8(u8::from(v));
    }

    /// Writes raw bytes with no prefix.
    pub fn put_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes raw bytes that must have exactly `expected` length.
    pub fn put_fixed(
        &mut self,
        field: &'static str,
        expected: usize,
        bytes: &[u8],
    ) -> EncodeResult<()> {
        if bytes.len() != expected {
            return Err(EncodeError::FieldLength {
                field,
                expected,
                got: bytes.len(),
            });
        }
        self.put_raw(bytes);
        Ok(())
    }

    /// Writes a host length as a `u32`, failing instead of wrapping.
    pub fn put_len(&mut self, field: &'static str, len: usize) -> EncodeResult<()> {
        let len = checked_len(field, len)?;
        self.put_u32(len);
        Ok(())
    }

    /// Writes a `u32` length prefix followed by the bytes.
    pub fn put_var_bytes(&mut self, field: &'static str, bytes: &[u8]) -> EncodeResult<()> {
        self.put_len(field, bytes.len())?;
        self.put_raw(bytes);
        Ok(())
    }

    /// Writes the codec version tag alone.
    pub fn put_codec_id(&mut self) {
        self.put_u16(CODEC_VERSION);
    }

    /// Writes the `codecID | typeID` prefix.
    pub fn put_header(&mut self, type_id: u32) {
        self.put_codec_id();
        self.put_u32(type_id);
    }
}

impl AsRef<[u8]> for WireWriter {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl From<WireWriter> for Vec<u8> {
    fn from(value: WireWriter) -> Self {
        value.into_vec()
    }
}
