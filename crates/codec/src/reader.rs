//! Cursor over an input buffer used when unpacking structures.

use crate::{
    CODEC_VERSION, DecodeError, DecodeResult,
    primitives::{parse_bytes, parse_uint16, parse_uint32, parse_uint64},
};

/// Forward-only reader that tracks its offset into the buffer.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let bytes = parse_bytes(self.buf, self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_arr<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let [b] = self.read_arr::<1>()?;
        Ok(b)
    }

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        let v = parse_uint16(self.buf, self.pos)?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        let v = parse_uint32(self.buf, self.pos)?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        let v = parse_uint64(self.buf, self.pos)?;
        self.pos += 8;
        Ok(v)
    }

    /// Reads a single byte as a boolean.
    ///
    /// Only `0x01` is true. Every other value, including garbage, decodes as
    /// false; senders in the wild rely on this lenient reading.
    pub fn read_bool(&mut self) -> DecodeResult<bool> {
        Ok(self.read_u8()? == 1)
    }

    /// Reads a `u32` length prefix and then that many bytes.
    pub fn read_var_bytes(&mut self) -> DecodeResult<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.read_bytes(len)
    }

    /// Reads a length-prefixed field whose length is mandated.
    pub fn read_var_fixed<const N: usize>(&mut self, field: &'static str) -> DecodeResult<[u8; N]> {
        let bytes = self.read_var_bytes()?;
        <[u8; N]>::try_from(bytes).map_err(|_| DecodeError::FieldLength {
            field,
            expected: N,
            got: bytes.len(),
        })
    }

    /// Reads and checks the codec version tag.
    pub fn read_codec_id(&mut self) -> DecodeResult<()> {
        let codec_id = self.read_u16()?;
        if codec_id != CODEC_VERSION {
            return Err(DecodeError::CodecMismatch {
                expected: CODEC_VERSION,
                got: codec_id,
            });
        }
        Ok(())
    }

    /// Reads and checks the `codecID | typeID` prefix.
    pub fn read_header(&mut self, expected_type: u32) -> DecodeResult<()> {
        self.read_codec_id()?;
        let type_id = self.read_u32()?;
        if type_id != expected_type {
            return Err(DecodeError::TypeMismatch {
                expected: expected_type,
                got: type_id,
            });
        }
        Ok(())
    }

    /// Fails unless every byte of the buffer has been consumed.
    pub fn finish(self) -> DecodeResult<()> {
        if self.pos != self.buf.len() {
            return Err(DecodeError::LengthMismatch {
                expected: self.pos,
                got: self.buf.len(),
            });
        }
        Ok(())
    }
}

/// Checks a buffer against the exact length of a fixed-size format.
pub fn expect_exact_len(buf: &[u8], expected: usize) -> DecodeResult<()> {
    if buf.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            got: buf.len(),
        });
    }
    Ok(())
}
