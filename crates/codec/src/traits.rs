//! The [`WireCodec`] trait and whole-buffer helpers.

use crate::{DecodeResult, EncodeResult, WireReader, WireWriter};

/// A type with a fixed binary layout in the Warp formats.
pub trait WireCodec: Sized {
    /// Appends the encoding of `self` to the writer.
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()>;

    /// Decodes a value starting at the reader's position.
    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self>;
}

/// Encodes a value into a fresh buffer.
pub fn encode_to_vec<T: WireCodec>(v: &T) -> EncodeResult<Vec<u8>> {
    let mut w = WireWriter::new();
    v.encode(&mut w)?;
    Ok(w.into_vec())
}

/// Decodes a value that must span the entire buffer.
pub fn decode_buf_exact<T: WireCodec>(buf: &[u8]) -> DecodeResult<T> {
    let mut r = WireReader::new(buf);
    let v = T::decode(&mut r)?;
    r.finish()?;
    Ok(v)
}

impl WireCodec for u16 {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_u16(*self);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_u16()
    }
}

impl WireCodec for u32 {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_u32(*self);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_u32()
    }
}

impl WireCodec for u64 {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_u64(*self);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_u64()
    }
}

impl<const N: usize> WireCodec for [u8; N] {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_raw(self);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_arr::<N>()
    }
}

/// Vectors are encoded as a `u32` count followed by the elements.
impl<T: WireCodec> WireCodec for Vec<T> {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_len("vector length", self.len())?;
        for item in self {
            item.encode(w)?;
        }
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        let count = r.read_u32()? as usize;
        // Cap the preallocation by what the buffer could possibly hold.
        let mut out = Vec::with_capacity(count.min(r.remaining()));
        for _ in 0..count {
            out.push(T::decode(r)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    #[test]
    fn test_decode_buf_exact_rejects_trailing() {
        let buf = [0, 0, 0, 0, 0, 0, 0, 1, 0];
        assert_eq!(
            decode_buf_exact::<u64>(&buf),
            Err(DecodeError::LengthMismatch {
                expected: 8,
                got: 9,
            })
        );
        assert_eq!(decode_buf_exact::<u64>(&buf[..8]).unwrap(), 1);
    }

    #[test]
    fn test_vec_codec() {
        let v: Vec<[u8; 2]> = vec![[1, 2], [3, 4]];
        let buf = encode_to_vec(&v).unwrap();
        assert_eq!(buf, vec![0, 0, 0, 2, 1, 2, 3, 4]);
        assert_eq!(decode_buf_exact::<Vec<[u8; 2]>>(&buf).unwrap(), v);
    }

    #[test]
    fn test_vec_huge_count_fails_cleanly() {
        let buf = [0xff, 0xff, 0xff, 0xff, 1, 2];
        assert!(matches!(
            decode_buf_exact::<Vec<[u8; 2]>>(&buf),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }
}
