//! `ValidationUptime` payload, attesting how long a validator has been up.
//!
//! Uses type ID `0`, the same as `SubnetToL1Conversion`; the two are told
//! apart only by the unpacker the caller chooses (and by length, 46 vs 38).

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec, expect_exact_len,
};
use warp_identifiers::ValidationId;

use crate::{VALIDATION_UPTIME_LEN, VALIDATION_UPTIME_TYPE_ID};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationUptime {
    pub validation_id: ValidationId,
    /// Uptime in seconds.
    pub uptime: u64,
}

impl ValidationUptime {
    pub fn new(validation_id: ValidationId, uptime: u64) -> Self {
        Self {
            validation_id,
            uptime,
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    /// Unpacks the fixed 46-byte payload.
    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        expect_exact_len(buf, VALIDATION_UPTIME_LEN)?;
        decode_buf_exact(buf)
    }
}

impl WireCodec for ValidationUptime {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_header(VALIDATION_UPTIME_TYPE_ID);
        self.validation_id.encode(w)?;
        w.put_u64(self.uptime);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(VALIDATION_UPTIME_TYPE_ID)?;
        Ok(Self {
            validation_id: ValidationId::decode(r)?,
            uptime: r.read_u64()?,
        })
    }
}

pub fn pack_validation_uptime_payload(
    validation_id: ValidationId,
    uptime: u64,
) -> EncodeResult<Vec<u8>> {
    ValidationUptime::new(validation_id, uptime).pack()
}

pub fn unpack_validation_uptime_payload(buf: &[u8]) -> DecodeResult<ValidationUptime> {
    ValidationUptime::unpack(buf)
}
