//! `L1ValidatorWeight` payload: a nonce-ordered weight update for a
//! validation ID.

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec, expect_exact_len,
};
use warp_identifiers::ValidationId;

use crate::{L1_VALIDATOR_WEIGHT_LEN, L1_VALIDATOR_WEIGHT_TYPE_ID};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct L1ValidatorWeight {
    pub validation_id: ValidationId,
    pub nonce: u64,
    pub weight: u64,
}

impl L1ValidatorWeight {
    pub fn new(validation_id: ValidationId, nonce: u64, weight: u64) -> Self {
        Self {
            validation_id,
            nonce,
            weight,
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    /// Unpacks the fixed 54-byte payload.
    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        expect_exact_len(buf, L1_VALIDATOR_WEIGHT_LEN)?;
        decode_buf_exact(buf)
    }
}

impl WireCodec for L1ValidatorWeight {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_header(L1_VALIDATOR_WEIGHT_TYPE_ID);
        self.validation_id.encode(w)?;
        w.put_u64(self.nonce);
        w.put_u64(self.weight);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(L1_VALIDATOR_WEIGHT_TYPE_ID)?;
        Ok(Self {
            validation_id: ValidationId::decode(r)?,
            nonce: r.read_u64()?,
            weight: r.read_u64()?,
        })
    }
}

pub fn pack_l1_validator_weight_payload(
    validation_id: ValidationId,
    nonce: u64,
    weight: u64,
) -> EncodeResult<Vec<u8>> {
    L1ValidatorWeight::new(validation_id, nonce, weight).pack()
}

pub fn unpack_l1_validator_weight_payload(buf: &[u8]) -> DecodeResult<L1ValidatorWeight> {
    L1ValidatorWeight::unpack(buf)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use warp_codec::DecodeError;

    use super::*;
    use crate::test_utils::l1_validator_weight_strategy;

    #[test]
    fn test_weight_layout() {
        let buf = pack_l1_validator_weight_payload(ValidationId::default(), 7, 1000).unwrap();

        assert_eq!(buf.len(), 54);
        assert_eq!(&buf[..6], &[0, 0, 0, 0, 0, 3]);
        assert!(buf[6..38].iter().all(|b| *b == 0));
        assert_eq!(hex::encode(&buf[38..46]), "0000000000000007");
        assert_eq!(hex::encode(&buf[46..54]), "00000000000003e8");
    }

    #[test]
    fn test_short_buffer_is_length_mismatch() {
        let buf = pack_l1_validator_weight_payload(ValidationId::default(), 7, 1000).unwrap();
        assert_eq!(
            unpack_l1_validator_weight_payload(&buf[..53]),
            Err(DecodeError::LengthMismatch {
                expected: 54,
                got: 53,
            })
        );
    }

    #[test]
    fn test_codec_id_checked() {
        let mut buf = pack_l1_validator_weight_payload(ValidationId::default(), 7, 1000).unwrap();
        buf[1] = 1;
        assert_eq!(
            unpack_l1_validator_weight_payload(&buf),
            Err(DecodeError::CodecMismatch {
                expected: 0,
                got: 1,
            })
        );
    }

    proptest! {
        #[test]
        fn proptest_weight_roundtrip(msg in l1_validator_weight_strategy()) {
            let buf = msg.pack().unwrap();
            prop_assert_eq!(buf.len(), L1_VALIDATOR_WEIGHT_LEN);
            prop_assert_eq!(L1ValidatorWeight::unpack(&buf).unwrap(), msg);
        }
    }
}
