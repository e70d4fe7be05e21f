//! `L1ValidatorRegistration` payload: whether a validation ID is (still)
//! registered on the P-Chain.

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec, expect_exact_len,
};
use warp_identifiers::ValidationId;

use crate::{L1_VALIDATOR_REGISTRATION_LEN, L1_VALIDATOR_REGISTRATION_TYPE_ID};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct L1ValidatorRegistration {
    pub validation_id: ValidationId,
    pub registered: bool,
}

impl L1ValidatorRegistration {
    pub fn new(validation_id: ValidationId, registered: bool) -> Self {
        Self {
            validation_id,
            registered,
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    /// Unpacks the fixed 39-byte payload.
    ///
    /// The flag byte is read leniently: anything but `0x01` is `false`.
    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        expect_exact_len(buf, L1_VALIDATOR_REGISTRATION_LEN)?;
        decode_buf_exact(buf)
    }
}

impl WireCodec for L1ValidatorRegistration {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_header(L1_VALIDATOR_REGISTRATION_TYPE_ID);
        self.validation_id.encode(w)?;
        w.put_bool(self.registered);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(L1_VALIDATOR_REGISTRATION_TYPE_ID)?;
        Ok(Self {
            validation_id: ValidationId::decode(r)?,
            registered: r.read_bool()?,
        })
    }
}

pub fn pack_l1_validator_registration_payload(
    validation_id: ValidationId,
    registered: bool,
) -> EncodeResult<Vec<u8>> {
    L1ValidatorRegistration::new(validation_id, registered).pack()
}

pub fn unpack_l1_validator_registration_payload(
    buf: &[u8],
) -> DecodeResult<L1ValidatorRegistration> {
    L1ValidatorRegistration::unpack(buf)
}
