//! `RegisterL1Validator` payload.
//!
//! Layout:
//!
//! ```text
//! codecID u16 | typeID u32 = 1 | subnetID [32] | nodeID varbytes
//! | blsPublicKey [48] | registrationExpiry u64
//! | remainingBalanceOwner (threshold u32, count u32, [20] * count)
//! | disableOwner (threshold u32, count u32, [20] * count)
//! | weight u64
//! ```

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec,
};
use warp_identifiers::{Buf48, NodeId, SubnetId, ValidationId};

use crate::{PChainOwner, REGISTER_L1_VALIDATOR_TYPE_ID, calculate_validation_id};

/// A validator's requested validation period, as sent to the P-Chain to
/// register it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationPeriod {
    pub subnet_id: SubnetId,
    pub node_id: NodeId,
    pub bls_public_key: Buf48,
    pub registration_expiry: u64,
    pub remaining_balance_owner: PChainOwner,
    pub disable_owner: PChainOwner,
    pub weight: u64,
}

impl ValidationPeriod {
    /// Builds a period from a BLS key given as a slice, which must be
    /// exactly 48 bytes.
    pub fn try_new(
        subnet_id: SubnetId,
        node_id: NodeId,
        bls_public_key: &[u8],
        registration_expiry: u64,
        remaining_balance_owner: PChainOwner,
        disable_owner: PChainOwner,
        weight: u64,
    ) -> EncodeResult<Self> {
        let bls_public_key = Buf48::try_from_slice("bls public key", bls_public_key)?;
        Ok(Self {
            subnet_id,
            node_id,
            bls_public_key,
            registration_expiry,
            remaining_balance_owner,
            disable_owner,
            weight,
        })
    }

    /// Packs the payload.
    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    /// Unpacks a payload that must span the whole buffer.
    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        decode_buf_exact(buf)
    }

    /// The validation ID this registration will be known by.
    pub fn validation_id(&self) -> EncodeResult<ValidationId> {
        calculate_validation_id(self)
    }
}

impl WireCodec for ValidationPeriod {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_header(REGISTER_L1_VALIDATOR_TYPE_ID);
        self.subnet_id.encode(w)?;
        self.node_id.encode(w)?;
        self.bls_public_key.encode(w)?;
        w.put_u64(self.registration_expiry);
        self.remaining_balance_owner.encode(w)?;
        self.disable_owner.encode(w)?;
        w.put_u64(self.weight);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(REGISTER_L1_VALIDATOR_TYPE_ID)?;
        Ok(Self {
            subnet_id: SubnetId::decode(r)?,
            node_id: NodeId::decode(r)?,
            bls_public_key: Buf48::decode(r)?,
            registration_expiry: r.read_u64()?,
            remaining_balance_owner: PChainOwner::decode(r)?,
            disable_owner: PChainOwner::decode(r)?,
            weight: r.read_u64()?,
        })
    }
}

pub fn pack_register_l1_validator_payload(period: &ValidationPeriod) -> EncodeResult<Vec<u8>> {
    period.pack()
}

pub fn unpack_register_l1_validator_payload(buf: &[u8]) -> DecodeResult<ValidationPeriod> {
    ValidationPeriod::unpack(buf)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use warp_codec::{DecodeError, EncodeError};
    use warp_identifiers::Buf20;

    use super::*;
    use crate::test_utils::validation_period_strategy;

    fn sample() -> ValidationPeriod {
        ValidationPeriod {
            subnet_id: SubnetId::from([0x5a; 32]),
            node_id: NodeId::from([0x01; 20]),
            bls_public_key: Buf48::new([0x02; 48]),
            registration_expiry: 1_700_000_000,
            remaining_balance_owner: PChainOwner::new(1, vec![Buf20::new([0x03; 20])]),
            disable_owner: PChainOwner::new(1, vec![Buf20::new([0x04; 20])]),
            weight: 100,
        }
    }

    #[test]
    fn test_layout() {
        let buf = sample().pack().unwrap();
        // header + subnet + (4 + 20) + bls + expiry + 2 * (4 + 4 + 20) + weight
        assert_eq!(buf.len(), 6 + 32 + 24 + 48 + 8 + 56 + 8);
        assert_eq!(&buf[..6], &[0, 0, 0, 0, 0, 1]);
        assert_eq!(&buf[6..38], &[0x5a; 32]);
        assert_eq!(&buf[38..42], &[0, 0, 0, 20]);
        assert_eq!(&buf[62..110], &[0x02; 48]);
        assert_eq!(&buf[110..118], &1_700_000_000u64.to_be_bytes());
        assert_eq!(&buf[buf.len() - 8..], &100u64.to_be_bytes());
    }

    #[test]
    fn test_try_new_rejects_short_bls_key() {
        let s = sample();
        let err = ValidationPeriod::try_new(
            s.subnet_id,
            s.node_id,
            &[0u8; 47],
            s.registration_expiry,
            s.remaining_balance_owner,
            s.disable_owner,
            s.weight,
        )
        .unwrap_err();
        assert_eq!(
            err,
            EncodeError::FieldLength {
                field: "bls public key",
                expected: 48,
                got: 47,
            }
        );
    }

    #[test]
    fn test_unpack_rejects_trailing_byte() {
        let mut buf = sample().pack().unwrap();
        let len = buf.len();
        buf.push(0);
        assert_eq!(
            unpack_register_l1_validator_payload(&buf),
            Err(DecodeError::LengthMismatch {
                expected: len,
                got: len + 1,
            })
        );
    }

    #[test]
    fn test_unpack_rejects_wrong_type() {
        let mut buf = sample().pack().unwrap();
        buf[5] = 2;
        assert_eq!(
            unpack_register_l1_validator_payload(&buf),
            Err(DecodeError::TypeMismatch {
                expected: 1,
                got: 2,
            })
        );
    }

    #[test]
    fn test_unpack_truncated_owner_list() {
        let buf = sample().pack().unwrap();
        // Cut inside the disable owner's address.
        let truncated = &buf[..buf.len() - 12];
        assert!(matches!(
            unpack_register_l1_validator_payload(truncated),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }

    proptest! {
        #[test]
        fn proptest_unpack_inverts_pack(period in validation_period_strategy()) {
            let buf = pack_register_l1_validator_payload(&period).unwrap();
            prop_assert_eq!(unpack_register_l1_validator_payload(&buf).unwrap(), period);
        }
    }
}
