//! Subnet-to-L1 conversion: the conversion data hash preimage and the
//! transmitted `SubnetToL1Conversion` message carrying its digest.
//!
//! Conversion data layout (no type ID, never sent as-is):
//!
//! ```text
//! codecID u16 | subnetID [32] | managerChainID [32] | varbytes(managerAddress [20])
//! | count u32 | count * (varbytes(nodeID) | blsPublicKey [48] | weight u64)
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec, expect_exact_len,
};
use warp_identifiers::{Buf20, Buf48, ChainId, ConversionId, NodeId, SubnetId};

use crate::{ADDRESS_LEN, SUBNET_TO_L1_CONVERSION_LEN, SUBNET_TO_L1_CONVERSION_TYPE_ID};

/// One validator of the initial set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConversionValidatorData {
    pub node_id: NodeId,
    pub bls_public_key: Buf48,
    pub weight: u64,
}

impl ConversionValidatorData {
    pub fn new(node_id: NodeId, bls_public_key: Buf48, weight: u64) -> Self {
        Self {
            node_id,
            bls_public_key,
            weight,
        }
    }

    /// Canonical packing order: node ID, then BLS key, then weight.
    ///
    /// Validators sharing a node ID still land in a fixed position, so the
    /// packed preimage never depends on input order.
    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.node_id
            .cmp(&other.node_id)
            .then_with(|| self.bls_public_key.cmp(&other.bls_public_key))
            .then_with(|| self.weight.cmp(&other.weight))
    }
}

impl WireCodec for ConversionValidatorData {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        self.node_id.encode(w)?;
        self.bls_public_key.encode(w)?;
        w.put_u64(self.weight);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            node_id: NodeId::decode(r)?,
            bls_public_key: Buf48::decode(r)?,
            weight: r.read_u64()?,
        })
    }
}

/// Everything the P-Chain commits to when a subnet converts to an L1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConversionData {
    pub subnet_id: SubnetId,
    pub validator_manager_blockchain_id: ChainId,
    pub validator_manager_address: Buf20,
    pub initial_validators: Vec<ConversionValidatorData>,
}

impl ConversionData {
    /// Sorts the initial validators into canonical node ID order in place.
    ///
    /// Packing always sorts, so this only matters for comparing values.
    pub fn canonicalize(&mut self) {
        self.initial_validators.sort_by(|a, b| a.canonical_cmp(b));
    }

    /// Validators in the order they are packed.
    pub fn canonical_validators(&self) -> Vec<&ConversionValidatorData> {
        let mut sorted: Vec<_> = self.initial_validators.iter().collect();
        sorted.sort_by(|a, b| a.canonical_cmp(b));
        sorted
    }
}

impl WireCodec for ConversionData {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_codec_id();
        self.subnet_id.encode(w)?;
        self.validator_manager_blockchain_id.encode(w)?;
        w.put_var_bytes(
            "validator manager address",
            self.validator_manager_address.as_bytes(),
        )?;

        let validators = self.canonical_validators();
        w.put_len("initial validators", validators.len())?;
        for v in validators {
            v.encode(w)?;
        }
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_codec_id()?;
        Ok(Self {
            subnet_id: SubnetId::decode(r)?,
            validator_manager_blockchain_id: ChainId::decode(r)?,
            validator_manager_address: r
                .read_var_fixed::<ADDRESS_LEN>("validator manager address")?
                .into(),
            initial_validators: Vec::decode(r)?,
        })
    }
}

/// Packs the conversion ID preimage, with validators in canonical order.
pub fn pack_conversion_data(data: &ConversionData) -> EncodeResult<Vec<u8>> {
    encode_to_vec(data)
}

/// Unpacks a conversion ID preimage. Validators keep their wire order.
pub fn unpack_conversion_data(buf: &[u8]) -> DecodeResult<ConversionData> {
    decode_buf_exact(buf)
}

/// The message the P-Chain signs once a conversion is accepted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubnetToL1Conversion {
    pub conversion_id: ConversionId,
}

impl SubnetToL1Conversion {
    pub fn new(conversion_id: ConversionId) -> Self {
        Self { conversion_id }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    /// Unpacks the fixed 38-byte payload.
    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        expect_exact_len(buf, SUBNET_TO_L1_CONVERSION_LEN)?;
        decode_buf_exact(buf)
    }
}

impl WireCodec for SubnetToL1Conversion {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_header(SUBNET_TO_L1_CONVERSION_TYPE_ID);
        self.conversion_id.encode(w)
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(SUBNET_TO_L1_CONVERSION_TYPE_ID)?;
        Ok(Self {
            conversion_id: ConversionId::decode(r)?,
        })
    }
}

pub fn new_subnet_to_l1_conversion(conversion_id: ConversionId) -> EncodeResult<Vec<u8>> {
    SubnetToL1Conversion::new(conversion_id).pack()
}

pub fn unpack_subnet_to_l1_conversion(buf: &[u8]) -> DecodeResult<SubnetToL1Conversion> {
    SubnetToL1Conversion::unpack(buf)
}
