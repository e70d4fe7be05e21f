//! `AddressedCall`: a payload tagged with the address that emitted it.
//!
//! ```text
//! codecID u16 | typeID u32 = 1 | varbytes(sourceAddress) | varbytes(payload)
//! ```

use serde::{Deserialize, Serialize};
use warp_codec::{
    DecodeResult, EncodeResult, HEADER_LEN, WireCodec, WireReader, WireWriter, decode_buf_exact,
    encode_to_vec,
};

/// Type ID marking an `AddressedCall` inside an `UnsignedMessage`.
pub const ADDRESSED_CALL_TYPE_ID: u32 = 1;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressedCall {
    /// Empty when the P-Chain itself is the sender.
    #[serde(with = "hex::serde")]
    pub source_address: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub payload: Vec<u8>,
}

impl AddressedCall {
    pub fn new(source_address: impl Into<Vec<u8>>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            source_address: source_address.into(),
            payload: payload.into(),
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        decode_buf_exact(buf)
    }

    fn encode_parts(w: &mut WireWriter, source_address: &[u8], payload: &[u8]) -> EncodeResult<()> {
        w.put_header(ADDRESSED_CALL_TYPE_ID);
        w.put_var_bytes("source address", source_address)?;
        w.put_var_bytes("payload", payload)
    }
}

impl WireCodec for AddressedCall {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        Self::encode_parts(w, &self.source_address, &self.payload)
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_header(ADDRESSED_CALL_TYPE_ID)?;
        let source_address = r.read_var_bytes()?.to_vec();
        let payload = r.read_var_bytes()?.to_vec();
        Ok(Self {
            source_address,
            payload,
        })
    }
}

/// Packs an `AddressedCall` around `payload`.
pub fn new_addressed_call(source_address: &[u8], payload: &[u8]) -> EncodeResult<Vec<u8>> {
    let mut w = WireWriter::with_capacity(HEADER_LEN + 8 + source_address.len() + payload.len());
    AddressedCall::encode_parts(&mut w, source_address, payload)?;
    Ok(w.into_vec())
}
