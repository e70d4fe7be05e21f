//! `UnsignedMessage`: the envelope validators sign over.
//!
//! ```text
//! codecID u16 | networkID u32 | sourceChainID [32] | varbytes(message)
//! ```

use serde::{Deserialize, Serialize};
use warp_codec::{
    CODEC_ID_LEN, DecodeResult, EncodeResult, VAR_BYTES_PREFIX_LEN, WireCodec, WireReader,
    WireWriter, decode_buf_exact, encode_to_vec,
};
use warp_identifiers::{ChainId, WarpMessageId, sha256};

use crate::NetworkId;

/// Offset of the message length prefix.
pub const UNSIGNED_MESSAGE_LEN_OFFSET: usize = CODEC_ID_LEN + 4 + 32;

/// Bytes in front of the message body.
pub const UNSIGNED_MESSAGE_HEADER_LEN: usize = UNSIGNED_MESSAGE_LEN_OFFSET + VAR_BYTES_PREFIX_LEN;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnsignedMessage {
    pub network_id: NetworkId,
    pub source_chain_id: ChainId,
    /// Usually a packed `AddressedCall`.
    #[serde(with = "hex::serde")]
    pub message: Vec<u8>,
}

impl UnsignedMessage {
    pub fn new(network_id: NetworkId, source_chain_id: ChainId, message: Vec<u8>) -> Self {
        Self {
            network_id,
            source_chain_id,
            message,
        }
    }

    pub fn pack(&self) -> EncodeResult<Vec<u8>> {
        encode_to_vec(self)
    }

    pub fn unpack(buf: &[u8]) -> DecodeResult<Self> {
        decode_buf_exact(buf)
    }

    /// Warp message ID, the SHA-256 of the packed message.
    pub fn id(&self) -> EncodeResult<WarpMessageId> {
        Ok(sha256(&self.pack()?).into())
    }

    fn encode_parts(
        w: &mut WireWriter,
        network_id: NetworkId,
        source_chain_id: &ChainId,
        message: &[u8],
    ) -> EncodeResult<()> {
        w.put_codec_id();
        w.put_u32(network_id.get());
        source_chain_id.encode(w)?;
        w.put_var_bytes("message", message)
    }
}

impl WireCodec for UnsignedMessage {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        Self::encode_parts(w, self.network_id, &self.source_chain_id, &self.message)
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_codec_id()?;
        let network_id = NetworkId::new(r.read_u32()?);
        let source_chain_id = ChainId::decode(r)?;
        let message = r.read_var_bytes()?.to_vec();
        Ok(Self {
            network_id,
            source_chain_id,
            message,
        })
    }
}

/// Packs an `UnsignedMessage` around `message`.
pub fn new_unsigned_message(
    network_id: NetworkId,
    source_chain_id: &ChainId,
    message: &[u8],
) -> EncodeResult<Vec<u8>> {
    let mut w = WireWriter::with_capacity(UNSIGNED_MESSAGE_HEADER_LEN + message.len());
    UnsignedMessage::encode_parts(&mut w, network_id, source_chain_id, message)?;
    Ok(w.into_vec())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use warp_codec::DecodeError;
    use warp_identifiers::test_utils::chain_id_strategy;

    use super::*;

    #[test]
    fn test_layout() {
        let chain = ChainId::from([0x77; 32]);
        let buf = new_unsigned_message(NetworkId::FUJI, &chain, &[1, 2, 3]).unwrap();

        assert_eq!(buf.len(), UNSIGNED_MESSAGE_HEADER_LEN + 3);
        assert_eq!(&buf[..2], &[0, 0]);
        assert_eq!(&buf[2..6], &[0, 0, 0, 5]);
        assert_eq!(&buf[6..38], &[0x77; 32]);
        assert_eq!(&buf[38..42], &[0, 0, 0, 3]);
        assert_eq!(&buf[42..], &[1, 2, 3]);
    }

    #[test]
    fn test_unpack_strict() {
        let msg = UnsignedMessage::new(NetworkId::MAINNET, ChainId::P_CHAIN, vec![4; 10]);
        let mut buf = msg.pack().unwrap();
        assert_eq!(UnsignedMessage::unpack(&buf).unwrap(), msg);

        buf.push(0);
        assert!(matches!(
            UnsignedMessage::unpack(&buf),
            Err(DecodeError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_id_is_hash_of_packed() {
        let msg = UnsignedMessage::new(NetworkId::LOCAL, ChainId::P_CHAIN, vec![1]);
        let packed = msg.pack().unwrap();
        assert_eq!(msg.id().unwrap().as_bytes(), sha256(&packed).as_bytes());
    }

    proptest! {
        #[test]
        fn proptest_unsigned_message_roundtrip(
            network in any::<u32>(),
            chain in chain_id_strategy(),
            message in prop::collection::vec(any::<u8>(), 0..256),
        ) {
            let msg = UnsignedMessage::new(NetworkId::new(network), chain, message);
            let buf = msg.pack().unwrap();
            prop_assert_eq!(buf.len(), UNSIGNED_MESSAGE_HEADER_LEN + msg.message.len());
            prop_assert_eq!(UnsignedMessage::unpack(&buf).unwrap(), msg);
        }
    }
}
