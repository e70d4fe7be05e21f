//! Recovering inner payloads from received Warp message bytes.
//!
//! These work on raw offsets rather than the strict unpackers so they can be
//! pointed at bytes of unknown provenance, e.g. a blob cut out of a fetched
//! transaction, where trailing data is common.

use tracing::trace;
use warp_codec::{
    DecodeError, DecodeResult, HEADER_LEN, VAR_BYTES_PREFIX_LEN, parse_bytes, parse_uint32,
};
use warp_msg_types::{Message, MessageKind};

use crate::{UNSIGNED_MESSAGE_HEADER_LEN, UNSIGNED_MESSAGE_LEN_OFFSET};

/// Smallest buffer that can hold an `AddressedCall` header and source length.
pub const ADDRESSED_CALL_MIN_LEN: usize = HEADER_LEN + VAR_BYTES_PREFIX_LEN;

/// Returns the message body of a packed `UnsignedMessage`.
///
/// Anything after the declared body is ignored.
pub fn extract_payload_from_warp_message(buf: &[u8]) -> DecodeResult<&[u8]> {
    if buf.len() < UNSIGNED_MESSAGE_HEADER_LEN {
        return Err(DecodeError::TooShort {
            min: UNSIGNED_MESSAGE_HEADER_LEN,
            got: buf.len(),
        });
    }

    let declared = parse_uint32(buf, UNSIGNED_MESSAGE_LEN_OFFSET)? as usize;
    let available = buf.len() - UNSIGNED_MESSAGE_HEADER_LEN;
    if declared == 0 || declared > available {
        trace!(declared, available, "warp message length out of range");
        return Err(DecodeError::InvalidLength {
            declared,
            available,
        });
    }

    parse_bytes(buf, UNSIGNED_MESSAGE_HEADER_LEN, declared)
}

/// Returns the payload of a packed `AddressedCall`.
///
/// Any bounds violation is reported as [`DecodeError::NotFound`], since
/// callers use this to probe bytes that may not be an `AddressedCall`.
/// Codec and type IDs are not checked.
pub fn extract_payload_from_addressed_call(buf: &[u8]) -> DecodeResult<&[u8]> {
    try_extract_addressed_call(buf).ok_or_else(|| {
        trace!(len = buf.len(), "no addressed call payload");
        DecodeError::NotFound
    })
}

fn try_extract_addressed_call(buf: &[u8]) -> Option<&[u8]> {
    if buf.len() < ADDRESSED_CALL_MIN_LEN {
        return None;
    }
    let source_len = parse_uint32(buf, HEADER_LEN).ok()? as usize;
    let len_offset = ADDRESSED_CALL_MIN_LEN.checked_add(source_len)?;
    let payload_len = parse_uint32(buf, len_offset).ok()? as usize;
    parse_bytes(buf, len_offset + VAR_BYTES_PREFIX_LEN, payload_len).ok()
}

/// Extracts and decodes the typed payload of a Warp message.
pub fn extract_message(buf: &[u8], kind: MessageKind) -> DecodeResult<Message> {
    let call = extract_payload_from_warp_message(buf)?;
    let payload = extract_payload_from_addressed_call(call)?;
    Message::unpack(kind, payload)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use warp_identifiers::ChainId;

    use super::*;
    use crate::{NetworkId, new_addressed_call, new_unsigned_message};

    #[test]
    fn test_41_bytes_too_short() {
        assert_eq!(
            extract_payload_from_warp_message(&[0u8; 41]),
            Err(DecodeError::TooShort { min: 42, got: 41 })
        );
    }

    #[test]
    fn test_zero_length_rejected() {
        let buf = new_unsigned_message(NetworkId::FUJI, &ChainId::P_CHAIN, &[]).unwrap();
        assert_eq!(
            extract_payload_from_warp_message(&buf),
            Err(DecodeError::InvalidLength {
                declared: 0,
                available: 0,
            })
        );
    }

    #[test]
    fn test_length_past_end_rejected() {
        let mut buf = new_unsigned_message(NetworkId::FUJI, &ChainId::P_CHAIN, &[1, 2, 3]).unwrap();
        buf[41] = 4;
        assert_eq!(
            extract_payload_from_warp_message(&buf),
            Err(DecodeError::InvalidLength {
                declared: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut buf = new_unsigned_message(NetworkId::FUJI, &ChainId::P_CHAIN, &[1, 2, 3]).unwrap();
        buf.extend_from_slice(&[0xee; 5]);
        assert_eq!(extract_payload_from_warp_message(&buf).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_addressed_call_with_source() {
        let buf = new_addressed_call(&[0x42; 20], &[9, 8, 7]).unwrap();
        assert_eq!(extract_payload_from_addressed_call(&buf).unwrap(), &[9, 8, 7]);
    }

    #[test]
    fn test_addressed_call_bounds_are_not_found() {
        assert_eq!(extract_payload_from_addressed_call(&[0; 9]), Err(DecodeError::NotFound));

        let buf = new_addressed_call(&[0x42; 20], &[9, 8, 7]).unwrap();
        assert_eq!(
            extract_payload_from_addressed_call(&buf[..buf.len() - 1]),
            Err(DecodeError::NotFound)
        );

        // Source length pointing far past the end.
        let mut huge = buf.clone();
        huge[6..10].copy_from_slice(&u32::MAX.to_be_bytes());
        assert_eq!(extract_payload_from_addressed_call(&huge), Err(DecodeError::NotFound));
    }

    proptest! {
        #[test]
        fn proptest_extract_inverts_envelope(
            network in any::<u32>(),
            chain in any::<[u8; 32]>(),
            msg in prop::collection::vec(any::<u8>(), 1..256),
        ) {
            let buf = new_unsigned_message(NetworkId::new(network), &ChainId::from(chain), &msg).unwrap();
            prop_assert_eq!(extract_payload_from_warp_message(&buf).unwrap(), msg.as_slice());
        }

        #[test]
        fn proptest_extract_never_panics(buf in prop::collection::vec(any::<u8>(), 0..128)) {
            let _ = extract_payload_from_warp_message(&buf);
            let _ = extract_payload_from_addressed_call(&buf);
        }
    }
}
