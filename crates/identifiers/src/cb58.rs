//! CB58, the checksummed base58 text encoding used for chain, subnet and
//! node identifiers.
//!
//! The encoded payload is the raw bytes followed by the last four bytes of
//! their SHA-256 digest.

use sha2::{Digest, Sha256};

use crate::ParseError;

/// Length of the trailing checksum.
pub const CHECKSUM_LEN: usize = 4;

fn checksum(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(bytes);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Encodes bytes as a cb58 string.
pub fn encode(bytes: &[u8]) -> String {
    let mut payload = Vec::with_capacity(bytes.len() + CHECKSUM_LEN);
    payload.extend_from_slice(bytes);
    payload.extend_from_slice(&checksum(bytes));
    bs58::encode(payload).into_string()
}

/// Decodes a cb58 string, verifying its checksum.
pub fn decode(s: &str) -> Result<Vec<u8>, ParseError> {
    let mut raw = bs58::decode(s).into_vec()?;
    if raw.len() < CHECKSUM_LEN {
        return Err(ParseError::MissingChecksum);
    }

    let split = raw.len() - CHECKSUM_LEN;
    if raw[split..] != checksum(&raw[..split]) {
        return Err(ParseError::Checksum);
    }

    raw.truncate(split);
    Ok(raw)
}

/// Decodes a cb58 string that must hold exactly `N` bytes.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], ParseError> {
    let raw = decode(s)?;
    <[u8; N]>::try_from(raw.as_slice()).map_err(|_| ParseError::Length {
        expected: N,
        got: raw.len(),
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_zero_chain_id() {
        let s = encode(&[0; 32]);
        assert_eq!(s, "11111111111111111111111111111111LpoYY");
        assert_eq!(decode_fixed::<32>(&s).unwrap(), [0; 32]);
    }

    #[test]
    fn test_bad_checksum() {
        // Last character flipped.
        let err = decode("11111111111111111111111111111111LpoYZ").unwrap_err();
        assert!(matches!(err, ParseError::Checksum));
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(decode("1"), Err(ParseError::MissingChecksum)));
        assert!(matches!(decode("0OIl"), Err(ParseError::Base58(_))));
    }

    #[test]
    fn test_wrong_fixed_len() {
        let s = encode(&[7; 20]);
        assert!(matches!(
            decode_fixed::<32>(&s),
            Err(ParseError::Length {
                expected: 32,
                got: 20
            })
        ));
    }

    proptest! {
        #[test]
        fn proptest_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
        }
    }
}
