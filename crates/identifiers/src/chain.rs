//! Chain and subnet identifiers.
//!
//! Both are 32 bytes on the wire. Their canonical text form is cb58, but hex
//! (with or without `0x`) is accepted on input as well.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use warp_codec::{DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter};

use crate::{Buf32, ParseError, cb58};

/// Parses a 32-byte identifier from cb58 or hex text.
fn parse_id32(s: &str) -> Result<Buf32, ParseError> {
    let s = s.trim();
    let hex_body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"));
    let hex_body = match hex_body {
        Some(body) => Some(body),
        // Unprefixed 64-digit hex can't collide with cb58 of 32 bytes, which
        // is always longer.
        None if s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit()) => Some(s),
        None => None,
    };

    let bytes = match hex_body {
        Some(body) => {
            let raw = hex::decode(body)?;
            <[u8; 32]>::try_from(raw.as_slice()).map_err(|_| ParseError::Length {
                expected: 32,
                got: raw.len(),
            })?
        }
        None => cb58::decode_fixed::<32>(s)?,
    };
    Ok(Buf32::new(bytes))
}

macro_rules! impl_cb58_id {
    ($name:ident) => {
        impl $name {
            pub const fn new(buf: Buf32) -> Self {
                Self(buf)
            }

            pub const fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }

            pub const fn inner(&self) -> &Buf32 {
                &self.0
            }

            pub fn to_cb58(&self) -> String {
                cb58::encode(self.0.as_bytes())
            }
        }

        impl From<Buf32> for $name {
            fn from(value: Buf32) -> Self {
                Self(value)
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(value: [u8; 32]) -> Self {
                Self(Buf32::new(value))
            }
        }

        impl From<$name> for Buf32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id32(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_cb58())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_cb58())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_cb58())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }

        impl WireCodec for $name {
            fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
                self.0.encode(w)
            }

            fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
                Buf32::decode(r).map(Self)
            }
        }
    };
}

/// Identifier of a blockchain, used as the source chain of Warp messages.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ChainId(Buf32);

impl ChainId {
    /// The P-Chain, which is identified by all zero bytes.
    pub const P_CHAIN: ChainId = ChainId(Buf32::zero());
}

/// Identifier of a subnet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct SubnetId(Buf32);

impl SubnetId {
    /// The primary network's subnet, all zero bytes.
    pub const PRIMARY_NETWORK: SubnetId = SubnetId(Buf32::zero());
}

impl_cb58_id!(ChainId);
impl_cb58_id!(SubnetId);

#[cfg(test)]
mod tests {
    use super::*;

    const P_CHAIN_CB58: &str = "11111111111111111111111111111111LpoYY";

    #[test]
    fn test_p_chain_text_forms() {
        assert_eq!(ChainId::P_CHAIN.to_string(), P_CHAIN_CB58);
        assert_eq!(P_CHAIN_CB58.parse::<ChainId>().unwrap(), ChainId::P_CHAIN);
        assert_eq!(
            format!("0x{}", "00".repeat(32)).parse::<ChainId>().unwrap(),
            ChainId::P_CHAIN
        );
        assert_eq!("00".repeat(32).parse::<ChainId>().unwrap(), ChainId::P_CHAIN);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            "0xabcd".parse::<SubnetId>(),
            Err(ParseError::Length {
                expected: 32,
                got: 2
            })
        ));
        let short = cb58::encode(&[1; 20]);
        assert!(short.parse::<SubnetId>().is_err());
    }

    #[test]
    fn test_serde_uses_cb58() {
        let id = SubnetId::from([0xab; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_cb58()));
        assert_eq!(serde_json::from_str::<SubnetId>(&json).unwrap(), id);
    }
}
