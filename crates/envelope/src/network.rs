//! Network identifiers.
//!
//! The codec treats the network ID as an opaque `u32`; [`Network`] is only a
//! convenience for picking one by name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Network ID carried in every [`UnsignedMessage`](crate::UnsignedMessage).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(u32);

impl NetworkId {
    pub const MAINNET: NetworkId = NetworkId(1);
    pub const FUJI: NetworkId = NetworkId(5);
    pub const LOCAL: NetworkId = NetworkId(12345);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NetworkId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NetworkId> for u32 {
    fn from(value: NetworkId) -> Self {
        value.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network '{0}', expected mainnet, fuji, local or a numeric id")]
pub struct UnknownNetwork(pub String);

/// A named network, or any other ID.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Fuji,
    Local,
    Custom(u32),
}

impl Network {
    pub const fn network_id(self) -> NetworkId {
        match self {
            Network::Mainnet => NetworkId::MAINNET,
            Network::Fuji => NetworkId::FUJI,
            Network::Local => NetworkId::LOCAL,
            Network::Custom(id) => NetworkId(id),
        }
    }
}

impl From<NetworkId> for Network {
    fn from(id: NetworkId) -> Self {
        match id {
            NetworkId::MAINNET => Network::Mainnet,
            NetworkId::FUJI => Network::Fuji,
            NetworkId::LOCAL => Network::Local,
            NetworkId(other) => Network::Custom(other),
        }
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "fuji" | "testnet" => Ok(Network::Fuji),
            "local" => Ok(Network::Local),
            other => other
                .parse::<u32>()
                .map(|id| NetworkId(id).into())
                .map_err(|_| UnknownNetwork(s.to_owned())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Fuji => f.write_str("fuji"),
            Network::Local => f.write_str("local"),
            Network::Custom(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("fuji".parse::<Network>().unwrap().network_id().get(), 5);
        assert_eq!("12345".parse::<Network>().unwrap(), Network::Local);
        assert_eq!("99".parse::<Network>().unwrap(), Network::Custom(99));
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_serde_forms() {
        let named: Network = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(named, Network::Local);

        let custom: Network = serde_json::from_str(r#"{"custom": 1337}"#).unwrap();
        assert_eq!(custom.network_id(), NetworkId::new(1337));
    }
}
