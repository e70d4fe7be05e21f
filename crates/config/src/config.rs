use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use warp_envelope::Network;
use warp_identifiers::ChainId;

use crate::ConfigError;

/// Environment variable consulted for the network when no flag is given.
pub const NETWORK_ENVVAR: &str = "WARP_NETWORK";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Use JSON format for logs instead of compact format.
    #[serde(default)]
    pub json_format: bool,

    /// Filter directives, used when `RUST_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatatoolConfig {
    /// Network whose ID goes into packed messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,

    /// Source chain of packed messages, the P-Chain if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_chain_id: Option<ChainId>,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DatatoolConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Resolves the network to use.
    ///
    /// Priority:
    ///
    /// 1. Command-line argument (if provided)
    /// 2. `WARP_NETWORK` environment variable (if set)
    /// 3. Config file
    /// 4. Default network (Fuji)
    pub fn resolve_network(
        &self,
        arg: Option<Network>,
        env_value: Option<&str>,
    ) -> Result<Network, ConfigError> {
        if let Some(network) = arg {
            return Ok(network);
        }

        if let Some(raw) = env_value {
            return raw.parse().map_err(|source| ConfigError::Env {
                var: NETWORK_ENVVAR,
                source,
            });
        }

        Ok(self.network.unwrap_or_default())
    }

    /// Source chain ID for packed messages.
    pub fn source_chain_id(&self) -> ChainId {
        self.source_chain_id.unwrap_or(ChainId::P_CHAIN)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_load() {
        let config_string = r#"
            network = "mainnet"
            source_chain_id = "0x0101010101010101010101010101010101010101010101010101010101010101"

            [logging]
            json_format = true
            filter = "warp_envelope=trace"
        "#;

        let config = DatatoolConfig::from_toml_str(config_string);
        assert!(
            config.is_ok(),
            "should be able to load TOML config but got: {:?}",
            config.err()
        );
        let config = config.unwrap();
        assert_eq!(config.network, Some(Network::Mainnet));
        assert_eq!(config.source_chain_id(), ChainId::from([1; 32]));
        assert!(config.logging.json_format);
        assert_eq!(config.logging.filter.as_deref(), Some("warp_envelope=trace"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DatatoolConfig::from_toml_str("").unwrap();
        assert_eq!(config.resolve_network(None, None).unwrap(), Network::Fuji);
        assert_eq!(config.source_chain_id(), ChainId::P_CHAIN);
        assert!(!config.logging.json_format);
    }

    #[test]
    fn test_custom_network() {
        let config = DatatoolConfig::from_toml_str("network = { custom = 1337 }").unwrap();
        assert_eq!(config.network, Some(Network::Custom(1337)));
    }

    #[test]
    fn test_network_priority() {
        let config = DatatoolConfig {
            network: Some(Network::Local),
            ..Default::default()
        };

        assert_eq!(
            config
                .resolve_network(Some(Network::Mainnet), Some("fuji"))
                .unwrap(),
            Network::Mainnet
        );
        assert_eq!(config.resolve_network(None, Some("fuji")).unwrap(), Network::Fuji);
        assert_eq!(config.resolve_network(None, None).unwrap(), Network::Local);
        assert!(matches!(
            config.resolve_network(None, Some("nowhere")),
            Err(ConfigError::Env { .. })
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            DatatoolConfig::from_toml_str("network = 12"),
            Err(ConfigError::Parse(_))
        ));
    }
}
