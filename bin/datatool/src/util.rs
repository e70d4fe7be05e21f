//! Helpers shared by the `datatool` subcommands.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Reads and parses a JSON input file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path:?}"))
}

/// Decodes hex with an optional `0x` prefix.
pub(crate) fn parse_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    let body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(body).context("invalid hex")
}

pub(crate) fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Prints `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_prefixes() {
        assert_eq!(parse_hex("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(parse_hex(" DEAD\n").unwrap(), vec![0xde, 0xad]);
        assert!(parse_hex("0xzz").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0, 255]), "0x00ff");
    }
}
