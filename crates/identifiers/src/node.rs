//! Node identifiers and their canonical ordering.
//!
//! Node IDs show up in two textual conventions: `NodeID-<cb58>` and raw hex.
//! Both are normalized to bytes on input; [`NodeIdEncoding`] remembers which
//! one the caller used so results can be rendered back the same way.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use warp_codec::{DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter};

use crate::{ParseError, cb58};

/// Prefix of the human-readable node ID form.
pub const NODE_ID_PREFIX: &str = "NodeID-";

/// The textual convention a node ID was supplied in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NodeIdEncoding {
    /// `NodeID-<cb58>`.
    #[default]
    Prefixed,

    /// Hex, rendered with a `0x` prefix.
    Hex,
}

/// Raw node identifier bytes.
///
/// Ordering is byte-lexicographic with a proper prefix sorting first, which
/// is the canonical order validators are packed in before hashing.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct NodeId(Vec<u8>);

impl NodeId {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses either textual form, reporting which one was used.
    pub fn parse(s: &str) -> Result<(Self, NodeIdEncoding), ParseError> {
        let s = s.trim();
        if let Some(body) = s.strip_prefix(NODE_ID_PREFIX) {
            let bytes = cb58::decode(body)?;
            return Ok((Self(bytes), NodeIdEncoding::Prefixed));
        }

        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(body)?;
        Ok((Self(bytes), NodeIdEncoding::Hex))
    }

    /// Renders the ID in the requested textual form.
    pub fn render(&self, encoding: NodeIdEncoding) -> String {
        match encoding {
            NodeIdEncoding::Prefixed => format!("{NODE_ID_PREFIX}{}", cb58::encode(&self.0)),
            NodeIdEncoding::Hex => format!("0x{}", hex::encode(&self.0)),
        }
    }
}

impl From<Vec<u8>> for NodeId {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for NodeId {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for NodeId {
    fn from(value: [u8; N]) -> Self {
        Self(value.to_vec())
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map(|(id, _)| id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(NodeIdEncoding::Prefixed))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", hex::encode(&self.0))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Node IDs are variable-length on the wire.
impl WireCodec for NodeId {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_var_bytes("node id", &self.0)
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        r.read_var_bytes().map(Self::from)
    }
}

/// Compares two textual node IDs by their raw bytes.
///
/// Either side may use either textual convention.
pub fn compare_node_ids(a: &str, b: &str) -> Result<Ordering, ParseError> {
    let a: NodeId = a.parse()?;
    let b: NodeId = b.parse()?;
    Ok(a.cmp(&b))
}
