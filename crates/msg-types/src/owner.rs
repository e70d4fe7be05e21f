//! P-Chain owner records.

use serde::{Deserialize, Serialize};
use warp_codec::{DecodeResult, EncodeResult, WireCodec, WireReader, WireWriter};
use warp_identifiers::Buf20;

/// Threshold multisig-style ownership record.
///
/// `threshold <= addresses.len()` is the caller's business; the codec packs
/// whatever it is given.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PChainOwner {
    pub threshold: u32,
    pub addresses: Vec<Buf20>,
}

impl PChainOwner {
    pub fn new(threshold: u32, addresses: Vec<Buf20>) -> Self {
        Self {
            threshold,
            addresses,
        }
    }

    /// Owner that nobody can satisfy.
    pub fn unowned() -> Self {
        Self::default()
    }
}

impl WireCodec for PChainOwner {
    fn encode(&self, w: &mut WireWriter) -> EncodeResult<()> {
        w.put_u32(self.threshold);
        self.addresses.encode(w)
    }

    fn decode(r: &mut WireReader<'_>) -> DecodeResult<Self> {
        let threshold = r.read_u32()?;
        let addresses = Vec::<Buf20>::decode(r)?;
        Ok(Self {
            threshold,
            addresses,
        })
    }
}
