//! Warp predicate encoding for EVM access lists.
//!
//! A signed Warp message reaches an EVM chain as the storage keys of an
//! access list entry for the Warp precompile. The bytes get a `0xFF`
//! delimiter, are zero padded to a multiple of 32 and split into keys.

use serde::{Deserialize, Serialize};
use tracing::trace;
use warp_codec::{DecodeError, DecodeResult};
use warp_identifiers::{Buf20, Buf32};

/// Address of the Warp precompile.
pub const WARP_PRECOMPILE_ADDRESS: Buf20 = Buf20::new([
    0x02, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x05,
]);

/// Marks the end of the predicate bytes before padding.
pub const PREDICATE_DELIMITER: u8 = 0xff;

const KEY_LEN: usize = 32;

/// One access list entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTuple {
    pub address: Buf20,
    pub storage_keys: Vec<Buf32>,
}

/// Splits `predicate` into delimited, zero padded storage keys.
pub fn pack_access_list(predicate: &[u8]) -> Vec<Buf32> {
    let mut bytes = Vec::with_capacity(predicate.len() + KEY_LEN);
    bytes.extend_from_slice(predicate);
    bytes.push(PREDICATE_DELIMITER);
    bytes.resize(bytes.len().div_ceil(KEY_LEN) * KEY_LEN, 0);

    bytes
        .chunks_exact(KEY_LEN)
        .map(|chunk| {
            let mut key = [0u8; KEY_LEN];
            key.copy_from_slice(chunk);
            Buf32::new(key)
        })
        .collect()
}

/// Reassembles predicate bytes from storage keys.
pub fn unpack_access_list(keys: &[Buf32]) -> DecodeResult<Vec<u8>> {
    let mut bytes: Vec<u8> = keys.iter().flat_map(|k| k.as_bytes()).copied().collect();

    let Some(end) = bytes.iter().rposition(|b| *b != 0) else {
        trace!(keys = keys.len(), "predicate is all zeros");
        return Err(DecodeError::InvalidPredicate);
    };
    if bytes[end] != PREDICATE_DELIMITER {
        trace!(keys = keys.len(), last = bytes[end], "predicate missing delimiter");
        return Err(DecodeError::InvalidPredicate);
    }

    bytes.truncate(end);
    Ok(bytes)
}

/// Builds the Warp precompile access list entry carrying `predicate`.
pub fn warp_access_tuple(predicate: &[u8]) -> AccessTuple {
    AccessTuple {
        address: WARP_PRECOMPILE_ADDRESS,
        storage_keys: pack_access_list(predicate),
    }
}
