//! Hashing helpers.

use sha2::{Digest, Sha256};

use crate::Buf32;

/// Computes the SHA-256 digest of `buf`.
pub fn sha256(buf: &[u8]) -> Buf32 {
    Buf32::new(Sha256::digest(buf).into())
}
