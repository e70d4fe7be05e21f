//! Test utilities and proptest strategies for identifier types.

#![allow(unreachable_pub, reason = "test utils module")]

use proptest::prelude::*;

use crate::{Buf20, Buf32, Buf48, ChainId, NodeId, SubnetId};

/// Strategy for generating random [`Buf20`] values.
pub fn buf20_strategy() -> impl Strategy<Value = Buf20> {
    any::<[u8; 20]>().prop_map(Buf20::from)
}

/// Strategy for generating random [`Buf32`] values.
pub fn buf32_strategy() -> impl Strategy<Value = Buf32> {
    any::<[u8; 32]>().prop_map(Buf32::from)
}

/// Strategy for generating random [`Buf48`] values.
pub fn buf48_strategy() -> impl Strategy<Value = Buf48> {
    // proptest only implements `Arbitrary` for arrays up to 32.
    (any::<[u8; 32]>(), any::<[u8; 16]>()).prop_map(|(hi, lo)| {
        let mut out = [0u8; 48];
        out[..32].copy_from_slice(&hi);
        out[32..].copy_from_slice(&lo);
        Buf48::new(out)
    })
}

/// Strategy for generating random [`SubnetId`] values.
pub fn subnet_id_strategy() -> impl Strategy<Value = SubnetId> {
    buf32_strategy().prop_map(SubnetId::from)
}

/// Strategy for generating random [`ChainId`] values.
pub fn chain_id_strategy() -> impl Strategy<Value = ChainId> {
    buf32_strategy().prop_map(ChainId::from)
}

/// Strategy for generating [`NodeId`] values, mostly of the usual 20 bytes.
pub fn node_id_strategy() -> impl Strategy<Value = NodeId> {
    prop_oneof![
        4 => any::<[u8; 20]>().prop_map(NodeId::from),
        1 => proptest::collection::vec(any::<u8>(), 0..40).prop_map(NodeId::new),
    ]
}
