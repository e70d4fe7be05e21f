//! Proptest strategies for payload types.

#![allow(unreachable_pub, reason = "test utils module")]

use proptest::{
    collection::{btree_map, vec},
    prelude::*,
};
use warp_identifiers::{
    Buf32, ConversionId, ValidationId,
    test_utils::{
        buf20_strategy, buf32_strategy, buf48_strategy, chain_id_strategy, node_id_strategy,
        subnet_id_strategy,
    },
};

use crate::{
    ConversionData, ConversionValidatorData, L1ValidatorRegistration, L1ValidatorWeight,
    PChainOwner, SubnetToL1Conversion, ValidationPeriod, ValidationUptime,
};

fn validation_id_strategy() -> impl Strategy<Value = ValidationId> {
    buf32_strategy().prop_map(|b: Buf32| b.into())
}

pub fn p_chain_owner_strategy() -> impl Strategy<Value = PChainOwner> {
    (
        any::<u32>(),
        vec(buf20_strategy(), 0..4),
    )
        .prop_map(|(threshold, addresses)| PChainOwner::new(threshold, addresses))
}

pub fn validation_period_strategy() -> impl Strategy<Value = ValidationPeriod> {
    (
        subnet_id_strategy(),
        node_id_strategy(),
        buf48_strategy(),
        any::<u64>(),
        p_chain_owner_strategy(),
        p_chain_owner_strategy(),
        any::<u64>(),
    )
        .prop_map(
            |(
                subnet_id,
                node_id,
                bls_public_key,
                registration_expiry,
                remaining_balance_owner,
                disable_owner,
                weight,
            )| ValidationPeriod {
                subnet_id,
                node_id,
                bls_public_key,
                registration_expiry,
                remaining_balance_owner,
                disable_owner,
                weight,
            },
        )
}

/// Conversion data with distinct node IDs.
pub fn conversion_data_strategy() -> impl Strategy<Value = ConversionData> {
    (
        subnet_id_strategy(),
        chain_id_strategy(),
        buf20_strategy(),
        btree_map(
            node_id_strategy(),
            (buf48_strategy(), any::<u64>()),
            0..6,
        ),
    )
        .prop_map(|(subnet_id, chain_id, address, validators)| ConversionData {
            subnet_id,
            validator_manager_blockchain_id: chain_id,
            validator_manager_address: address,
            // Map order is canonical, so reverse it to exercise sorting.
            initial_validators: validators
                .into_iter()
                .rev()
                .map(|(node_id, (bls, weight))| ConversionValidatorData::new(node_id, bls, weight))
                .collect(),
        })
}

pub fn l1_validator_registration_strategy() -> impl Strategy<Value = L1ValidatorRegistration> {
    (validation_id_strategy(), any::<bool>())
        .prop_map(|(id, registered)| L1ValidatorRegistration::new(id, registered))
}

pub fn l1_validator_weight_strategy() -> impl Strategy<Value = L1ValidatorWeight> {
    (validation_id_strategy(), any::<u64>(), any::<u64>())
        .prop_map(|(id, nonce, weight)| L1ValidatorWeight::new(id, nonce, weight))
}

pub fn validation_uptime_strategy() -> impl Strategy<Value = ValidationUptime> {
    (validation_id_strategy(), any::<u64>()).prop_map(|(id, uptime)| ValidationUptime::new(id, uptime))
}

pub fn subnet_to_l1_conversion_strategy() -> impl Strategy<Value = SubnetToL1Conversion> {
    buf32_strategy().prop_map(|b: Buf32| SubnetToL1Conversion::new(ConversionId::from(b)))
}
