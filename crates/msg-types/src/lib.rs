//! Payloads for the validator lifecycle messages exchanged between L1s and
//! the P-Chain, plus the identifiers derived from them.
//!
//! Every payload starts with `codecID: u16 = 0` and a `typeID: u32`. Type IDs
//! are scoped per payload kind and are *not* unique: `SubnetToL1Conversion`
//! and `ValidationUptime` both use `0`. Callers must know which kind they
//! expect, see [`MessageKind`].

mod constants;
mod conversion;
mod ids;
mod message;
mod owner;
mod register;
mod registration;
mod uptime;
mod weight;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use constants::*;
pub use conversion::{
    ConversionData, ConversionValidatorData, SubnetToL1Conversion, new_subnet_to_l1_conversion,
    pack_conversion_data, unpack_conversion_data, unpack_subnet_to_l1_conversion,
};
pub use ids::{calculate_conversion_id, calculate_validation_id};
pub use message::{Message, MessageKind, UnknownMessageKind};
pub use owner::PChainOwner;
pub use register::{
    ValidationPeriod, pack_register_l1_validator_payload, unpack_register_l1_validator_payload,
};
pub use registration::{
    L1ValidatorRegistration, pack_l1_validator_registration_payload,
    unpack_l1_validator_registration_payload,
};
pub use uptime::{ValidationUptime, pack_validation_uptime_payload, unpack_validation_uptime_payload};
pub use weight::{
    L1ValidatorWeight, pack_l1_validator_weight_payload, unpack_l1_validator_weight_payload,
};
