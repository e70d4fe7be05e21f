//! Type IDs and fixed payload lengths.

use warp_codec::HEADER_LEN;

/// Type ID of `SubnetToL1Conversion`.
pub const SUBNET_TO_L1_CONVERSION_TYPE_ID: u32 = 0;

/// Type ID of `RegisterL1Validator`.
pub const REGISTER_L1_VALIDATOR_TYPE_ID: u32 = 1;

/// Type ID of `L1ValidatorRegistration`.
pub const L1_VALIDATOR_REGISTRATION_TYPE_ID: u32 = 2;

/// Type ID of `L1ValidatorWeight`.
pub const L1_VALIDATOR_WEIGHT_TYPE_ID: u32 = 3;

/// Type ID of `ValidationUptime`. Shares its value with
/// [`SUBNET_TO_L1_CONVERSION_TYPE_ID`].
pub const VALIDATION_UPTIME_TYPE_ID: u32 = 0;

/// Width of a packed 32-byte identifier.
pub const ID_LEN: usize = 32;

/// Width of a compressed BLS public key.
pub const BLS_PUBLIC_KEY_LEN: usize = 48;

/// Width of an owner or contract address.
pub const ADDRESS_LEN: usize = 20;

/// Packed length of `SubnetToL1Conversion`.
pub const SUBNET_TO_L1_CONVERSION_LEN: usize = HEADER_LEN + ID_LEN;

/// Packed length of `L1ValidatorRegistration`.
pub const L1_VALIDATOR_REGISTRATION_LEN: usize = HEADER_LEN + ID_LEN + 1;

/// Packed length of `L1ValidatorWeight`.
pub const L1_VALIDATOR_WEIGHT_LEN: usize = HEADER_LEN + ID_LEN + 8 + 8;

/// Packed length of `ValidationUptime`.
pub const VALIDATION_UPTIME_LEN: usize = HEADER_LEN + ID_LEN + 8;
