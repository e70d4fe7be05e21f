//! Identifiers derived by hashing packed payloads.

use warp_codec::EncodeResult;
use warp_identifiers::{ConversionId, ValidationId, sha256};

use crate::{ConversionData, ValidationPeriod, pack_conversion_data};

/// SHA-256 over the canonically ordered conversion data.
pub fn calculate_conversion_id(data: &ConversionData) -> EncodeResult<ConversionId> {
    let preimage = pack_conversion_data(data)?;
    Ok(sha256(&preimage).into())
}

/// SHA-256 over the packed `RegisterL1Validator` payload.
pub fn calculate_validation_id(period: &ValidationPeriod) -> EncodeResult<ValidationId> {
    let preimage = period.pack()?;
    Ok(sha256(&preimage).into())
}
