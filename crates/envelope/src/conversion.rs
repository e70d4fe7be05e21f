//! Outbound subnet-to-L1 conversion message.

use tracing::debug;
use warp_codec::EncodeResult;
use warp_identifiers::ChainId;
use warp_msg_types::{ConversionData, calculate_conversion_id, new_subnet_to_l1_conversion};

use crate::{NetworkId, new_addressed_call, new_unsigned_message};

/// Packs the Warp message the P-Chain emits for an accepted conversion.
///
/// The payload is the 38-byte `SubnetToL1Conversion` carrying the conversion
/// ID, wrapped in an `AddressedCall` with an empty source address.
pub fn pack_l1_conversion_message(
    network_id: NetworkId,
    source_chain_id: &ChainId,
    data: &ConversionData,
) -> EncodeResult<Vec<u8>> {
    let conversion_id = calculate_conversion_id(data)?;
    debug!(
        %network_id,
        %conversion_id,
        validators = data.initial_validators.len(),
        "packing conversion message"
    );
    let payload = new_subnet_to_l1_conversion(conversion_id)?;
    let call = new_addressed_call(&[], &payload)?;
    new_unsigned_message(network_id, source_chain_id, &call)
}
