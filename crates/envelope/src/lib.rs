//! Warp message envelopes.
//!
//! Outbound, a payload is wrapped in an [`AddressedCall`] and then in an
//! [`UnsignedMessage`] that names the network and source chain. Inbound, the
//! extractors peel those layers back off raw bytes.

mod access_list;
mod addressed_call;
mod conversion;
mod extract;
mod network;
mod unsigned;

pub use access_list::{
    AccessTuple, PREDICATE_DELIMITER, WARP_PRECOMPILE_ADDRESS, pack_access_list,
    unpack_access_list, warp_access_tuple,
};
pub use addressed_call::{ADDRESSED_CALL_TYPE_ID, AddressedCall, new_addressed_call};
pub use conversion::pack_l1_conversion_message;
pub use extract::{
    ADDRESSED_CALL_MIN_LEN, extract_message, extract_payload_from_addressed_call,
    extract_payload_from_warp_message,
};
pub use network::{Network, NetworkId, UnknownNetwork};
pub use unsigned::{
    UNSIGNED_MESSAGE_HEADER_LEN, UNSIGNED_MESSAGE_LEN_OFFSET, UnsignedMessage,
    new_unsigned_message,
};
