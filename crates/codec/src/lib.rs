//! Wire primitives for the Warp validator message formats.
//!
//! Everything in the Warp formats is big-endian and fixed-width, except for
//! "var bytes" fields which carry a `u32` length prefix. This crate provides
//! the checked primitives plus a small [`WireCodec`] trait that the message
//! crates implement on their types.

mod errors;
mod primitives;
mod reader;
mod traits;
mod writer;

pub use errors::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use primitives::{
    concat_bytes, encode_uint16, encode_uint32, encode_uint64, encode_var_bytes, parse_bytes,
    parse_uint16, parse_uint32, parse_uint64, parse_var_bytes,
};
pub use reader::{WireReader, expect_exact_len};
pub use traits::{WireCodec, decode_buf_exact, encode_to_vec};
pub use writer::WireWriter;

/// Codec version tag prefixing every packed structure.
pub const CODEC_VERSION: u16 = 0;

/// Width of the codec version tag.
pub const CODEC_ID_LEN: usize = 2;

/// Width of a type id.
pub const TYPE_ID_LEN: usize = 4;

/// Width of the common `codecID | typeID` prefix.
pub const HEADER_LEN: usize = CODEC_ID_LEN + TYPE_ID_LEN;

/// Width of the length prefix on var bytes fields.
pub const VAR_BYTES_PREFIX_LEN: usize = 4;
