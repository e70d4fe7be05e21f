//! Core identifier types and buffer types.

#[macro_use]
mod macros;

mod buf;
pub mod cb58;
mod chain;
mod errors;
pub mod hash;
mod ids;
mod node;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use buf::{Buf20, Buf32, Buf48};
pub use chain::{ChainId, SubnetId};
pub use errors::ParseError;
pub use hash::sha256;
pub use ids::{ConversionId, ValidationId, WarpMessageId};
pub use node::{NODE_ID_PREFIX, NodeId, NodeIdEncoding, compare_node_ids};

// Re-export for macro use
#[doc(hidden)]
#[rustfmt::skip]
pub use warp_codec;
