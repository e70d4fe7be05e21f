//! Identifiers derived by hashing packed messages.

use serde::{Deserialize, Serialize};

use crate::Buf32;

/// SHA-256 of a packed `RegisterL1Validator` payload, identifying one
/// validator's registration record.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationId(Buf32);

impl_buf_wrapper!(ValidationId, Buf32, 32);

/// SHA-256 of packed conversion data, identifying a subnet-to-L1 conversion.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionId(Buf32);

impl_buf_wrapper!(ConversionId, Buf32, 32);

/// SHA-256 of a packed unsigned Warp message.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarpMessageId(Buf32);

impl_buf_wrapper!(WarpMessageId, Buf32, 32);
