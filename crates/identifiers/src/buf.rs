//! Fixed-width byte buffers.

use crate::macros::internal::{impl_buf_codec, impl_buf_core, impl_buf_fmt, impl_buf_serde};

/// 20-byte buffer, used for account addresses.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Buf20(pub [u8; 20]);

/// 32-byte buffer, used for chain, subnet and message-derived identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Buf32(pub [u8; 32]);

/// 48-byte buffer, the width of a compressed BLS public key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Buf48(pub [u8; 48]);

macro_rules! impl_buf_all {
    ($name:ident, $len:expr) => {
        impl_buf_core!($name, $len);
        impl_buf_fmt!($name, $len);
        impl_buf_codec!($name, $len);
        impl_buf_serde!($name, $len);
    };
}

impl_buf_all!(Buf20, 20);
impl_buf_all!(Buf32, 32);
impl_buf_all!(Buf48, 48);
