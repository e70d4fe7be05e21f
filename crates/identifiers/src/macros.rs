/// Generates impls for a newtype wrapping one of the fixed buffers.
///
/// This must be a newtype a la `struct Foo(Buf32);`.
#[macro_export]
macro_rules! impl_buf_wrapper {
    ($wrapper:ident, $name:ident, $len:expr) => {
        impl $wrapper {
            pub const fn new(buf: $name) -> Self {
                Self(buf)
            }

            pub const fn inner(&self) -> &$name {
                &self.0
            }

            pub const fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }

            /// Renders the identifier in cb58.
            pub fn to_cb58(&self) -> String {
                $crate::cb58::encode(self.0.as_bytes())
            }
        }

        impl ::std::convert::From<$name> for $wrapper {
            fn from(value: $name) -> Self {
                Self(value)
            }
        }

        impl ::std::convert::From<[u8; $len]> for $wrapper {
            fn from(value: [u8; $len]) -> Self {
                Self(value.into())
            }
        }

        impl ::std::convert::From<$wrapper> for $name {
            fn from(value: $wrapper) -> Self {
                value.0
            }
        }

        impl ::std::convert::AsRef<[u8; $len]> for $wrapper {
            fn as_ref(&self) -> &[u8; $len] {
                self.0.as_ref()
            }
        }

        impl ::core::fmt::Debug for $wrapper {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::Display for $wrapper {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        // Passthrough to the underlying buffer.
        impl $crate::warp_codec::WireCodec for $wrapper {
            fn encode(
                &self,
                w: &mut $crate::warp_codec::WireWriter,
            ) -> $crate::warp_codec::EncodeResult<()> {
                $crate::warp_codec::WireCodec::encode(&self.0, w)
            }

            fn decode(
                r: &mut $crate::warp_codec::WireReader<'_>,
            ) -> $crate::warp_codec::DecodeResult<Self> {
                <$name as $crate::warp_codec::WireCodec>::decode(r).map(Self)
            }
        }
    };
}

pub(crate) mod internal {
    // Crate-internal impls.

    /// Generates the foundational API for a fixed-size byte buffer type.
    ///
    /// Provides constructors (`new`, `zero`), accessors (`as_slice`,
    /// `as_bytes`, `is_zero`), the `LEN` constant, standard conversion traits
    /// (`AsRef`, `From`, `TryFrom`), and `Default`.
    macro_rules! impl_buf_core {
        ($name:ident, $len:expr) => {
            impl $name {
                pub const LEN: usize = $len;

                pub const fn new(data: [u8; $len]) -> Self {
                    Self(data)
                }

                pub const fn as_slice(&self) -> &[u8] {
                    &self.0
                }

                pub const fn as_bytes(&self) -> &[u8] {
                    self.0.as_slice()
                }

                pub const fn zero() -> Self {
                    Self::new([0; $len])
                }

                pub const fn is_zero(&self) -> bool {
                    let mut i = 0;
                    while i < $len {
                        if self.0[i] != 0 {
                            return false;
                        }
                        i += 1;
                    }
                    true
                }

                /// Copies a slice that must be exactly `LEN` bytes long.
                pub fn try_from_slice(
                    field: &'static str,
                    value: &[u8],
                ) -> ::std::result::Result<Self, $crate::warp_codec::EncodeError> {
                    <[u8; $len]>::try_from(value).map(Self).map_err(|_| {
                        $crate::warp_codec::EncodeError::FieldLength {
                            field,
                            expected: $len,
                            got: value.len(),
                        }
                    })
                }
            }

            impl ::std::convert::AsRef<[u8; $len]> for $name {
                fn as_ref(&self) -> &[u8; $len] {
                    &self.0
                }
            }

            impl ::std::convert::AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.0
                }
            }

            impl ::std::convert::From<[u8; $len]> for $name {
                fn from(data: [u8; $len]) -> Self {
                    Self(data)
                }
            }

            impl ::std::convert::From<$name> for [u8; $len] {
                fn from(buf: $name) -> Self {
                    buf.0
                }
            }

            impl<'a> ::std::convert::TryFrom<&'a [u8]> for $name {
                type Error = &'a [u8];

                fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                    <[u8; $len]>::try_from(value).map(Self).map_err(|_| value)
                }
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self([0; $len])
                }
            }
        };
    }

    /// Generates `Debug` (full hex) and `Display` (truncated hex) formatting.
    macro_rules! impl_buf_fmt {
        ($name:ident, $len:expr) => {
            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    // twice as large, required by the hex::encode_to_slice.
                    let mut buf = [0; $len * 2];
                    ::hex::encode_to_slice(self.0, &mut buf).map_err(|_| ::std::fmt::Error)?;
                    f.write_str(::core::str::from_utf8(&buf).map_err(|_| ::std::fmt::Error)?)
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    // fmt only first and last bits of data.
                    f.write_str(&::hex::encode(&self.0[..3]))?;
                    f.write_str("..")?;
                    f.write_str(&::hex::encode(&self.0[$len - 3..]))
                }
            }
        };
    }

    /// Generates the `WireCodec` impl, which writes the raw bytes.
    macro_rules! impl_buf_codec {
        ($name:ident, $len:expr) => {
            impl $crate::warp_codec::WireCodec for $name {
                fn encode(
                    &self,
                    w: &mut $crate::warp_codec::WireWriter,
                ) -> $crate::warp_codec::EncodeResult<()> {
                    w.put_raw(&self.0);
                    Ok(())
                }

                fn decode(
                    r: &mut $crate::warp_codec::WireReader<'_>,
                ) -> $crate::warp_codec::DecodeResult<Self> {
                    r.read_arr::<$len>().map(Self)
                }
            }
        };
    }

    macro_rules! impl_buf_serde {
        ($name:ident, $len:expr) => {
            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    // Convert the inner array to a hex string (with 0x prefix)
                    let hex_str = format!("0x{}", ::hex::encode(&self.0));
                    serializer.serialize_str(&hex_str)
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    // Scoped to the function to avoid name conflicts between
                    // macro invocations.
                    struct BufVisitor;

                    impl<'de> ::serde::de::Visitor<'de> for BufVisitor {
                        type Value = $name;

                        fn expecting(
                            &self,
                            formatter: &mut ::std::fmt::Formatter<'_>,
                        ) -> ::std::fmt::Result {
                            write!(
                                formatter,
                                "a hex string with an optional 0x prefix representing {} bytes",
                                $len
                            )
                        }

                        fn visit_str<E>(self, v: &str) -> Result<$name, E>
                        where
                            E: ::serde::de::Error,
                        {
                            let hex_str = v
                                .strip_prefix("0x")
                                .or_else(|| v.strip_prefix("0X"))
                                .unwrap_or(v);

                            let bytes = ::hex::decode(hex_str).map_err(E::custom)?;

                            <[u8; $len]>::try_from(bytes.as_slice())
                                .map($name)
                                .map_err(|_| {
                                    E::custom(format!(
                                        "expected {} bytes, got {}",
                                        $len,
                                        bytes.len()
                                    ))
                                })
                        }

                        fn visit_bytes<E>(self, v: &[u8]) -> Result<$name, E>
                        where
                            E: ::serde::de::Error,
                        {
                            if let Ok(array) = <[u8; $len]>::try_from(v) {
                                Ok($name(array))
                            } else {
                                // Try to interpret the bytes as a UTF-8 encoded hex string.
                                let s = ::std::str::from_utf8(v).map_err(E::custom)?;
                                self.visit_str(s)
                            }
                        }

                        fn visit_seq<A>(self, mut seq: A) -> Result<$name, A::Error>
                        where
                            A: ::serde::de::SeqAccess<'de>,
                        {
                            let mut array = [0u8; $len];
                            for (i, slot) in array.iter_mut().enumerate() {
                                *slot = seq
                                    .next_element::<u8>()?
                                    .ok_or_else(|| ::serde::de::Error::invalid_length(i, &self))?;
                            }
                            if seq.next_element::<u8>()?.is_some() {
                                return Err(::serde::de::Error::custom(format!(
                                    "expected a sequence of exactly {} bytes, but found extra elements",
                                    $len
                                )));
                            }
                            Ok($name(array))
                        }
                    }

                    if deserializer.is_human_readable() {
                        deserializer.deserialize_any(BufVisitor)
                    } else {
                        deserializer.deserialize_str(BufVisitor)
                    }
                }
            }
        };
    }

    pub(crate) use impl_buf_codec;
    pub(crate) use impl_buf_core;
    pub(crate) use impl_buf_fmt;
    pub(crate) use impl_buf_serde;
}
