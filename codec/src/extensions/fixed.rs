//! 64-bit values whose textual form survives transports that only carry doubles.
//!
//! On the wire each is 8 little-endian bytes. In text, integers with a magnitude above
//! `0xffffffff` are written as quoted decimal strings; parsing accepts a number or a string for
//! every type.

use crate::{Decoder, EncodeSize, Encoder, Error, Read, Write};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use std::fmt;

/// Largest magnitude written as a bare number in text.
pub const MAX_TEXT_MAGNITUDE: u64 = 0xffff_ffff;

macro_rules! impl_fixed {
    ($(#[$doc:meta])* $name:ident, $native:ty, $read:ident, $write:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        pub struct $name(pub $native);

        impl From<$native> for $name {
            fn from(value: $native) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $native {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Read for $name {
            fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
                self.0 = decoder.$read()?;
                Ok(())
            }
        }

        impl Write for $name {
            fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                encoder.$write(self.0);
                Ok(())
            }
        }

        impl EncodeSize for $name {
            fn encode_size(&self) -> usize {
                std::mem::size_of::<$native>()
            }
        }
    };
}

impl_fixed!(
    /// A signed 64-bit integer, quoted in text beyond `±0xffffffff`.
    Int64, i64, read_i64, write_i64
);
impl_fixed!(
    /// An unsigned 64-bit integer, quoted in text beyond `0xffffffff`.
    Uint64, u64, read_u64, write_u64
);
impl_fixed!(
    /// A double whose textual form may also be a quoted number.
    JsonFloat64, f64, read_f64, write_f64
);

impl Eq for Int64 {}
impl Eq for Uint64 {}

impl std::hash::Hash for Int64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl std::hash::Hash for Uint64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(feature = "serde")]
impl Serialize for Int64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.unsigned_abs() > MAX_TEXT_MAGNITUDE {
            serializer.collect_str(&self.0)
        } else {
            serializer.serialize_i64(self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uint64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 > MAX_TEXT_MAGNITUDE {
            serializer.collect_str(&self.0)
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for JsonFloat64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Int64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Int64Visitor;

        impl de::Visitor<'_> for Int64Visitor {
            type Value = Int64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a signed 64-bit integer or a decimal string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Int64, E> {
                Ok(Int64(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Int64, E> {
                i64::try_from(v)
                    .map(Int64)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Int64, E> {
                v.parse().map(Int64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(Int64Visitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uint64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Uint64Visitor;

        impl de::Visitor<'_> for Uint64Visitor {
            type Value = Uint64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an unsigned 64-bit integer or a decimal string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uint64, E> {
                Ok(Uint64(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uint64, E> {
                u64::try_from(v)
                    .map(Uint64)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Uint64, E> {
                v.parse().map(Uint64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(Uint64Visitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JsonFloat64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct JsonFloat64Visitor;

        impl de::Visitor<'_> for JsonFloat64Visitor {
            type Value = JsonFloat64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonFloat64, E> {
                Ok(JsonFloat64(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonFloat64, E> {
                Ok(JsonFloat64(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonFloat64, E> {
                Ok(JsonFloat64(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonFloat64, E> {
                v.parse().map(JsonFloat64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(JsonFloat64Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_wire() {
        let encoded = Int64(-23).encode().unwrap();
        assert_eq!(&encoded[..], &[0xe9, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(Int64::decode(&encoded).unwrap(), Int64(-23));

        let encoded = Uint64(23).encode().unwrap();
        assert_eq!(&encoded[..], &[0x17, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Uint64::decode(&encoded).unwrap(), Uint64(23));

        let encoded = JsonFloat64(2.75).encode().unwrap();
        assert_eq!(&encoded[..], &2.75f64.to_le_bytes());
        assert_eq!(JsonFloat64::decode(&encoded).unwrap(), JsonFloat64(2.75));
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(
            Int64::decode(&[0x01; 7]),
            Err(Error::BufferTooSmall {
                kind: "int64",
                required: 8,
                available: 7
            })
        ));
        assert!(matches!(
            JsonFloat64::decode(&[]),
            Err(Error::BufferTooSmall {
                kind: "float64",
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_quoting() {
        assert_eq!(serde_json::to_string(&Int64(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Int64(-0xffff_ffff)).unwrap(), "-4294967295");
        assert_eq!(
            serde_json::to_string(&Int64(-0x1_0000_0000)).unwrap(),
            "\"-4294967296\""
        );
        assert_eq!(
            serde_json::to_string(&Int64(i64::MIN)).unwrap(),
            "\"-9223372036854775808\""
        );
        assert_eq!(serde_json::to_string(&Uint64(0xffff_ffff)).unwrap(), "4294967295");
        assert_eq!(
            serde_json::to_string(&Uint64(u64::MAX)).unwrap(),
            "\"18446744073709551615\""
        );
        assert_eq!(serde_json::to_string(&JsonFloat64(1.5)).unwrap(), "1.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_parsing() {
        assert_eq!(serde_json::from_str::<Int64>("-7").unwrap(), Int64(-7));
        assert_eq!(serde_json::from_str::<Int64>("\"-7\"").unwrap(), Int64(-7));
        assert!(serde_json::from_str::<Int64>("\"x\"").is_err());
        assert!(serde_json::from_str::<Int64>("18446744073709551615").is_err());

        assert_eq!(
            serde_json::from_str::<Uint64>("\"18446744073709551615\"").unwrap(),
            Uint64(u64::MAX)
        );
        assert_eq!(serde_json::from_str::<Uint64>("9").unwrap(), Uint64(9));
        assert!(serde_json::from_str::<Uint64>("-1").is_err());

        assert_eq!(
            serde_json::from_str::<JsonFloat64>("\"2.5\"").unwrap(),
            JsonFloat64(2.5)
        );
        assert_eq!(serde_json::from_str::<JsonFloat64>("3").unwrap(), JsonFloat64(3.0));
        assert!(serde_json::from_str::<JsonFloat64>("\"NaN\"").unwrap().0.is_nan());
        assert!(serde_json::from_str::<JsonFloat64>("\"abc\"").is_err());
    }
}
