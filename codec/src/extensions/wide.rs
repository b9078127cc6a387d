//! Wire and textual glue for the 128-bit types.
//!
//! Each is 16 raw bytes on the wire and a `"0x"` string of 32 hex digits in text. A JSON `null`
//! deserializes to zero, and leaves the target untouched when deserializing in place.

use crate::{
    wide::{self, Float128, Int128, Uint128},
    Decoder, EncodeSize, Encoder, Error, Read, Write,
};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use std::{fmt, marker::PhantomData, str::FromStr};

impl Read for Uint128 {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = decoder.read_uint128("uint128")?;
        Ok(())
    }
}

impl Write for Uint128 {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_uint128(*self);
        Ok(())
    }
}

impl Read for Int128 {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = decoder.read_int128()?;
        Ok(())
    }
}

impl Write for Int128 {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_int128(*self);
        Ok(())
    }
}

impl Read for Float128 {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = decoder.read_float128()?;
        Ok(())
    }
}

impl Write for Float128 {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_float128(*self);
        Ok(())
    }
}

macro_rules! impl_wide_size {
    ($($name:ty),*) => {
        $(
            impl EncodeSize for $name {
                fn encode_size(&self) -> usize {
                    wide::SIZE
                }
            }
        )*
    };
}

impl_wide_size!(Uint128, Int128, Float128);

/// Visits a `"0x…"` string, or `null` as `None`.
#[cfg(feature = "serde")]
struct WideVisitor<T>(PhantomData<T>);

#[cfg(feature = "serde")]
impl<T> de::Visitor<'_> for WideVisitor<T>
where
    T: FromStr<Err = crate::ParseError>,
{
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 0x-prefixed string of 32 hex digits, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<T>, E> {
        v.parse().map(Some).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<T>, E> {
        Ok(None)
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_wide_serde {
    ($($name:ident),*) => {
        $(
            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = deserializer.deserialize_any(WideVisitor::<$name>(PhantomData))?;
                    Ok(value.unwrap_or_default())
                }

                fn deserialize_in_place<D: Deserializer<'de>>(
                    deserializer: D,
                    place: &mut Self,
                ) -> Result<(), D::Error> {
                    if let Some(value) =
                        deserializer.deserialize_any(WideVisitor::<$name>(PhantomData))?
                    {
                        *place = value;
                    }
                    Ok(())
                }
            }
        )*
    };
}

#[cfg(feature = "serde")]
impl_wide_serde!(Uint128, Int128, Float128);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_wire() {
        let value = Uint128::new(10, 82);
        let encoded = value.encode().unwrap();
        assert_eq!(encoded.len(), 16);
        assert_eq!(encoded[0], 10);
        assert_eq!(encoded[8], 82);
        assert_eq!(Uint128::decode(&encoded).unwrap(), value);

        let value = Int128::from(-1i128);
        let encoded = value.encode().unwrap();
        assert_eq!(&encoded[..], &[0xff; 16]);
        assert_eq!(Int128::decode(&encoded).unwrap(), value);

        let value = Float128::new(7, 3);
        let encoded = value.encode().unwrap();
        assert_eq!(Float128::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_truncated() {
        for (result, kind) in [
            (Uint128::decode(&[0; 15]).map(|_| ()), "uint128"),
            (Int128::decode(&[0; 3]).map(|_| ()), "int128"),
            (Float128::decode(&[]).map(|_| ()), "float128"),
        ] {
            match result {
                Err(Error::BufferTooSmall {
                    kind: k,
                    required: 16,
                    ..
                }) => assert_eq!(k, kind),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        let value = Uint128::new(1, 0);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"0x01000000000000000000000000000000\"");
        assert_eq!(serde_json::from_str::<Uint128>(&json).unwrap(), value);

        let value = Int128::from(-2i128);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"0xfeffffffffffffffffffffffffffffff\"");
        assert_eq!(serde_json::from_str::<Int128>(&json).unwrap(), value);

        let value = Float128::new(0, 0x3fff_0000_0000_0000);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<Float128>(&json).unwrap(), value);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_errors() {
        let err = serde_json::from_str::<Uint128>("\"0102\"").unwrap_err();
        assert!(err.to_string().contains("int128 expects 0x prefix"));
        let err = serde_json::from_str::<Int128>("\"0x0102\"").unwrap_err();
        assert!(err
            .to_string()
            .contains("int128 expects 32 characters after 0x, had 4"));
        assert!(serde_json::from_str::<Float128>("12").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_null() {
        assert_eq!(
            serde_json::from_str::<Uint128>("null").unwrap(),
            Uint128::default()
        );

        let mut value = Int128::new(7, 3);
        let mut deserializer = serde_json::Deserializer::from_str("null");
        Int128::deserialize_in_place(&mut deserializer, &mut value).unwrap();
        assert_eq!(value, Int128::new(7, 3));

        let mut deserializer =
            serde_json::Deserializer::from_str("\"0x0a000000000000005200000000000000\"");
        Int128::deserialize_in_place(&mut deserializer, &mut value).unwrap();
        assert_eq!(value, Int128::new(10, 82));
    }
}
