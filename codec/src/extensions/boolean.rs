use crate::{Decoder, EncodeSize, Encoder, Error, Read, Write};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use std::fmt;

/// A boolean whose textual form also accepts a number (non-zero is `true`).
///
/// On the wire it is identical to `bool`: one byte, any non-zero value decoding as `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bool(pub bool);

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.0
    }
}

impl Read for Bool {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        self.0 = decoder.read_bool()?;
        Ok(())
    }
}

impl Write for Bool {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_bool(self.0);
        Ok(())
    }
}

impl EncodeSize for Bool {
    fn encode_size(&self) -> usize {
        1
    }
}

#[cfg(feature = "serde")]
impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BoolVisitor;

        impl de::Visitor<'_> for BoolVisitor {
            type Value = Bool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or an integer")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Bool, E> {
                Ok(Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Bool, E> {
                Ok(Bool(v != 0))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Bool, E> {
                Ok(Bool(v != 0))
            }
        }

        deserializer.deserialize_any(BoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_wire() {
        assert_eq!(&Bool(true).encode().unwrap()[..], &[0x01]);
        assert_eq!(&Bool(false).encode().unwrap()[..], &[0x00]);
        assert_eq!(Bool::decode(&[0x01]).unwrap(), Bool(true));
        assert_eq!(Bool::decode(&[0x00]).unwrap(), Bool(false));
        assert_eq!(Bool::decode(&[0x02]).unwrap(), Bool(true));
        assert!(matches!(
            Bool::decode(&[]),
            Err(Error::BufferTooSmall { kind: "bool", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        assert_eq!(serde_json::to_string(&Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::from_str::<Bool>("true").unwrap(), Bool(true));
        assert_eq!(serde_json::from_str::<Bool>("false").unwrap(), Bool(false));
        assert_eq!(serde_json::from_str::<Bool>("1").unwrap(), Bool(true));
        assert_eq!(serde_json::from_str::<Bool>("0").unwrap(), Bool(false));
        assert_eq!(serde_json::from_str::<Bool>("-3").unwrap(), Bool(true));
        assert!(serde_json::from_str::<Bool>("\"true\"").is_err());
    }
}
