use crate::{util, varint, Decoder, EncodeSize, Encoder, Error, Read, Write};
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, ops::Deref};

/// Raw bytes rendered as lowercase hex in text.
///
/// The wire form is a length-prefixed byte array, identical to `Vec<u8>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexBytes(pub Vec<u8>);

impl From<Vec<u8>> for HexBytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<HexBytes> for Vec<u8> {
    fn from(value: HexBytes) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&util::hex(&self.0))
    }
}

impl Read for HexBytes {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        self.0 = decoder
            .read_byte_array()
            .map_err(|err| err.context("hex bytes"))?;
        Ok(())
    }
}

impl Write for HexBytes {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_byte_array(&self.0);
        Ok(())
    }
}

impl EncodeSize for HexBytes {
    fn encode_size(&self) -> usize {
        varint::size(self.0.len() as u64) + self.0.len()
    }
}

#[cfg(feature = "serde")]
impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&util::hex(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        util::from_hex(&s)
            .map(Self)
            .ok_or_else(|| de::Error::custom(format!("invalid hex string: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_wire() {
        let value = HexBytes(vec![1, 2, 3, 4, 5]);
        let encoded = value.encode().unwrap();
        assert_eq!(&encoded[..], &[0x05, 1, 2, 3, 4, 5]);
        assert_eq!(HexBytes::decode(&encoded).unwrap(), value);
        assert_eq!(&HexBytes::default().encode().unwrap()[..], &[0x00]);
    }

    #[test]
    fn test_truncated() {
        let err = HexBytes::decode(&[0x04, 0xaa]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "hex bytes: byte array: varlen=4, missing 3 bytes"
        );
        assert!(matches!(
            err.root(),
            Error::ByteArrayTooSmall {
                varlen: 4,
                missing: 3
            }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(HexBytes(vec![0xde, 0xad, 0x01]).to_string(), "dead01");
        assert_eq!(HexBytes::default().to_string(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        let value = HexBytes(vec![0xca, 0xfe]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"cafe\"");
        assert_eq!(serde_json::from_str::<HexBytes>("\"CAFE\"").unwrap(), value);
        assert!(serde_json::from_str::<HexBytes>("\"caf\"").is_err());
        assert!(serde_json::from_str::<HexBytes>("\"zz\"").is_err());
        assert!(serde_json::from_str::<HexBytes>("12").is_err());
    }
}
