use crate::{varint, Decoder, EncodeSize, Encoder, Error, Read, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};

/// A string that tolerates malformed UTF-8 on the wire.
///
/// The wire form matches `String`, but decoding replaces invalid sequences with U+FFFD instead of
/// failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SafeString(pub String);

impl From<String> for SafeString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SafeString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<SafeString> for String {
    fn from(value: SafeString) -> Self {
        value.0
    }
}

impl Deref for SafeString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Read for SafeString {
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        self.0 = decoder
            .read_safe_string()
            .map_err(|err| err.context("safe string"))?;
        Ok(())
    }
}

impl Write for SafeString {
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_string(&self.0);
        Ok(())
    }
}

impl EncodeSize for SafeString {
    fn encode_size(&self) -> usize {
        varint::size(self.0.len() as u64) + self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_wire() {
        let value = SafeString::from("abc");
        let encoded = value.encode().unwrap();
        assert_eq!(&encoded[..], &[0x03, 0x61, 0x62, 0x63]);
        assert_eq!(SafeString::decode(&encoded).unwrap(), value);
        assert_eq!(encoded, "abc".to_string().encode().unwrap());
    }

    #[test]
    fn test_invalid_utf8() {
        let buf = [0x04, 0x61, 0xff, 0xfe, 0x62];
        assert!(matches!(String::decode(&buf), Err(Error::InvalidUtf8(_))));
        assert_eq!(
            SafeString::decode(&buf).unwrap(),
            SafeString::from("a\u{fffd}\u{fffd}b")
        );
    }

    #[test]
    fn test_truncated() {
        let err = SafeString::decode(&[0x05, 0x61]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "safe string: byte array: varlen=5, missing 4 bytes"
        );
        let err = SafeString::decode(&[]).unwrap_err();
        assert_eq!(err.to_string(), "safe string: varint: invalid buffer size");
    }
}
