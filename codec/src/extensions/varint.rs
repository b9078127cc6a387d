//! Integers written as varints regardless of their native width.
//!
//! Reads go through the 64-bit varint decoder and truncate to the native width, so an
//! out-of-range wire value wraps instead of failing.

use crate::{varint, Decoder, EncodeSize, Encoder, Error, Read, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! impl_varint {
    ($(#[$doc:meta])* $name:ident, $native:ty, $wide:ty, $kind:literal, $read:ident, $write:ident, $size:path) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
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
                self.0 = decoder.$read().map_err(|err| err.context($kind))?;
                Ok(())
            }
        }

        impl Write for $name {
            fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                encoder.$write(<$wide>::from(self.0));
                Ok(())
            }
        }

        impl EncodeSize for $name {
            fn encode_size(&self) -> usize {
                $size(<$wide>::from(self.0))
            }
        }
    };
}

impl_varint!(
    /// A signed 16-bit integer written as a zig-zag varint.
    Varint16, i16, i64, "varint16", read_varint16, write_varint, varint::size_signed
);
impl_varint!(
    /// An unsigned 16-bit integer written as a varint.
    Varuint16, u16, u64, "varuint16", read_uvarint16, write_uvarint, varint::size
);
impl_varint!(
    /// A signed 32-bit integer written as a zig-zag varint.
    Varint32, i32, i64, "varint32", read_varint32, write_varint, varint::size_signed
);
impl_varint!(
    /// An unsigned 32-bit integer written as a varint.
    Varuint32, u32, u64, "varuint32", read_uvarint32, write_uvarint, varint::size
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_conformity() {
        assert_eq!(&Varuint32(999).encode().unwrap()[..], &[0xe7, 0x07]);
        assert_eq!(&Varint32(-999).encode().unwrap()[..], &[0xcd, 0x0f]);
        assert_eq!(&Varuint16(0).encode().unwrap()[..], &[0x00]);
        assert_eq!(&Varint16(-1).encode().unwrap()[..], &[0x01]);
        assert_eq!(&Varint16(1).encode().unwrap()[..], &[0x02]);
        assert_eq!(&Varuint16(300).encode().unwrap()[..], &[0xac, 0x02]);
    }

    #[test]
    fn test_roundtrip() {
        for value in [i32::MIN, -1, 0, 1, 63, 64, i32::MAX] {
            let encoded = Varint32(value).encode().unwrap();
            assert_eq!(Varint32::decode(&encoded).unwrap(), Varint32(value));
        }
        for value in [0, 127, 128, u32::MAX] {
            let encoded = Varuint32(value).encode().unwrap();
            assert_eq!(Varuint32::decode(&encoded).unwrap(), Varuint32(value));
        }
        for value in [i16::MIN, 0, i16::MAX] {
            let encoded = Varint16(value).encode().unwrap();
            assert_eq!(Varint16::decode(&encoded).unwrap(), Varint16(value));
        }
        for value in [0, u16::MAX] {
            let encoded = Varuint16(value).encode().unwrap();
            assert_eq!(Varuint16::decode(&encoded).unwrap(), Varuint16(value));
        }
    }

    #[test]
    fn test_truncation() {
        // 65536 does not fit in 16 bits and wraps to zero.
        let mut buf = bytes::BytesMut::new();
        varint::write(65536, &mut buf);
        assert_eq!(Varuint16::decode(&buf).unwrap(), Varuint16(0));

        // 2^32 + 5 wraps to 5.
        let mut buf = bytes::BytesMut::new();
        varint::write((1 << 32) + 5, &mut buf);
        assert_eq!(Varuint32::decode(&buf).unwrap(), Varuint32(5));

        // 40000 exceeds i16::MAX and wraps negative.
        let mut buf = bytes::BytesMut::new();
        varint::write_signed(40000, &mut buf);
        assert_eq!(Varint16::decode(&buf).unwrap(), Varint16(40000i64 as i16));
    }

    #[test]
    fn test_error_context() {
        let err = Varint16::decode(&[]).unwrap_err();
        assert_eq!(err.to_string(), "varint16: varint: invalid buffer size");
        let err = Varuint16::decode(&[0x80]).unwrap_err();
        assert_eq!(err.to_string(), "varuint16: varint: invalid buffer size");
        let err = Varint32::decode(&[]).unwrap_err();
        assert_eq!(err.to_string(), "varint32: varint: invalid buffer size");
        let err = Varuint32::decode(&[0xff]).unwrap_err();
        assert_eq!(err.to_string(), "varuint32: varint: invalid buffer size");
        assert!(matches!(err.root(), Error::VarintBufferTooSmall));
    }

    #[test]
    fn test_encode_size() {
        assert_eq!(Varuint32(0).encode_size(), 1);
        assert_eq!(Varuint32(u32::MAX).encode_size(), 5);
        assert_eq!(Varint32(i32::MIN).encode_size(), 5);
        assert_eq!(Varint16(-64).encode_size(), 1);
        assert_eq!(Varint16(64).encode_size(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        assert_eq!(serde_json::to_string(&Varint32(-5)).unwrap(), "-5");
        assert_eq!(serde_json::from_str::<Varuint16>("7").unwrap(), Varuint16(7));
    }
}
