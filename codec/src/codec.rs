//! Core codec traits and implementations

use crate::{Decoder, Encoder, Error};
use bytes::BytesMut;

/// Trait for types that can be read (decoded) from a [Decoder].
///
/// Decoding happens in place: the value is overwritten with what the wire holds. Composite types
/// decode their parts one after another, so when a later part fails the earlier parts keep what
/// was already decoded into them.
pub trait Read {
    /// Reads a value from the decoder into `self`, consuming exactly its wire size.
    ///
    /// Returns an error if decoding fails (e.g., not enough bytes, invalid data).
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error>;
}

/// Trait for types that can be written (encoded) to an [Encoder].
pub trait Write {
    /// Encodes this value by appending to the encoder.
    ///
    /// Returns an error if the value has no wire representation.
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error>;
}

/// Trait for types that know their encoded length ahead of time.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types that can be encoded to a standalone buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> Result<BytesMut, Error> {
        let len = self.encode_size();
        let mut encoder = Encoder::with_capacity(len);
        encoder.encode(self)?;
        assert_eq!(encoder.len(), len, "write() did not write expected bytes");
        Ok(encoder.into_inner())
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize + ?Sized> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read + Default {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let mut decoder = Decoder::new(buf);
        let value = decoder.read::<Self>()?;

        // Check that the buffer is fully consumed.
        let remaining = decoder.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(value)
    }
}

// Automatically implement `Decode` for types that implement `Read` and `Default`.
impl<T: Read + Default> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and `Decode`.
impl<T: Encode + Decode> Codec for T {}
