//! Implementations of Codec for text and byte types.
//!
//! Both are written as an unsigned varint byte count followed by the raw bytes. An empty value
//! is a single zero byte.

use crate::{varint, Decoder, EncodeSize, Encoder, Error, Read, Write};
use bytes::Bytes;

impl Write for str {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_string(self);
        Ok(())
    }
}

impl EncodeSize for str {
    #[inline]
    fn encode_size(&self) -> usize {
        varint::size(self.len() as u64) + self.len()
    }
}

impl Write for String {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        self.as_str().write(encoder)
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        self.as_str().encode_size()
    }
}

impl Read for String {
    #[inline]
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = decoder.read_string()?;
        Ok(())
    }
}

impl Write for Bytes {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_byte_array(self);
        Ok(())
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        varint::size(self.len() as u64) + self.len()
    }
}

impl Read for Bytes {
    #[inline]
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        *self = Bytes::copy_from_slice(decoder.read_byte_slice()?);
        Ok(())
    }
}
