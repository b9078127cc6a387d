//! Implementations of Codec for variable-length sequences
//!
//! A sequence is written as an unsigned varint element count followed by the elements back to
//! back.

use crate::{varint, Decoder, EncodeSize, Encoder, Error, Read, Write};

impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        self.as_slice().write(encoder)
    }
}

impl<T: Write> Write for [T] {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        encoder.write_uvarint(self.len() as u64);
        for item in self {
            item.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        self.as_slice().encode_size()
    }
}

impl<T: EncodeSize> EncodeSize for [T] {
    #[inline]
    fn encode_size(&self) -> usize {
        varint::size(self.len() as u64) + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read + Default> Read for Vec<T> {
    #[inline]
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        let len = decoder.read_length()?;
        decoder.nested(|decoder| {
            // Elements may encode to zero bytes, so the count is not checked against the
            // remaining input; only the up-front allocation is capped.
            self.clear();
            self.reserve(len.min(decoder.remaining()));
            for _ in 0..len {
                let mut item = T::default();
                item.read_into(decoder)?;
                self.push(item);
            }
            Ok(())
        })
    }
}
