//! Codec implementations for Rust primitive types.
//!
//! All fixed-size integers and floats are written little-endian, signed integers in two's
//! complement and floats as their raw IEEE-754 bit patterns (so infinities and NaN payloads
//! survive a round trip). Booleans take one byte.
//!
//! Fixed-size arrays `[T; N]` are written as `N` elements back to back with no length prefix,
//! since `N` is known to both sides.

use crate::{Decoder, EncodeSize, Encoder, Error, Read, Write};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                encoder.$write_method(*self);
                Ok(())
            }
        }

        impl Read for $type {
            #[inline]
            fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
                *self = decoder.$read_method()?;
                Ok(())
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self) -> usize {
                std::mem::size_of::<$type>()
            }
        }
    };
}

impl_numeric!(u8, read_u8, write_u8);
impl_numeric!(u16, read_u16, write_u16);
impl_numeric!(u32, read_u32, write_u32);
impl_numeric!(u64, read_u64, write_u64);
impl_numeric!(i8, read_i8, write_i8);
impl_numeric!(i16, read_i16, write_i16);
impl_numeric!(i32, read_i32, write_i32);
impl_numeric!(i64, read_i64, write_i64);
impl_numeric!(f32, read_f32, write_f32);
impl_numeric!(f64, read_f64, write_f64);
impl_numeric!(bool, read_bool, write_bool);

// Constant-size array implementation
impl<T: Write, const N: usize> Write for [T; N] {
    #[inline]
    fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
        for item in self {
            item.write(encoder)?;
        }
        Ok(())
    }
}

impl<T: Read, const N: usize> Read for [T; N] {
    #[inline]
    fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
        decoder.nested(|decoder| {
            for item in self.iter_mut() {
                item.read_into(decoder)?;
            }
            Ok(())
        })
    }
}

impl<T: EncodeSize, const N: usize> EncodeSize for [T; N] {
    #[inline]
    fn encode_size(&self) -> usize {
        self.iter().map(EncodeSize::encode_size).sum()
    }
}
