//! Implementations of Codec for tuples
//!
//! A tuple is an anonymous record: its elements are written back to back in order.

use crate::{Decoder, EncodeSize, Encoder, Error, Read, Write};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: EncodeSize ),*> EncodeSize for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(&self) -> usize {
                    0 $( + self.$index.encode_size() )*
                }
            }

            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
                    $( self.$index.write(encoder)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
                    decoder.nested(|decoder| {
                        $( self.$index.read_into(decoder)?; )*
                        Ok(())
                    })
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

#[cfg(test)]
mod tests {
    use crate::{Decode, Encode, EncodeSize};

    #[test]
    fn test_tuple() {
        let tuple_values = [(1u16, String::new()), (1u16, "abc".to_string())];
        for value in tuple_values {
            let encoded = value.encode().unwrap();
            assert_eq!(encoded.len(), value.encode_size());
            let decoded = <(u16, String)>::decode(&encoded).unwrap();
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_tuple_layout() {
        let encoded = (0x0102u16, true, vec![7u8]).encode().unwrap();
        assert_eq!(&encoded[..], &[0x02, 0x01, 0x01, 0x01, 0x07]);
    }
}
