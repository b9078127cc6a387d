//! Time values have no wire rule.
//!
//! A duration or timestamp may appear in an in-memory record, but the format defines no
//! encoding for it. Reading or writing one fails with [Error::UnsupportedType] naming the type,
//! which aborts the enclosing record after the fields before it were already processed.

use crate::{Decoder, EncodeSize, Encoder, Error, Read, Write};
use std::{
    any::type_name,
    time::{Duration, Instant, SystemTime},
};

macro_rules! impl_unsupported {
    ($type:ty) => {
        impl Read for $type {
            fn read_into(&mut self, _: &mut Decoder<'_>) -> Result<(), Error> {
                Err(Error::UnsupportedType {
                    op: "decode",
                    name: type_name::<$type>(),
                })
            }
        }

        impl Write for $type {
            fn write(&self, _: &mut Encoder) -> Result<(), Error> {
                Err(Error::UnsupportedType {
                    op: "encode",
                    name: type_name::<$type>(),
                })
            }
        }

        impl EncodeSize for $type {
            fn encode_size(&self) -> usize {
                0
            }
        }
    };
}

impl_unsupported!(Duration);
impl_unsupported!(Instant);
impl_unsupported!(SystemTime);
