//! Encode and decode ABI records.
//!
//! # Overview
//!
//! A compact, schema-by-type binary format: the shape of a value is known to both sides from
//! its Rust type, so nothing but the data itself is transmitted. There are no field names, no
//! tags and no optional markers.
//!
//! - Fixed-width integers and floats are little-endian (floats bit-exact).
//! - Booleans are one byte.
//! - Strings, byte arrays and sequences carry an unsigned LEB128 varint length prefix.
//! - Fixed-size arrays carry no prefix.
//! - Records are their fields back to back, in declaration order.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `bool`
//! - Text and bytes: `String`, `bytes::Bytes`
//! - Collections: `Vec<T>`, tuples, and fixed-size arrays like `[u8; N]`
//! - 128-bit values: [Uint128], [Int128], [Float128]
//! - Leaf wrappers with their own wire rules: see [extensions]
//!
//! Records get their implementation from `#[derive(Read, Write, EncodeSize)]`. Any other type
//! can implement [Read], [Write] and [EncodeSize] by hand.
//!
//! # Example (Derived)
//!
//! ```
//! use abi_codec::{Decode, Encode, EncodeSize, Read, Varuint32, Write};
//!
//! #[derive(Debug, Default, PartialEq, Read, Write, EncodeSize)]
//! struct Transfer {
//!     from: String,
//!     amount: u64,
//!     memo: Vec<u8>,
//!     nonce: Varuint32,
//! }
//!
//! let transfer = Transfer {
//!     from: "alice".into(),
//!     amount: 5,
//!     memo: vec![0xca, 0xfe],
//!     nonce: Varuint32(300),
//! };
//! let encoded = transfer.encode().unwrap();
//! assert_eq!(encoded.len(), transfer.encode_size());
//! assert_eq!(Transfer::decode(&encoded).unwrap(), transfer);
//! ```
//!
//! # Example (Manual)
//!
//! ```
//! use abi_codec::{Decoder, Encode, EncodeSize, Encoder, Error, Read, Write};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: u32,
//!     y: u32,
//! }
//!
//! impl Write for Point {
//!     fn write(&self, encoder: &mut Encoder) -> Result<(), Error> {
//!         self.x.write(encoder)?;
//!         self.y.write(encoder)
//!     }
//! }
//!
//! impl Read for Point {
//!     fn read_into(&mut self, decoder: &mut Decoder<'_>) -> Result<(), Error> {
//!         self.x = decoder.read_u32()?;
//!         self.y = decoder.read_u32()?;
//!         Ok(())
//!     }
//! }
//!
//! impl EncodeSize for Point {
//!     fn encode_size(&self) -> usize {
//!         8
//!     }
//! }
//!
//! let mut decoder = Decoder::new(&[1, 0, 0, 0, 2, 0, 0, 0]);
//! let mut point = Point::default();
//! decoder.decode(&mut point).unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! assert_eq!(&point.encode().unwrap()[..], &[1, 0, 0, 0, 2, 0, 0, 0]);
//! ```

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod extensions;
pub mod types;
pub mod util;
pub mod varint;
pub mod wide;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, EncodeSize, Read, Write};
pub use config::Config;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, ParseError};
pub use extensions::*;
pub use wide::{Float128, Int128, Uint128};

// Derive macros share their names with the traits they implement.
pub use abi_codec_macros::{EncodeSize, Read, Write};
