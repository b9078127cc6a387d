//! Growable output buffer.

use crate::{
    varint,
    wide::{Float128, Int128, Uint128},
    Error, Write,
};
use bytes::{BufMut, Bytes, BytesMut};
use std::any::type_name;
use tracing::{debug, trace};

/// Appends wire values to a growable buffer.
///
/// Every write is a pure append whose length matches what the corresponding [crate::Decoder]
/// read consumes. Length prefixes are always known before their payload, so nothing is ever
/// patched after the fact.
///
/// # Examples
///
/// ```
/// use abi_codec::Encoder;
///
/// let mut encoder = Encoder::new();
/// encoder.write_u16(1);
/// encoder.write_string("abc");
/// assert_eq!(encoder.as_slice(), &[0x01, 0x00, 0x03, 0x61, 0x62, 0x63]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    buf: BytesMut,
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty encoder with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the encoder, returning the written bytes.
    pub fn into_inner(self) -> BytesMut {
        self.buf
    }

    /// Consumes the encoder, returning the written bytes as an immutable buffer.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Encodes `value`, appending its wire form.
    pub fn encode<T: Write + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        trace!(ty = type_name::<T>(), offset = self.buf.len(), "encoding");
        let result = value.write(self);
        if let Err(err) = &result {
            debug!(ty = type_name::<T>(), offset = self.buf.len(), %err, "encode failed");
        }
        result
    }

    pub fn write_byte(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Writes the exact bit pattern of `value`.
    pub fn write_f32(&mut self, value: f32) {
        self.buf.put_u32_le(value.to_bits());
    }

    /// Writes the exact bit pattern of `value`.
    pub fn write_f64(&mut self, value: f64) {
        self.buf.put_u64_le(value.to_bits());
    }

    /// Writes `0x01` for `true` and `0x00` for `false`.
    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(u8::from(value));
    }

    pub fn write_uvarint(&mut self, value: u64) {
        varint::write(value, &mut self.buf);
    }

    pub fn write_varint(&mut self, value: i64) {
        varint::write_signed(value, &mut self.buf);
    }

    /// Appends bytes with no length prefix.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Writes a length prefix followed by the bytes.
    pub fn write_byte_array(&mut self, bytes: &[u8]) {
        self.write_uvarint(bytes.len() as u64);
        self.write_raw(bytes);
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_byte_array(value.as_bytes());
    }

    pub fn write_uint128(&mut self, value: Uint128) {
        self.buf.put_u64_le(value.lo);
        self.buf.put_u64_le(value.hi);
    }

    pub fn write_int128(&mut self, value: Int128) {
        self.write_uint128(Uint128::new(value.lo, value.hi));
    }

    pub fn write_float128(&mut self, value: Float128) {
        self.write_uint128(Uint128::new(value.lo, value.hi));
    }
}
