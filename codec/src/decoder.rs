//! Cursor over an immutable input buffer.

use crate::{
    util::at_least,
    varint,
    wide::{self, Float128, Int128, Uint128},
    Config, Error, Read,
};
use bytes::Buf;
use std::any::type_name;
use tracing::{debug, trace};

/// Reads wire values from a byte slice, strictly left to right.
///
/// Every read checks the remaining length before touching the buffer and advances the cursor by
/// exactly the bytes it consumed. After a failed read the cursor position is unspecified and the
/// decoder should be discarded.
///
/// # Examples
///
/// ```
/// use abi_codec::Decoder;
///
/// let mut decoder = Decoder::new(&[0x01, 0x00, 0x03, 0x61, 0x62, 0x63]);
/// assert_eq!(decoder.read_u16().unwrap(), 1);
/// assert_eq!(decoder.read_string().unwrap(), "abc");
/// assert_eq!(decoder.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    offset: usize,
    config: Config,
    depth: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `data` with the default [Config].
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, Config::default())
    }

    /// Creates a decoder over `data` that enforces `config`.
    pub fn with_config(data: &'a [u8], config: Config) -> Self {
        Self {
            data,
            offset: 0,
            config,
            depth: 0,
        }
    }

    /// Returns the limits enforced by this decoder.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Decodes into `target`, overwriting it with the next value on the wire.
    pub fn decode<T: Read + ?Sized>(&mut self, target: &mut T) -> Result<(), Error> {
        trace!(
            ty = type_name::<T>(),
            offset = self.offset,
            remaining = self.remaining(),
            "decoding"
        );
        let result = target.read_into(self);
        if let Err(err) = &result {
            debug!(ty = type_name::<T>(), offset = self.offset, %err, "decode failed");
        }
        result
    }

    /// Decodes the next value into a fresh `T::default()`.
    pub fn read<T: Read + Default>(&mut self) -> Result<T, Error> {
        let mut value = T::default();
        self.decode(&mut value)?;
        Ok(value)
    }

    /// Runs `f` one nesting level deeper, failing once [Config::max_depth] is exceeded.
    ///
    /// Composite types wrap the decoding of their parts in this call.
    pub fn nested<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, Error>,
    ) -> Result<R, Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::DepthExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Consumes `len` bytes, returning them without copying.
    fn take(&mut self, kind: &'static str, len: usize) -> Result<&'a [u8], Error> {
        at_least(self, kind, len)?;
        let out = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(out)
    }

    pub fn read_byte(&mut self) -> Result<u8, Error> {
        at_least(self, "byte", 1)?;
        Ok(self.get_u8())
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        at_least(self, "uint8", 1)?;
        Ok(self.get_u8())
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        at_least(self, "int8", 1)?;
        Ok(self.get_i8())
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        at_least(self, "uint16", 2)?;
        Ok(self.get_u16_le())
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        at_least(self, "int16", 2)?;
        Ok(self.get_i16_le())
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        at_least(self, "uint32", 4)?;
        Ok(self.get_u32_le())
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        at_least(self, "int32", 4)?;
        Ok(self.get_i32_le())
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        at_least(self, "uint64", 8)?;
        Ok(self.get_u64_le())
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        at_least(self, "int64", 8)?;
        Ok(self.get_i64_le())
    }

    /// Reads an IEEE-754 single, preserving the exact bit pattern (NaN payloads included).
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        at_least(self, "float32", 4)?;
        Ok(f32::from_bits(self.get_u32_le()))
    }

    /// Reads an IEEE-754 double, preserving the exact bit pattern (NaN payloads included).
    pub fn read_f64(&mut self) -> Result<f64, Error> {
        at_least(self, "float64", 8)?;
        Ok(f64::from_bits(self.get_u64_le()))
    }

    /// Reads a boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        at_least(self, "bool", 1)?;
        Ok(self.get_u8() != 0)
    }

    pub fn read_uvarint64(&mut self) -> Result<u64, Error> {
        varint::read(self)
    }

    /// Reads an unsigned varint and truncates it to 32 bits.
    pub fn read_uvarint32(&mut self) -> Result<u32, Error> {
        Ok(self.read_uvarint64()? as u32)
    }

    /// Reads an unsigned varint and truncates it to 16 bits.
    pub fn read_uvarint16(&mut self) -> Result<u16, Error> {
        Ok(self.read_uvarint64()? as u16)
    }

    pub fn read_varint64(&mut self) -> Result<i64, Error> {
        varint::read_signed(self)
    }

    /// Reads a signed varint and truncates it to 32 bits.
    pub fn read_varint32(&mut self) -> Result<i32, Error> {
        Ok(self.read_varint64()? as i32)
    }

    /// Reads a signed varint and truncates it to 16 bits.
    pub fn read_varint16(&mut self) -> Result<i16, Error> {
        Ok(self.read_varint64()? as i16)
    }

    /// Reads a length prefix, enforcing [Config::max_len].
    pub fn read_length(&mut self) -> Result<usize, Error> {
        let raw = self.read_uvarint64()?;
        let len = usize::try_from(raw).unwrap_or(usize::MAX);
        if len > self.config.max_len {
            return Err(Error::LengthExceeded(len, self.config.max_len));
        }
        Ok(len)
    }

    /// Reads a length-prefixed byte array without copying it.
    pub fn read_byte_slice(&mut self) -> Result<&'a [u8], Error> {
        let len = self.read_length()?;
        let available = self.remaining();
        if available < len {
            return Err(Error::ByteArrayTooSmall {
                varlen: len,
                missing: len - available,
            });
        }
        self.take("byte array", len)
    }

    /// Reads a length-prefixed byte array.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, Error> {
        Ok(self.read_byte_slice()?.to_vec())
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// Malformed UTF-8 fails with [Error::InvalidUtf8]; use [Decoder::read_byte_array] to keep
    /// the raw bytes, or [Decoder::read_safe_string] to repair them.
    pub fn read_string(&mut self) -> Result<String, Error> {
        Ok(String::from_utf8(self.read_byte_array()?)?)
    }

    /// Reads a length-prefixed string, replacing malformed UTF-8 sequences with U+FFFD.
    pub fn read_safe_string(&mut self) -> Result<String, Error> {
        let bytes = self.read_byte_slice()?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a 128-bit value, labelling a shortfall with `kind`.
    pub fn read_uint128(&mut self, kind: &'static str) -> Result<Uint128, Error> {
        at_least(self, kind, wide::SIZE)?;
        let lo = self.get_u64_le();
        let hi = self.get_u64_le();
        Ok(Uint128::new(lo, hi))
    }

    pub fn read_int128(&mut self) -> Result<Int128, Error> {
        self.read_uint128("int128").map(Int128::from)
    }

    pub fn read_float128(&mut self) -> Result<Float128, Error> {
        self.read_uint128("float128").map(Float128::from)
    }
}

impl Buf for Decoder<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn chunk(&self) -> &[u8] {
        &self.data[self.offset..]
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.data.len() - self.offset,
            "cannot advance past the end of the buffer"
        );
        self.offset += cnt;
    }
}
