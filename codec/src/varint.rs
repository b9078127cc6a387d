//! Variable-length integer encoding and decoding
//!
//! Unsigned values use LEB128: each byte carries 7 bits of the value (least significant group
//! first) and a "continuation" bit in its most significant position that is set when more bytes
//! follow. Signed values are first mapped through ZigZag so that small negative numbers stay
//! short.
//!
//! The wire format only ever decodes varints as 64-bit values. Narrower integers are encoded
//! from their widened value and the reader truncates after decoding.

use crate::Error;
use bytes::{Buf, BufMut};

const DATA_BITS_PER_BYTE: u32 = 7;
const DATA_BITS_MASK: u8 = 0x7F;
const CONTINUATION_BIT_MASK: u8 = 0x80;

/// Longest valid encoding of a 64-bit value.
pub const MAX_LEN: usize = 10;

/// Maps a signed integer onto an unsigned one, interleaving positive and negative values:
/// `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...`
#[inline]
pub fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Reverses [zigzag].
#[inline]
pub fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encodes an unsigned integer as a varint.
pub fn write(value: u64, buf: &mut impl BufMut) {
    if value < CONTINUATION_BIT_MASK as u64 {
        // Fast path for small values (common case for lengths).
        buf.put_u8(value as u8);
        return;
    }

    let mut val = value;
    while val >= CONTINUATION_BIT_MASK as u64 {
        buf.put_u8((val as u8) | CONTINUATION_BIT_MASK);
        val >>= DATA_BITS_PER_BYTE;
    }
    buf.put_u8(val as u8);
}

/// Decodes an unsigned integer from a varint.
///
/// Fails with [Error::VarintBufferTooSmall] when the buffer ends before the final byte, and
/// with [Error::InvalidVarint] when the value does not fit in 64 bits.
pub fn read(buf: &mut impl Buf) -> Result<u64, Error> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        if !buf.has_remaining() {
            return Err(Error::VarintBufferTooSmall);
        }
        let byte = buf.get_u8();

        // The tenth byte holds only the single remaining bit of a 64-bit value, and must not
        // continue.
        if shift == 63 && byte > 1 {
            return Err(Error::InvalidVarint);
        }

        result |= u64::from(byte & DATA_BITS_MASK) << shift;

        if byte & CONTINUATION_BIT_MASK == 0 {
            return Ok(result);
        }

        shift += DATA_BITS_PER_BYTE;
    }
}

/// Calculates the number of bytes needed to encode an unsigned integer as a varint.
pub fn size(value: u64) -> usize {
    let data_bits = u64::BITS - value.leading_zeros();
    usize::max(1, data_bits.div_ceil(DATA_BITS_PER_BYTE) as usize)
}

/// Encodes a signed integer as a varint using ZigZag encoding.
pub fn write_signed(value: i64, buf: &mut impl BufMut) {
    write(zigzag(value), buf);
}

/// Decodes a signed integer from ZigZag encoding.
pub fn read_signed(buf: &mut impl Buf) -> Result<i64, Error> {
    Ok(unzigzag(read(buf)?))
}

/// Calculates the number of bytes needed to encode a signed integer as a varint.
pub fn size_signed(value: i64) -> usize {
    size(zigzag(value))
}
