//! 128-bit values stored as two 64-bit words.
//!
//! On the wire a 128-bit value is 16 raw bytes: the `lo` word then the `hi` word, each
//! little-endian. That is exactly the little-endian encoding of `(hi << 64) | lo`, so the native
//! `u128`/`i128` types back the arithmetic views.
//!
//! The textual form is `"0x"` followed by 32 lowercase hex digits rendered in memory order (the
//! 8 `lo` bytes little-endian, then the 8 `hi` bytes little-endian). It is not the numeric
//! magnitude order: `Uint128::from(1)` renders as `0x0100…00`.

use crate::{error::ParseError, util};
use std::{fmt, str::FromStr};

/// Number of bytes of a 128-bit value on the wire.
pub const SIZE: usize = 16;

macro_rules! impl_words {
    ($name:ident) => {
        impl $name {
            /// Creates a value from its two words.
            pub const fn new(lo: u64, hi: u64) -> Self {
                Self { lo, hi }
            }

            /// Returns the wire bytes of the value.
            pub fn to_le_bytes(self) -> [u8; SIZE] {
                let mut out = [0u8; SIZE];
                out[..8].copy_from_slice(&self.lo.to_le_bytes());
                out[8..].copy_from_slice(&self.hi.to_le_bytes());
                out
            }

            /// Creates a value from its wire bytes.
            pub fn from_le_bytes(bytes: [u8; SIZE]) -> Self {
                let (lo, hi) = bytes.split_at(8);
                let mut word = [0u8; 8];
                word.copy_from_slice(lo);
                let lo = u64::from_le_bytes(word);
                word.copy_from_slice(hi);
                let hi = u64::from_le_bytes(word);
                Self { lo, hi }
            }

            /// Returns the raw 128-bit pattern, `hi` in the upper half.
            pub const fn bits(self) -> u128 {
                ((self.hi as u128) << 64) | self.lo as u128
            }

            /// Creates a value from a raw 128-bit pattern.
            pub const fn from_bits(bits: u128) -> Self {
                Self {
                    lo: bits as u64,
                    hi: (bits >> 64) as u64,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", util::hex(&self.to_le_bytes()))
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse(s).map(Self::from_le_bytes)
            }
        }
    };
}

fn parse(s: &str) -> Result<[u8; SIZE], ParseError> {
    let body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or(ParseError::MissingPrefix)?;
    if body.len() != SIZE * 2 {
        return Err(ParseError::InvalidLength(body.len()));
    }
    let decoded = util::from_hex(body).ok_or(ParseError::InvalidHex)?;
    let mut out = [0u8; SIZE];
    out.copy_from_slice(&decoded);
    Ok(out)
}

/// An unsigned 128-bit integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    pub lo: u64,
    pub hi: u64,
}

impl_words!(Uint128);

impl Uint128 {
    /// Returns the numeric value.
    pub const fn to_u128(self) -> u128 {
        self.bits()
    }

    /// Renders the numeric value in base 10.
    pub fn decimal_string(self) -> String {
        self.to_u128().to_string()
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self::from_bits(value)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        value.to_u128()
    }
}

/// A signed 128-bit integer in two's complement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int128 {
    pub lo: u64,
    pub hi: u64,
}

impl_words!(Int128);

impl Int128 {
    /// Returns true if the top bit of `hi` is set.
    pub const fn is_negative(self) -> bool {
        self.hi >> 63 == 1
    }

    /// Returns the numeric value.
    ///
    /// A negative value is the negation of the inverted pattern plus one. Computing the
    /// magnitude in `u128` keeps `i128::MIN` (whose magnitude has no positive `i128`) exact.
    pub const fn to_i128(self) -> i128 {
        if self.is_negative() {
            let magnitude = (!self.bits()).wrapping_add(1);
            0i128.wrapping_sub_unsigned(magnitude)
        } else {
            self.bits() as i128
        }
    }

    /// Renders the numeric value in base 10.
    pub fn decimal_string(self) -> String {
        self.to_i128().to_string()
    }
}

impl From<i128> for Int128 {
    fn from(value: i128) -> Self {
        Self::from_bits(value as u128)
    }
}

impl From<Int128> for i128 {
    fn from(value: Int128) -> Self {
        value.to_i128()
    }
}

impl From<Uint128> for Int128 {
    fn from(value: Uint128) -> Self {
        Self::new(value.lo, value.hi)
    }
}

/// A 128-bit floating point pattern.
///
/// There is no arithmetic view: the value is carried through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Float128 {
    pub lo: u64,
    pub hi: u64,
}

impl_words!(Float128);

impl From<Uint128> for Float128 {
    fn from(value: Uint128) -> Self {
        Self::new(value.lo, value.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigInt, BigUint, Sign};

    fn big_signed(value: Int128) -> BigInt {
        // Big-endian assembly of the pattern, then two's complement by hand.
        let mut bytes = [0u8; SIZE];
        bytes[..8].copy_from_slice(&value.hi.to_be_bytes());
        bytes[8..].copy_from_slice(&value.lo.to_be_bytes());
        if bytes[0] & 0x80 == 0 {
            return BigInt::from_bytes_be(Sign::Plus, &bytes);
        }
        let inverted: Vec<u8> = bytes.iter().map(|b| b ^ 0xff).collect();
        let magnitude = BigUint::from_bytes_be(&inverted) + 1u32;
        BigInt::from_biguint(Sign::Minus, magnitude)
    }

    #[test]
    fn test_uint128_decimal() {
        let cases = [
            (Uint128::new(0, 0), "0"),
            (Uint128::new(10, 0), "10"),
            (Uint128::new(0, 1), "18446744073709551616"),
            (Uint128::new(10, 82), "1512633014044183232522"),
            (
                Uint128::new(u64::MAX, u64::MAX),
                "340282366920938463463374607431768211455",
            ),
        ];
        for (value, expected) in cases {
            assert_eq!(value.decimal_string(), expected);
            let oracle: BigUint = BigUint::from(value.hi) << 64 | BigUint::from(value.lo);
            assert_eq!(oracle.to_string(), expected);
        }
    }

    #[test]
    fn test_int128_twos_complement() {
        let cases = [
            Int128::new(0, 0),
            Int128::new(7, 3),
            Int128::new(u64::MAX, u64::MAX),
            Int128::new(0, 1 << 63),
            Int128::new(u64::MAX, u64::MAX >> 1),
            Int128::new(1, 1 << 63),
            Int128::new(0xdead_beef, 0xffff_ffff_0000_0000),
        ];
        for value in cases {
            assert_eq!(value.decimal_string(), big_signed(value).to_string());
            assert_eq!(Int128::from(value.to_i128()), value);
        }
        assert_eq!(Int128::new(u64::MAX, u64::MAX).to_i128(), -1);
        assert_eq!(Int128::new(0, 1 << 63).to_i128(), i128::MIN);
        assert!(Int128::from(-5).is_negative());
        assert!(!Int128::from(5).is_negative());
    }

    #[test]
    fn test_display_memory_order() {
        assert_eq!(
            Uint128::from(1).to_string(),
            "0x01000000000000000000000000000000"
        );
        assert_eq!(
            Uint128::new(10, 82).to_string(),
            "0x0a000000000000005200000000000000"
        );
        // Sign does not affect the textual form.
        assert_eq!(
            Int128::from(-1).to_string(),
            "0xffffffffffffffffffffffffffffffff"
        );
        assert_eq!(
            Float128::new(10, 82).to_string(),
            Uint128::new(10, 82).to_string()
        );
    }

    #[test]
    fn test_parse() {
        let value: Uint128 = "0x0a000000000000005200000000000000".parse().unwrap();
        assert_eq!(value, Uint128::new(10, 82));
        let value: Int128 = "0X0700000000000000030000000000000A".parse().unwrap();
        assert_eq!(value, Int128::new(7, 0x0a00_0000_0000_0003));

        for value in [
            Uint128::new(0, 0),
            Uint128::new(u64::MAX, 1),
            Uint128::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210),
        ] {
            assert_eq!(value.to_string().parse::<Uint128>().unwrap(), value);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "0a000000000000005200000000000000".parse::<Uint128>(),
            Err(ParseError::MissingPrefix)
        );
        assert_eq!(
            "0x0a00".parse::<Uint128>(),
            Err(ParseError::InvalidLength(4))
        );
        assert_eq!(
            "0x0a0000000000000052000000000000000".parse::<Float128>(),
            Err(ParseError::InvalidLength(33))
        );
        assert_eq!(
            "0xzz000000000000005200000000000000".parse::<Int128>(),
            Err(ParseError::InvalidHex)
        );
        assert_eq!(
            "0x".parse::<Uint128>().unwrap_err().to_string(),
            "int128 expects 32 characters after 0x, had 0"
        );
    }

    #[test]
    fn test_le_bytes() {
        let value = Uint128::new(0x0807_0605_0403_0201, 0x100f_0e0d_0c0b_0a09);
        let bytes = value.to_le_bytes();
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(Uint128::from_le_bytes(bytes), value);
        assert_eq!(value.to_u128().to_le_bytes(), bytes);
    }
}
