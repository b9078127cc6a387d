//! Limits applied while decoding untrusted input.

/// Default upper bound on a sequence count or byte-array length.
pub const DEFAULT_MAX_LEN: usize = u32::MAX as usize;

/// Default upper bound on nested sequences, arrays and records.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a [crate::Decoder].
///
/// Length prefixes are read from the wire, so a hostile peer controls them. `max_len` bounds
/// every sequence count and byte-array length, and `max_depth` bounds how deeply composite
/// values may nest (self-referential records such as trees would otherwise recurse without
/// limit).
///
/// # Examples
///
/// ```
/// use abi_codec::{Config, Decoder, Error};
///
/// let cfg = Config::default().with_max_len(2);
/// let mut decoder = Decoder::with_config(&[0x03, 0x01, 0x02, 0x03], cfg);
/// let mut values: Vec<u8> = Vec::new();
/// assert!(matches!(decoder.decode(&mut values), Err(Error::LengthExceeded(3, 2))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Maximum accepted length prefix.
    pub max_len: usize,

    /// Maximum nesting depth of composite values.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Returns a copy with `max_len` replaced.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Returns a copy with `max_depth` replaced.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert_eq!(cfg.max_len, u32::MAX as usize);
        assert_eq!(cfg.max_depth, 64);
    }

    #[test]
    fn test_builders() {
        let cfg = Config::default().with_max_len(10).with_max_depth(3);
        assert_eq!(cfg.max_len, 10);
        assert_eq!(cfg.max_depth, 3);
    }
}
