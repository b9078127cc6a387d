//! Error types for codec operations

use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} required [{required}] bytes, remaining [{available}]")]
    BufferTooSmall {
        kind: &'static str,
        required: usize,
        available: usize,
    },
    #[error("byte array: varlen={varlen}, missing {missing} bytes")]
    ByteArrayTooSmall { varlen: usize, missing: usize },
    #[error("varint: invalid buffer size")]
    VarintBufferTooSmall,
    #[error("varint: value overflows 64 bits")]
    InvalidVarint,
    #[error("{op}: unsupported type {name}")]
    UnsupportedType {
        op: &'static str,
        name: &'static str,
    },
    #[error("string: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("nesting depth exceeded: {0}")]
    DepthExceeded(usize),
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("{kind}: {source}")]
    Context {
        kind: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Prefixes the error with the kind of leaf that produced it.
    pub fn context(self, kind: &'static str) -> Self {
        Error::Context {
            kind,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any leaf context.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Error type for parsing the textual form of 128-bit values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("int128 expects 0x prefix")]
    MissingPrefix,
    #[error("int128 expects 32 characters after 0x, had {0}")]
    InvalidLength(usize),
    #[error("int128: invalid hex digits")]
    InvalidHex,
}
