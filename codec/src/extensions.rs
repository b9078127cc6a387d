//! Leaf types whose wire or textual form differs from their native counterpart.
//!
//! Each wrapper implements [crate::Read], [crate::Write] and [crate::EncodeSize] itself, so it
//! takes precedence over the generic rule for its native type wherever it appears in a record.
//! With the `serde` feature enabled they also carry their textual (JSON) form.

mod boolean;
mod fixed;
mod hex;
mod string;
mod varint;
mod wide;

pub use boolean::Bool;
pub use fixed::{Int64, JsonFloat64, Uint64, MAX_TEXT_MAGNITUDE};
pub use hex::HexBytes;
pub use string::SafeString;
pub use varint::{Varint16, Varint32, Varuint16, Varuint32};
