//! Implementations of Codec for common types

pub mod bytes;
pub mod primitives;
pub mod time;
pub mod tuple;
pub mod vec;
