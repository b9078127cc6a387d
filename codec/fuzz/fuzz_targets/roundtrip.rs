#![no_main]

use abi_codec::{
    Bool, Decode, Encode, EncodeSize, Float128, HexBytes, Int128, Int64, JsonFloat64, Read,
    SafeString, Uint128, Uint64, Varint16, Varint32, Varuint16, Varuint32, Write,
};
use arbitrary::Arbitrary;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use std::fmt::Debug;

#[derive(Debug, Default, Clone, PartialEq, Read, Write, EncodeSize)]
struct Record {
    name: String,
    amount: u64,
    delta: i32,
    flags: [bool; 3],
    memo: HexBytes,
    nonce: Varuint32,
    balance: Int128,
    children: Vec<Leaf>,
}

#[derive(Debug, Default, Clone, PartialEq, Read, Write, EncodeSize)]
struct Leaf(u8, Varint16, String);

#[derive(Arbitrary, Debug)]
struct RecordInput {
    name: String,
    amount: u64,
    delta: i32,
    flags: [bool; 3],
    memo: Vec<u8>,
    nonce: u32,
    balance: i128,
    children: Vec<(u8, i16, String)>,
}

impl From<RecordInput> for Record {
    fn from(input: RecordInput) -> Self {
        Self {
            name: input.name,
            amount: input.amount,
            delta: input.delta,
            flags: input.flags,
            memo: HexBytes(input.memo),
            nonce: Varuint32(input.nonce),
            balance: Int128::from(input.balance),
            children: input
                .children
                .into_iter()
                .map(|(a, b, c)| Leaf(a, Varint16(b), c))
                .collect(),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    // Primitives
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),

    // Text and bytes
    String(String),
    Bytes(Vec<u8>),

    // Collections
    Vec(Vec<u32>),
    NestedVec(Vec<Vec<String>>),
    Array([u16; 8]),
    Tuple(u8, String, i64),

    // Extension types
    WrappedBool(bool),
    HexBytes(Vec<u8>),
    Varint16(i16),
    Varuint16(u16),
    Varint32(i32),
    Varuint32(u32),
    Int64(i64),
    Uint64(u64),
    JsonFloat64(f64),
    Uint128(u128),
    Int128(i128),
    Float128(u128),
    SafeString(String),

    // Records
    Record(RecordInput),
}

fn roundtrip<T>(v: T)
where
    T: Encode + Decode + PartialEq + Debug,
{
    let encoded = v.encode().expect("Failed to encode!");
    assert_eq!(v.encode_size(), encoded.len());
    let decoded = T::decode(&encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(v, decoded);
}

fn roundtrip_f32(v: f32) {
    let encoded = v.encode().expect("Failed to encode f32!");
    let decoded = f32::decode(&encoded).expect("Failed to decode f32!");
    assert_eq!(v.to_bits(), decoded.to_bits());
}

fn roundtrip_f64(v: f64) {
    let encoded = v.encode().expect("Failed to encode f64!");
    let decoded = f64::decode(&encoded).expect("Failed to decode f64!");
    assert_eq!(v.to_bits(), decoded.to_bits());
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Bool(v) => roundtrip(v),
        FuzzInput::U8(v) => roundtrip(v),
        FuzzInput::U16(v) => roundtrip(v),
        FuzzInput::U32(v) => roundtrip(v),
        FuzzInput::U64(v) => roundtrip(v),
        FuzzInput::I8(v) => roundtrip(v),
        FuzzInput::I16(v) => roundtrip(v),
        FuzzInput::I32(v) => roundtrip(v),
        FuzzInput::I64(v) => roundtrip(v),
        FuzzInput::F32(v) => roundtrip_f32(v),
        FuzzInput::F64(v) => roundtrip_f64(v),
        FuzzInput::String(v) => roundtrip(v),
        FuzzInput::Bytes(v) => roundtrip(Bytes::from(v)),
        FuzzInput::Vec(v) => roundtrip(v),
        FuzzInput::NestedVec(v) => roundtrip(v),
        FuzzInput::Array(v) => roundtrip(v),
        FuzzInput::Tuple(a, b, c) => roundtrip((a, b, c)),
        FuzzInput::WrappedBool(v) => roundtrip(Bool(v)),
        FuzzInput::HexBytes(v) => roundtrip(HexBytes(v)),
        FuzzInput::Varint16(v) => roundtrip(Varint16(v)),
        FuzzInput::Varuint16(v) => roundtrip(Varuint16(v)),
        FuzzInput::Varint32(v) => roundtrip(Varint32(v)),
        FuzzInput::Varuint32(v) => roundtrip(Varuint32(v)),
        FuzzInput::Int64(v) => roundtrip(Int64(v)),
        FuzzInput::Uint64(v) => roundtrip(Uint64(v)),
        FuzzInput::JsonFloat64(v) => {
            let encoded = JsonFloat64(v).encode().expect("Failed to encode JsonFloat64!");
            let decoded = JsonFloat64::decode(&encoded).expect("Failed to decode JsonFloat64!");
            assert_eq!(v.to_bits(), decoded.0.to_bits());
        }
        FuzzInput::Uint128(v) => roundtrip(Uint128::from(v)),
        FuzzInput::Int128(v) => roundtrip(Int128::from(v)),
        FuzzInput::Float128(v) => roundtrip(Float128::from_bits(v)),
        FuzzInput::SafeString(v) => roundtrip(SafeString(v)),
        FuzzInput::Record(v) => roundtrip(Record::from(v)),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
