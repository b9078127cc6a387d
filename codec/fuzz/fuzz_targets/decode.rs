#![no_main]

use abi_codec::{
    Bool, Config, Decoder, Encode, EncodeSize, Float128, HexBytes, Int128, Int64, JsonFloat64,
    Read, SafeString, Uint128, Uint64, Varint16, Varint32, Varuint16, Varuint32, Write,
};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Default, Read, Write, EncodeSize)]
struct Record {
    name: String,
    amount: Uint64,
    balance: Int64,
    ratio: JsonFloat64,
    ok: Bool,
    tags: Vec<SafeString>,
    raw: HexBytes,
    small: [Varint16; 2],
    counters: (Varuint16, Varint32, Varuint32),
    wide: (Uint128, Int128, Float128),
    children: Vec<Record>,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    max_len: u16,
    max_depth: u8,
    data: &'a [u8],
}

/// Decodes `T` from `data`, re-encoding whatever decoded successfully.
fn decode<T: Read + Write + EncodeSize + Default>(data: &[u8], config: Config) {
    let mut decoder = Decoder::with_config(data, config);
    let mut value = T::default();
    if decoder.decode(&mut value).is_err() {
        return;
    }
    assert!(decoder.offset() <= data.len());

    // Decoding may normalize (booleans, varints, repaired UTF-8), so only the size is checked.
    let encoded = value.encode().expect("Failed to encode a decoded value!");
    assert_eq!(encoded.len(), value.encode_size());
}

fn fuzz(input: FuzzInput) {
    let config = Config::default()
        .with_max_len(input.max_len as usize)
        .with_max_depth(input.max_depth as usize);
    let data = input.data;

    decode::<u8>(data, config);
    decode::<u64>(data, config);
    decode::<f64>(data, config);
    decode::<bool>(data, config);
    decode::<String>(data, config);
    decode::<Vec<u8>>(data, config);
    decode::<Vec<Vec<String>>>(data, config);
    decode::<[u32; 4]>(data, config);
    decode::<(u8, String, Varint32)>(data, config);
    decode::<Record>(data, config);
    decode::<Record>(data, Config::default());

    let mut decoder = Decoder::new(data);
    if decoder.read_uvarint64().is_ok() {
        assert!(decoder.offset() <= abi_codec::varint::MAX_LEN);
    }
    let mut decoder = Decoder::new(data);
    let _ = decoder.read_safe_string();
    assert!(decoder.offset() <= data.len());
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
