//! Fuzzing entry points for cobs-core
//!
//! Each function takes arbitrary input bytes and panics only when a codec
//! invariant is broken, so it can back a `libfuzzer-sys` target or a corpus
//! replay test.

use cobs_core::{decode, encode, max_decoded_length, max_encoded_length};

pub fn fuzz_decode(data: &[u8]) {
    // Try to decode - should never panic
    let mut dst = vec![0u8; max_decoded_length(data.len())];
    let _ = decode(data, &mut dst);
}

pub fn fuzz_round_trip(data: &[u8]) {
    let mut encoded = vec![0u8; max_encoded_length(data.len())];
    let len = match encode(data, &mut encoded) {
        Ok(len) => len,
        Err(e) => panic!("encode failed with a sufficient buffer: {}", e),
    };
    assert!(!encoded[..len - 1].contains(&0x00));

    let mut decoded = vec![0u8; max_decoded_length(len)];
    match decode(&encoded[..len], &mut decoded) {
        Ok(out) => {
            assert_eq!(out.consumed, len);
            assert_eq!(&decoded[..out.produced], data);
        }
        Err(e) => panic!("decode failed on encoder output: {}", e),
    }
}

pub fn fuzz_scan(data: &[u8]) {
    use cobs_core::scanner::scan_packets;

    // Try to scan - should never panic
    let _ = scan_packets(data);
}
