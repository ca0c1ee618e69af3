//! Basic encoding example

use anyhow::{Context, Result};
use cobs_core::{decode, encode, max_decoded_length, max_encoded_length};

fn main() -> Result<()> {
    println!("COBS Basic Encoding Example\n");

    let payloads: [&[u8]; 4] = [
        b"",
        b"hello",
        b"\x00zero\x00separated\x00",
        &[0x42; 300],
    ];

    let mut stream = Vec::new();

    for (i, payload) in payloads.iter().enumerate() {
        // Size the buffer up front; encode itself never allocates.
        let mut buf = vec![0u8; max_encoded_length(payload.len())];
        let len = encode(payload, &mut buf)
            .with_context(|| format!("Failed to encode payload {}", i))?;

        println!(
            "Payload {}: {} bytes -> {} bytes ({} overhead)",
            i,
            payload.len(),
            len,
            len - payload.len()
        );
        if len <= 32 {
            println!("  {}", hex::encode(&buf[..len]));
        }

        stream.extend_from_slice(&buf[..len]);
    }

    println!("\nDecoding {} bytes back...", stream.len());

    let mut pos = 0;
    let mut out = vec![0u8; max_decoded_length(stream.len())];
    while pos < stream.len() {
        let decoded = decode(&stream[pos..], &mut out)
            .with_context(|| format!("Failed to decode packet at offset {}", pos))?;

        println!(
            "Packet @ offset {}: {} bytes -> {} bytes",
            pos, decoded.consumed, decoded.produced
        );
        pos += decoded.consumed;
    }

    Ok(())
}
