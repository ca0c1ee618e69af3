//! Example demonstrating recovery from damaged data

use anyhow::{Context, Result};
use cobs_core::{encoder::encode_to_bytes, scanner::scan_packets_with_stats};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("COBS Damaged Data Recovery Example\n");

    // Step 1: Create a clean stream with 10 packets
    println!("Step 1: Creating 10 packets...");
    let mut stream = Vec::new();

    for i in 1..=10u32 {
        let mut payload = i.to_le_bytes().to_vec();
        payload.extend_from_slice(format!("Important data from sensor {}", i).as_bytes());

        let encoded = encode_to_bytes(&payload)
            .with_context(|| format!("Failed to encode packet {}", i))?;
        stream.extend_from_slice(&encoded);
    }

    let original_size = stream.len();
    println!("Created clean stream: {} bytes\n", original_size);

    // Step 2: Simulate damage
    println!("Step 2: Simulating damage...");

    // Overwrite bytes 40-60 with noise
    stream[40..60].fill(0xFF);
    println!("Corrupted bytes 40-60");

    // Drop a marker into the middle of a packet
    stream[150] = 0x00;
    println!("Zeroed byte 150");

    // Lose the end of the stream
    stream.truncate(original_size - 10);
    println!("Truncated the last 10 bytes");

    println!("Damaged stream: {} bytes\n", stream.len());

    // Step 3: Scan and recover
    println!("Step 3: Scanning damaged stream...");
    let (packets, stats) = scan_packets_with_stats(&stream);

    println!("\n=== Scan Results ===");
    println!("Bytes scanned:     {} bytes", stats.bytes_scanned);
    println!("Packets found:     {}", stats.packets_found);
    println!("Damaged packets:   {}", stats.damaged_packets);
    println!("Truncated bytes:   {}", stats.truncated_bytes);
    println!("Recovery rate:     {:.2}%", stats.recovery_rate());

    println!("\n=== Recovered Packets ===");
    for packet in &packets {
        let text = String::from_utf8_lossy(packet.payload.get(4..).unwrap_or_default());
        println!("Packet @ offset {} ({} bytes): {}", packet.offset, packet.size, text);
    }

    Ok(())
}
