//! Packet recovery from damaged or noisy buffers
//!
//! A convenience layer built on [`decode`] and its resumption count. Framing a
//! live byte stream stays with the transport; this only walks a complete buffer.

use crate::constants::MARKER;
use crate::decoder::decode;
use crate::error::CobsError;
use alloc::vec;
use alloc::vec::Vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A packet found at a specific offset in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedPacket {
    /// Byte offset of the packet's first offset byte
    pub offset: usize,

    /// Encoded size of the packet, terminator included
    pub size: usize,

    /// The decoded payload
    pub payload: Bytes,
}

/// Scan statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of packets decoded
    pub packets_found: usize,

    /// Number of packets discarded because they were malformed
    pub damaged_packets: usize,

    /// Bytes after the last terminator that do not form a packet
    pub truncated_bytes: usize,

    /// Total encoded bytes of all decoded packets
    pub bytes_recovered: usize,
}

impl ScanStats {
    /// Calculate recovery rate as a percentage
    pub fn recovery_rate(&self) -> f64 {
        if self.bytes_scanned == 0 {
            0.0
        } else {
            (self.bytes_recovered as f64 / self.bytes_scanned as f64) * 100.0
        }
    }
}

/// Decode every packet in `data`, skipping damaged ones
///
/// Packets are expected back to back, each closed by its terminator. When a packet
/// is malformed the scan resumes at the next packet boundary:
/// - after a marker byte found inside a run, since that marker closed the
///   damaged packet
/// - after the next marker byte when a run claims more bytes than remain
///
/// Bytes after the last marker are reported as truncated and not decoded.
pub fn scan_packets(data: &[u8]) -> Vec<LocatedPacket> {
    scan_packets_with_stats(data).0
}

/// Scan a buffer with statistics
pub fn scan_packets_with_stats(data: &[u8]) -> (Vec<LocatedPacket>, ScanStats) {
    let mut stats = ScanStats {
        bytes_scanned: data.len(),
        ..Default::default()
    };

    // A packet never decodes to more bytes than it occupies.
    let mut scratch = vec![0u8; data.len()];
    let mut results = Vec::new();
    let mut pos = 0;

    #[cfg(feature = "logging")]
    debug!("Starting packet scan of {} bytes", data.len());

    while pos < data.len() {
        match decode(&data[pos..], &mut scratch) {
            Ok(decoded) => {
                #[cfg(feature = "logging")]
                debug!(
                    "Decoded packet at offset {} ({} bytes, {} payload bytes)",
                    pos, decoded.consumed, decoded.produced
                );

                stats.bytes_recovered += decoded.consumed;
                results.push(LocatedPacket {
                    offset: pos,
                    size: decoded.consumed,
                    payload: Bytes::copy_from_slice(&scratch[..decoded.produced]),
                });
                pos += decoded.consumed;
            }
            Err(CobsError::UnexpectedZero { consumed }) => {
                #[cfg(feature = "logging")]
                warn!(
                    "Damaged packet at offset {}: marker inside run, resuming at {}",
                    pos,
                    pos + consumed
                );

                stats.damaged_packets += 1;
                pos += consumed;
            }
            Err(_e) => match memchr::memchr(MARKER, &data[pos..]) {
                Some(end) => {
                    #[cfg(feature = "logging")]
                    warn!(
                        "Damaged packet at offset {}: {:?}, resuming at {}",
                        pos,
                        _e.status(),
                        pos + end + 1
                    );

                    stats.damaged_packets += 1;
                    pos += end + 1;
                }
                None => {
                    #[cfg(feature = "logging")]
                    warn!(
                        "Truncated packet at offset {}: {} bytes without terminator",
                        pos,
                        data.len() - pos
                    );

                    stats.truncated_bytes = data.len() - pos;
                    break;
                }
            },
        }
    }

    stats.packets_found = results.len();

    #[cfg(feature = "logging")]
    debug!(
        "Scan complete: found {} packets out of {} bytes scanned",
        stats.packets_found, stats.bytes_scanned
    );

    (results, stats)
}
