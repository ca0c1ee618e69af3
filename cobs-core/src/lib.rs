//! # COBS Core
//!
//! Consistent Overhead Byte Stuffing: removes every `0x00` from a byte sequence so
//! that `0x00` can delimit packets on a byte stream, at a cost of at most one byte
//! per 254 bytes of payload plus the terminator.
//!
//! ## Modules
//!
//! - `constants`: Wire format constants
//! - `capacity`: Worst-case buffer sizes for encoding and decoding
//! - `types`: Result types (Decoded, Status)
//! - `encoder`: Packet encoding into caller-owned buffers
//! - `decoder`: Packet decoding with resumable error reporting
//! - `scanner`: Convenience layer over `decode` that recovers packets from a
//!   damaged buffer; not part of the codec contract
//!
//! ## Example
//!
//! ```
//! use cobs_core::{decode, encode, max_decoded_length, max_encoded_length};
//!
//! let payload = [0x11, 0x00, 0x22];
//! let mut encoded = [0u8; 16];
//! let len = encode(&payload, &mut encoded[..max_encoded_length(payload.len())]).unwrap();
//! assert_eq!(&encoded[..len], &[0x02, 0x11, 0x02, 0x22, 0x00]);
//!
//! let mut decoded = [0u8; 16];
//! let out = decode(&encoded[..len], &mut decoded[..max_decoded_length(len)]).unwrap();
//! assert_eq!(out.consumed, len);
//! assert_eq!(&decoded[..out.produced], &payload);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod capacity;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scanner;
pub mod types;

// Re-export commonly used items
pub use capacity::{max_decoded_length, max_encoded_length};
pub use decoder::{decode, decode_to_bytes};
pub use encoder::{encode, encode_to_bytes};
pub use error::CobsError;
pub use scanner::{scan_packets, scan_packets_with_stats, LocatedPacket, ScanStats};
pub use types::{Decoded, Status};

/// Result type alias for COBS operations
pub type Result<T> = core::result::Result<T, CobsError>;
