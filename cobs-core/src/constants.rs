//! Constants for the COBS wire format

/// Packet delimiter. Never appears in an encoded packet except as its last byte.
pub const MARKER: u8 = 0x00;

/// Largest offset byte value. A run with this offset is a full run and has no
/// elided marker after it.
pub const MAX_OFFSET: u8 = 0xFF;

/// Number of data bytes carried by a full run
pub const MAX_RUN_DATA: usize = MAX_OFFSET as usize - 1;

/// Smallest valid packet: the terminator alone, which decodes to nothing
pub const MIN_PACKET_LEN: usize = 1;

/// Per-packet overhead of a packet whose runs are all short: the first offset
/// byte plus the terminator
pub const PACKET_OVERHEAD: usize = 2;
