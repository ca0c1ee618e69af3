//! Buffer sizing for encoding and decoding

use crate::constants::{MAX_RUN_DATA, MIN_PACKET_LEN, PACKET_OVERHEAD};

/// Capacity that is always sufficient to encode `decoded_length` bytes
///
/// The bound is reached when the input contains no marker bytes: every started
/// group of 254 bytes costs one offset byte, and the terminator costs one more.
/// A trailing empty run after a full run is not written, so 254 bytes need 256
/// and the empty input needs 1.
///
/// Saturates at `usize::MAX` for lengths whose bound does not fit in `usize`.
pub const fn max_encoded_length(decoded_length: usize) -> usize {
    decoded_length
        .saturating_add(decoded_length.div_ceil(MAX_RUN_DATA))
        .saturating_add(MIN_PACKET_LEN)
}

/// Largest payload a packet of `encoded_length` bytes can decode to
///
/// The bound is reached by a payload of marker bytes only, which costs the
/// first offset byte and the terminator. Lengths below 2 yield 0.
pub const fn max_decoded_length(encoded_length: usize) -> usize {
    encoded_length.saturating_sub(PACKET_OVERHEAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_encoded_length_boundaries() {
        assert_eq!(max_encoded_length(0), 1);
        assert_eq!(max_encoded_length(1), 3);
        assert_eq!(max_encoded_length(253), 255);
        assert_eq!(max_encoded_length(254), 256);
        assert_eq!(max_encoded_length(255), 258);
        assert_eq!(max_encoded_length(508), 511);
        assert_eq!(max_encoded_length(509), 513);
    }

    #[test]
    fn test_max_encoded_length_saturates() {
        assert_eq!(max_encoded_length(usize::MAX), usize::MAX);
        assert_eq!(max_encoded_length(usize::MAX - 1), usize::MAX);
        assert_eq!(max_decoded_length(max_encoded_length(usize::MAX)), usize::MAX - 2);
    }

    #[test]
    fn test_max_decoded_length() {
        assert_eq!(max_decoded_length(0), 0);
        assert_eq!(max_decoded_length(1), 0);
        assert_eq!(max_decoded_length(2), 0);
        assert_eq!(max_decoded_length(3), 1);
        assert_eq!(max_decoded_length(258), 256);
    }
}
