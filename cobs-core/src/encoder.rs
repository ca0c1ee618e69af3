//! Packet encoding

use crate::capacity::max_encoded_length;
use crate::constants::{MARKER, MAX_OFFSET};
use crate::error::CobsError;
use alloc::vec;
use bytes::Bytes;

/// Encode `src` into one COBS packet written at the start of `dst`
///
/// Returns the number of bytes written, terminator included. The packet layout is
/// a sequence of runs, each an offset byte followed by `offset - 1` non-zero
/// data bytes, closed by a single `0x00`:
///
/// ```text
/// 11 22 00 33  ->  03 11 22 02 33 00
/// ```
///
/// An empty trailing run that follows a full run is not written, which also
/// makes the empty input encode to the terminator alone.
///
/// Fails with [`CobsError::WriteOverflow`] if `dst` is too small; a buffer of
/// [`max_encoded_length`] bytes is always large enough. Nothing is written
/// outside `dst`, although bytes before the failure point may have been
/// overwritten.
pub fn encode(src: &[u8], dst: &mut [u8]) -> Result<usize, CobsError> {
    let capacity = dst.len();
    let overflow = CobsError::WriteOverflow { capacity };

    // Slot of the offset byte of the open run, and the next data position.
    let mut offset_idx = 0;
    let mut copy_idx = 1;
    let mut offset: u8 = 1;
    // The open run starts the packet or follows a full run.
    let mut after_full_run = true;

    for &byte in src {
        if byte != MARKER {
            if copy_idx >= capacity {
                return Err(overflow);
            }
            dst[copy_idx] = byte;
            copy_idx += 1;
            offset += 1;

            if offset != MAX_OFFSET {
                continue;
            }
        }

        // Close the open run and start the next one at the copy position.
        if offset_idx >= capacity {
            return Err(overflow);
        }
        dst[offset_idx] = offset;
        after_full_run = offset == MAX_OFFSET;
        offset_idx = copy_idx;
        copy_idx += 1;
        offset = 1;
    }

    if offset == 1 && after_full_run {
        // Nothing to restore here, the terminator takes the slot.
        if offset_idx >= capacity {
            return Err(overflow);
        }
        dst[offset_idx] = MARKER;
        return Ok(offset_idx + 1);
    }

    // offset_idx < copy_idx, so checking the terminator covers both writes.
    if copy_idx >= capacity {
        return Err(overflow);
    }
    dst[offset_idx] = offset;
    dst[copy_idx] = MARKER;

    Ok(copy_idx + 1)
}

/// Encode `src` into a newly allocated packet
pub fn encode_to_bytes(src: &[u8]) -> Result<Bytes, CobsError> {
    let mut buf = vec![0u8; max_encoded_length(src.len())];
    let len = encode(src, &mut buf)?;
    buf.truncate(len);
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn encode_vec(src: &[u8]) -> Vec<u8> {
        encode_to_bytes(src).unwrap().to_vec()
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_vec(&[]), [0x00]);
    }

    #[test]
    fn test_encode_short_runs() {
        assert_eq!(encode_vec(&[0x01]), [0x02, 0x01, 0x00]);
        assert_eq!(encode_vec(&[0x00]), [0x01, 0x01, 0x00]);
        assert_eq!(encode_vec(&[0x01, 0x00]), [0x02, 0x01, 0x01, 0x00]);
        assert_eq!(encode_vec(&[0x00, 0x01]), [0x01, 0x02, 0x01, 0x00]);
        assert_eq!(encode_vec(&[0x00, 0x00]), [0x01, 0x01, 0x01, 0x00]);
        assert_eq!(encode_vec(&[0x11, 0x22, 0x00, 0x33]), [0x03, 0x11, 0x22, 0x02, 0x33, 0x00]);
    }

    #[test]
    fn test_encode_full_run_not_followed_by_empty_run() {
        let encoded = encode_vec(&[0x11; 254]);
        assert_eq!(encoded.len(), 256);
        assert_eq!(encoded[0], 0xFF);
        assert!(encoded[1..255].iter().all(|&b| b == 0x11));
        assert_eq!(encoded[255], 0x00);
    }

    #[test]
    fn test_encode_full_run_then_marker() {
        let mut src = vec![0x11; 254];
        src.push(0x00);
        let encoded = encode_vec(&src);
        assert_eq!(encoded.len(), 258);
        assert_eq!(&encoded[255..], &[0x01, 0x01, 0x00]);
    }

    #[test]
    fn test_encode_reports_overflow() {
        let mut dst = [0u8; 2];
        assert_eq!(
            encode(&[0x01], &mut dst),
            Err(CobsError::WriteOverflow { capacity: 2 })
        );

        let mut dst = [0u8; 0];
        assert!(encode(&[], &mut dst).is_err());
        assert!(encode(&[0x00], &mut dst).is_err());
    }

    #[test]
    fn test_encode_exact_capacity() {
        let src = [0x42u8; 300];
        let bound = max_encoded_length(src.len());
        let mut dst = vec![0u8; bound];
        assert_eq!(encode(&src, &mut dst), Ok(bound));

        let short = bound - 1;
        assert!(encode(&src, &mut dst[..short]).is_err());
    }
}
