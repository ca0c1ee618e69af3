//! Packet decoding

use crate::capacity::max_decoded_length;
use crate::constants::{MARKER, MAX_OFFSET, MIN_PACKET_LEN};
use crate::error::CobsError;
use crate::types::Decoded;
use alloc::vec;
use bytes::Bytes;

#[cfg(feature = "logging")]
use tracing::trace;

/// Decode the COBS packet at the start of `src` into `dst`
///
/// Reads up to and including the first terminating marker and returns how many
/// bytes were consumed and produced. Bytes after the terminator are left
/// untouched, so the next packet can be decoded from `src[consumed..]`.
///
/// A packet that is only the terminator decodes to an empty payload.
///
/// Errors:
/// - [`CobsError::ReadOverflow`] if `src` ends before the terminator
/// - [`CobsError::WriteOverflow`] if `dst` is too small; a buffer of
///   [`max_decoded_length`] bytes is always large enough
/// - [`CobsError::UnexpectedZero`] if a marker byte appears inside a run. The
///   error carries the number of bytes read including that marker, which is
///   where the next packet begins.
///
/// Every read and write is bounds-checked before it happens. Bytes written before
/// a failure may remain in `dst`.
pub fn decode(src: &[u8], dst: &mut [u8]) -> Result<Decoded, CobsError> {
    let result = decode_packet(src, dst);

    #[cfg(feature = "logging")]
    if let Err(e) = &result {
        trace!("Packet decode failed on {} source bytes: {:?}", src.len(), e);
    }

    result
}

fn decode_packet(src: &[u8], dst: &mut [u8]) -> Result<Decoded, CobsError> {
    let capacity = dst.len();

    let Some(&first) = src.first() else {
        return Err(CobsError::ReadOverflow {
            expected: MIN_PACKET_LEN,
            actual: 0,
        });
    };
    let mut read = 1;
    let mut written = 0;

    if first == MARKER {
        return Ok(Decoded {
            consumed: read,
            produced: written,
        });
    }

    let mut offset = first;
    loop {
        let run_len = usize::from(offset) - 1;
        let run_end = read + run_len;

        if run_end > src.len() {
            return Err(CobsError::ReadOverflow {
                expected: run_end + 1,
                actual: src.len(),
            });
        }
        if written + run_len > capacity {
            return Err(CobsError::WriteOverflow { capacity });
        }

        let run = &src[read..run_end];
        if let Some(pos) = memchr::memchr(MARKER, run) {
            return Err(CobsError::UnexpectedZero {
                consumed: read + pos + 1,
            });
        }
        dst[written..written + run_len].copy_from_slice(run);
        read = run_end;
        written += run_len;

        let Some(&next) = src.get(read) else {
            return Err(CobsError::ReadOverflow {
                expected: read + 1,
                actual: src.len(),
            });
        };
        read += 1;

        if next == MARKER {
            break;
        }

        // A short run was closed by a marker the encoder elided.
        if offset != MAX_OFFSET {
            if written >= capacity {
                return Err(CobsError::WriteOverflow { capacity });
            }
            dst[written] = MARKER;
            written += 1;
        }

        offset = next;
    }

    Ok(Decoded {
        consumed: read,
        produced: written,
    })
}

/// Decode the packet at the start of `src` into a newly allocated buffer
///
/// Returns the payload and the number of source bytes consumed.
pub fn decode_to_bytes(src: &[u8]) -> Result<(Bytes, usize), CobsError> {
    let mut buf = vec![0u8; max_decoded_length(src.len())];
    let decoded = decode(src, &mut buf)?;
    buf.truncate(decoded.produced);
    Ok((Bytes::from(buf), decoded.consumed))
}
