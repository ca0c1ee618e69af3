//! Error types for COBS operations

use crate::types::Status;

/// Errors that can occur while encoding or decoding a packet
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CobsError {
    /// The destination buffer cannot hold the whole output
    #[cfg_attr(
        feature = "std",
        error("Write overflow: destination capacity of {capacity} bytes exhausted")
    )]
    WriteOverflow {
        /// Capacity of the destination buffer.
        capacity: usize,
    },

    /// The source ended before the terminating marker
    #[cfg_attr(
        feature = "std",
        error("Read overflow: packet needs at least {expected} bytes, got {actual}")
    )]
    ReadOverflow {
        /// Least source length that would let decoding progress past the failure.
        expected: usize,
        /// Length of the source buffer.
        actual: usize,
    },

    /// A marker byte appeared inside a run
    #[cfg_attr(
        feature = "std",
        error("Unexpected zero: marker byte inside a run after {consumed} bytes")
    )]
    UnexpectedZero {
        /// Bytes read up to and including the offending marker. Decoding may
        /// resume at this offset.
        consumed: usize,
    },
}

impl CobsError {
    /// The outcome kind of this error
    pub const fn status(&self) -> Status {
        match self {
            CobsError::WriteOverflow { .. } => Status::WriteOverflow,
            CobsError::ReadOverflow { .. } => Status::ReadOverflow,
            CobsError::UnexpectedZero { .. } => Status::UnexpectedZero,
        }
    }

    /// Offset at which a caller can restart decoding, or 0 when the failure
    /// gives no resumption point
    pub const fn consumed(&self) -> usize {
        match self {
            CobsError::UnexpectedZero { consumed } => *consumed,
            _ => 0,
        }
    }
}
