//! Result types for COBS operations

/// Byte counts of a successfully decoded packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoded {
    /// Bytes read from the source, including the terminating marker.
    /// The next packet starts at this offset.
    pub consumed: usize,

    /// Bytes written to the destination
    pub produced: usize,
}

impl Decoded {
    /// Check if the packet carried no data
    pub const fn is_empty(&self) -> bool {
        self.produced == 0
    }
}

/// Outcome kind of an encode or decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed
    Ok,
    /// The destination buffer was too small
    WriteOverflow,
    /// The source did not contain a complete packet
    ReadOverflow,
    /// The source contained a marker byte inside a run
    UnexpectedZero,
}

impl Status {
    /// Outcome kind of any codec result
    pub fn of<T>(result: &crate::Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    /// Check if the caller can resume decoding right after the failure
    pub const fn is_resumable(&self) -> bool {
        matches!(self, Status::Ok | Status::UnexpectedZero)
    }
}
