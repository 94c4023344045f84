use std::fmt;

/// Identifies which of the two buffers of a conversion failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// The YUV input
    Source,
    /// The packed pixel output
    Destination,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::Source => f.write_str("source"),
            Buffer::Destination => f.write_str("destination"),
        }
    }
}

/// Everything that can go wrong when converting a frame
///
/// All checks happen before the destination is written to, so on error the
/// destination buffer is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid dimensions {width}x{height}, width and height must be non-zero and even")]
    InvalidDimension { width: usize, height: usize },

    #[error("{buffer} buffer too small, expected at least {minimum} elements but got {got}")]
    BufferTooSmall {
        buffer: Buffer,
        minimum: usize,
        got: usize,
    },

    #[error("destination must hold exactly {expected} pixels, but got {got}")]
    OutputSizeMismatch { expected: usize, got: usize },
}
