//! Error types for the trimming pipeline

use std::fmt;

/// Errors that can occur while trimming audio or running the batch driver
#[derive(Debug, Clone, PartialEq)]
pub enum TrimError {
    /// Input buffer has zero length, so no frame energies and no threshold
    /// can be derived
    EmptyInput,

    /// No frame cluster ever rose above the activity threshold; the file is
    /// silent (or its only active run never closed before the end of the
    /// buffer)
    NoActiveRegion,

    /// Frame size supplied by the caller is unusable (must be > 0)
    InvalidFrameSize(usize),

    /// Audio decoding error
    Decode(String),

    /// Audio encoding error
    Encode(String),

    /// File-system error while discovering inputs or preparing outputs
    Io(String),
}

impl fmt::Display for TrimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimError::EmptyInput => write!(f, "Empty input: buffer contains no samples"),
            TrimError::NoActiveRegion => {
                write!(f, "No active region: no frame cluster above threshold")
            }
            TrimError::InvalidFrameSize(size) => {
                write!(f, "Invalid frame size: {} (must be > 0)", size)
            }
            TrimError::Decode(msg) => write!(f, "Decoding error: {}", msg),
            TrimError::Encode(msg) => write!(f, "Encoding error: {}", msg),
            TrimError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TrimError {}
