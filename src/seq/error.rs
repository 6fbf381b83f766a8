use core::fmt;

/// Failure of a runtime-checked sequence build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Fewer elements were supplied than the sequence holds.
    LengthMismatch { expected: usize, found: usize },
    /// An element was supplied after the sequence was full.
    Overflow { capacity: usize },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} elements, found {found}")
            }
            SeqError::Overflow { capacity } => {
                write!(f, "more than {capacity} elements supplied")
            }
        }
    }
}

impl core::error::Error for SeqError {}
