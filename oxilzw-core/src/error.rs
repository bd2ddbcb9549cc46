//! Error types for bit stream operations.
//!
//! Every failure the code stream collaborators can report is collected here:
//! I/O errors from the wrapped reader or writer, truncated input, and
//! requests that fall outside the supported code widths.

use std::io;
use thiserror::Error;

/// The error type for bit stream operations.
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input ended in the middle of a value.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// A read or write asked for an unsupported number of bits.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),

    /// A value does not fit in the requested number of bits.
    #[error("Value {value} does not fit in {width} bits")]
    ValueTooWide {
        /// The value that was to be written.
        value: u32,
        /// The requested width.
        width: u8,
    },
}

/// Result type alias for bit stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

impl StreamError {
    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// Create a value-too-wide error.
    pub fn value_too_wide(value: u32, width: u8) -> Self {
        Self::ValueTooWide { value, width }
    }
}
