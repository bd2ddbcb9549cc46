//! LZW-specific error types.

use oxilzw_core::StreamError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A codeword that neither the dictionary nor the self-reference case can resolve.
    #[error("Invalid LZW code: {code} (next code is {next_code})")]
    InvalidCode {
        /// The codeword read from the stream.
        code: u32,
        /// The next code the decoder would have assigned.
        next_code: u32,
    },

    /// Bit stream error.
    #[error("Bit stream error: {0}")]
    Stream(#[from] StreamError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
