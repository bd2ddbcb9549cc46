//! # OxiLZW: Variable-Width LZW Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and expansion
//! with codewords that grow from 9 to 16 bits as the dictionary fills.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Variable width**: Codewords start at 9 bits and grow one bit at a time up to 16
//! - **Two full-dictionary policies**: reset to 9 bits, or freeze at 16 bits
//! - **Self-describing**: A leading flag byte tells the expander which policy was used
//! - **Streaming**: Works over any `Read`/`Write` pair
//!
//! ## Stream Format
//!
//! - **Flag byte**: `'r'` for reset mode, anything else (`'n'` when written by
//!   this crate) for freeze mode
//! - **Codewords**: MSB-first, at the width currently in effect
//! - **Codes 0-255**: Single bytes
//! - **Code 256**: End of stream
//! - **Codes 257+**: Multi-byte dictionary entries
//! - **Padding**: Zero bits up to the next byte boundary
//!
//! The width is never transmitted. Encoder and decoder apply the same growth
//! policy at the same points, see [`WidthController`].
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{StreamMode, compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original, StreamMode::Reset).unwrap();
//! assert_eq!(compressed[0], b'r');
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use oxilzw::{StreamMode, compress_stream, decompress_stream};
//!
//! let original = b"This is a test of compression! ".repeat(10);
//!
//! let mut compressed = Vec::new();
//! let stats = compress_stream(&original[..], &mut compressed, StreamMode::Freeze).unwrap();
//! assert_eq!(stats.bytes_in, 310);
//! assert_eq!(stats.bytes_out, compressed.len() as u64);
//!
//! let mut expanded = Vec::new();
//! decompress_stream(&compressed[..], &mut expanded).unwrap();
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
mod stats;
mod width;

#[cfg(test)]
mod testing;

pub use config::{
    ALPHABET_SIZE, EOS_CODE, FIRST_CODE, FREEZE_FLAG, MAX_WIDTH, MIN_WIDTH, RESET_FLAG,
    StreamMode,
};
pub use decoder::Decoder;
pub use dictionary::{DecodeDictionary, EncodeDictionary};
pub use encoder::Encoder;
pub use error::{LzwError, Result};
pub use stats::CodecStats;
pub use width::{WidthController, WidthEvent};

use oxilzw_core::{MsbBitReader, MsbBitWriter};
use std::io::{BufReader, Read, Write};

/// Compress `data` into a complete stream, flag byte and padding included.
///
/// # Example
///
/// ```rust
/// use oxilzw::{StreamMode, compress};
///
/// // Flag byte plus one 9-bit end-of-stream code
/// let compressed = compress(b"", StreamMode::Freeze).unwrap();
/// assert_eq!(compressed, vec![b'n', 0x80, 0x00]);
/// ```
pub fn compress(data: &[u8], mode: StreamMode) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    compress_stream(data, &mut output, mode)?;
    Ok(output)
}

/// Expand a complete stream produced by [`compress`] or [`compress_stream`].
///
/// Bytes after the end-of-stream code are ignored.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(data.len().saturating_mul(2));
    let mut source = MsbBitReader::new(data);
    Decoder::new().decode(&mut source, &mut output)?;
    Ok(output)
}

/// Compress everything `input` yields and write the stream to `output`.
///
/// `output` is flushed before returning.
pub fn compress_stream<R: Read, W: Write>(
    input: R,
    mut output: W,
    mode: StreamMode,
) -> Result<CodecStats> {
    let mut sink = MsbBitWriter::new(&mut output);
    let stats = Encoder::new(mode).encode(input, &mut sink)?;
    drop(sink);
    output.flush()?;
    Ok(stats)
}

/// Expand one stream from `input` and write the bytes to `output`.
///
/// `input` is buffered internally. `output` is flushed before returning.
pub fn decompress_stream<R: Read, W: Write>(input: R, mut output: W) -> Result<CodecStats> {
    let mut source = MsbBitReader::new(BufReader::new(input));
    let stats = Decoder::new().decode(&mut source, &mut output)?;
    output.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::lcg_bytes;

    #[test]
    fn test_roundtrip_both_modes() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        for mode in [StreamMode::Freeze, StreamMode::Reset] {
            let compressed = compress(original, mode).unwrap();
            assert_eq!(compressed[0], mode.flag());
            assert_eq!(decompress(&compressed).unwrap(), original);
        }
    }

    #[test]
    fn test_310_byte_phrase() {
        let original = b"This is a test of compression! ".repeat(10);
        assert_eq!(original.len(), 310);

        let compressed = compress(&original, StreamMode::Freeze).unwrap();
        assert!(compressed.len() < original.len());
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        for mode in [StreamMode::Freeze, StreamMode::Reset] {
            let compressed = compress(b"", mode).unwrap();
            assert_eq!(compressed.len(), 3);
            assert!(decompress(&compressed).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A", StreamMode::Freeze).unwrap();
        // 'n', then 65 and 256 at 9 bits each, padded to 3 bytes
        assert_eq!(compressed, vec![b'n', 0x20, 0xC0, 0x00]);
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original, StreamMode::Freeze).unwrap();

        assert!(compressed.len() < original.len() / 2);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_large_input() {
        let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
        for mode in [StreamMode::Freeze, StreamMode::Reset] {
            let compressed = compress(&original, mode).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), original);
        }
    }

    #[test]
    fn test_stream_stats_agree() {
        let original = lcg_bytes(20_000, 5);
        let mut compressed = Vec::new();
        let encoded = compress_stream(&original[..], &mut compressed, StreamMode::Reset).unwrap();

        let mut expanded = Vec::new();
        let decoded = decompress_stream(&compressed[..], &mut expanded).unwrap();

        assert_eq!(expanded, original);
        assert_eq!(encoded.bytes_out, compressed.len() as u64);
        assert_eq!(decoded.bytes_in, compressed.len() as u64);
        assert_eq!(decoded.bytes_out, original.len() as u64);
        assert_eq!(encoded.codewords, decoded.codewords);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut compressed = compress(b"hello hello", StreamMode::Freeze).unwrap();
        compressed.extend_from_slice(b"garbage");
        assert_eq!(decompress(&compressed).unwrap(), b"hello hello");
    }

    #[test]
    fn test_truncated_stream_is_an_error() {
        let compressed = compress(b"hello hello hello", StreamMode::Freeze).unwrap();
        let err = decompress(&compressed[..compressed.len() - 2]).unwrap_err();
        assert!(matches!(err, LzwError::Stream(_)));
    }

    #[test]
    fn test_missing_flag_is_an_error() {
        assert!(matches!(decompress(b"").unwrap_err(), LzwError::Stream(_)));
    }
}
