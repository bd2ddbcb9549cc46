//! # OxiLZW Core
//!
//! Core components for the OxiLZW codec.
//!
//! This crate provides the bit-oriented collaborators the codec is built on:
//!
//! - [`bitstream`]: MSB-first bit reader/writer over `std::io`
//! - [`traits`]: [`CodeSource`] / [`CodeSink`], the codeword I/O seam
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     compress / expand / info                            │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec (oxilzw)                                          │
//! │     WidthController, dictionaries, Encoder, Decoder     │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     MsbBitReader/MsbBitWriter, CodeSource/CodeSink      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilzw_core::{CodeSink, CodeSource, MsbBitReader, MsbBitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut sink = MsbBitWriter::new(&mut output);
//!     sink.write_byte(b'r').unwrap();
//!     sink.write_bits(300, 9).unwrap();
//!     sink.close().unwrap();
//! }
//!
//! let mut source = MsbBitReader::new(Cursor::new(output));
//! assert_eq!(source.read_byte().unwrap(), b'r');
//! assert_eq!(source.read_bits(9).unwrap(), 300);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{Result, StreamError};
pub use traits::{CodeSink, CodeSource};
