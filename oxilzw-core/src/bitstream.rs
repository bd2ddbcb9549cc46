//! MSB-first bit-level I/O for codeword streams.
//!
//! Codewords are packed from the most significant bit of each byte
//! downwards, with no separators between them. The final partial byte is
//! padded with zero bits when the writer is closed.
//!
//! # Example
//!
//! ```
//! use oxilzw_core::bitstream::{MsbBitReader, MsbBitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = MsbBitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b11001, 5).unwrap();
//!     writer.close().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1001]);
//!
//! let mut reader = MsbBitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(5).unwrap(), 0b11001);
//! ```

use crate::error::{Result, StreamError};
use crate::traits::{CodeSink, CodeSource};
use std::io::{self, Read, Write};

/// Largest number of bits a single read or write may carry.
pub const MAX_BITS: u8 = 32;

#[inline]
fn check_width(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BITS {
        return Err(StreamError::InvalidBitWidth(count));
    }
    Ok(())
}

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count) - 1
}

/// MSB-first bit reader wrapping any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time, so wrap
/// unbuffered sources in a `BufReader`.
#[derive(Debug)]
pub struct MsbBitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; the valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> MsbBitReader<R> {
    /// Create a new MSB bit reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this reader and return the underlying reader.
    ///
    /// Any buffered bits are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the underlying reader into the buffer.
    ///
    /// Returns `false` at end of input.
    fn pull_byte(&mut self) -> Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | byte[0] as u64;
                    self.bits_in_buffer += 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fill buffer with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            if !self.pull_byte()? {
                return Err(StreamError::unexpected_eof(self.total_bits_read));
            }
        }
        Ok(())
    }

    /// Read up to 32 bits from the stream (MSB-first).
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        check_width(count)?;
        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer -= count;
        self.buffer &= low_mask(self.bits_in_buffer);
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read an 8-bit value (not necessarily byte-aligned).
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Check if the reader is at end of stream.
    ///
    /// Bits still held in the buffer count as data, including padding.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        if self.bits_in_buffer > 0 {
            return Ok(false);
        }
        Ok(!self.pull_byte()?)
    }
}

impl<R: Read> CodeSource for MsbBitReader<R> {
    fn is_exhausted(&mut self) -> Result<bool> {
        MsbBitReader::is_exhausted(self)
    }

    fn read_byte(&mut self) -> Result<u8> {
        MsbBitReader::read_byte(self)
    }

    fn read_bits(&mut self, width: u8) -> Result<u32> {
        MsbBitReader::read_bits(self, width)
    }
}

/// MSB-first bit writer wrapping any `Write` implementation.
///
/// Call [`close`](Self::close) when done to emit the final partial byte and
/// flush the underlying writer. A writer dropped without being closed makes
/// a best-effort attempt to do the same.
#[derive(Debug)]
pub struct MsbBitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; the pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits_written: u64,
    /// Set once the final byte has been padded and flushed.
    closed: bool,
}

impl<W: Write> MsbBitWriter<W> {
    /// Create a new MSB bit writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
            closed: false,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Check whether [`close`](Self::close) has completed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Move complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        // At most 39 bits are pending here (7 leftover + 32 new).
        let mut bytes = [0u8; 5];
        let mut len = 0;
        while self.bits_in_buffer >= 8 {
            bytes[len] = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            len += 1;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= low_mask(self.bits_in_buffer);

        if len > 0 {
            self.writer.write_all(&bytes[..len])?;
        }
        Ok(())
    }

    /// Write up to 32 bits to the stream (MSB-first).
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        check_width(count)?;
        if (value as u64) > low_mask(count) {
            return Err(StreamError::value_too_wide(value, count));
        }

        self.buffer = (self.buffer << count) | value as u64;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write an 8-bit value (not necessarily byte-aligned).
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Pad the final byte with zeros and flush the underlying writer.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        self.closed = true;

        Ok(())
    }
}

impl<W: Write> CodeSink for MsbBitWriter<W> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        MsbBitWriter::write_byte(self, byte)
    }

    fn write_bits(&mut self, value: u32, width: u8) -> Result<()> {
        MsbBitWriter::write_bits(self, value, width)
    }

    fn close(&mut self) -> Result<()> {
        MsbBitWriter::close(self)
    }
}

impl<W: Write> Drop for MsbBitWriter<W> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
