//! Code stream traits.
//!
//! The codec never touches bytes on the wire directly. It reads codewords
//! through a [`CodeSource`] and writes them through a [`CodeSink`], so the
//! bit packing can be swapped out (or recorded in tests) without touching
//! the dictionary logic.

use crate::error::Result;

/// A source of fixed-width codewords and raw bytes.
pub trait CodeSource {
    /// Check whether the source has no more data.
    fn is_exhausted(&mut self) -> Result<bool>;

    /// Read an 8-bit value.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read a `width`-bit unsigned value.
    fn read_bits(&mut self, width: u8) -> Result<u32>;
}

/// A sink for fixed-width codewords and raw bytes.
pub trait CodeSink {
    /// Write an 8-bit value.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Write `value` using exactly `width` bits.
    fn write_bits(&mut self, value: u32, width: u8) -> Result<()>;

    /// Pad to a byte boundary and flush.
    ///
    /// Closing an already closed sink is a no-op.
    fn close(&mut self) -> Result<()>;
}

impl<S: CodeSource + ?Sized> CodeSource for &mut S {
    fn is_exhausted(&mut self) -> Result<bool> {
        (**self).is_exhausted()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn read_bits(&mut self, width: u8) -> Result<u32> {
        (**self).read_bits(width)
    }
}

impl<S: CodeSink + ?Sized> CodeSink for &mut S {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    fn write_bits(&mut self, value: u32, width: u8) -> Result<()> {
        (**self).write_bits(value, width)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
