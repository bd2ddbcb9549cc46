//! LZW decoder (decompression).
//!
//! The decoder builds each dictionary entry one codeword after the encoder
//! did: the entry for `previous + first byte of current` can only be
//! completed once the current codeword is known. When the encoder uses an
//! entry immediately after creating it, the codeword equals the decoder's
//! next code, and the string is necessarily `previous + previous[0]`.

use crate::config::{ALPHABET_SIZE, EOS_CODE, StreamMode};
use crate::dictionary::DecodeDictionary;
use crate::error::{LzwError, Result};
use crate::stats::CodecStats;
use crate::width::{WidthController, WidthEvent};
use oxilzw_core::CodeSource;
use std::io::Write;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct Decoder {
    /// Dictionary for code lookup.
    dict: DecodeDictionary,
    /// Width and capacity policy, configured from the stream's mode flag.
    width: WidthController,
    /// Counters for the current stream.
    stats: CodecStats,
    /// Bits read, flag byte included.
    bits_read: u64,
}

impl Decoder {
    /// Create a new decoder. The stream mode is read from the input.
    pub fn new() -> Self {
        Self::with_mode(StreamMode::default())
    }

    fn with_mode(mode: StreamMode) -> Self {
        Self {
            dict: DecodeDictionary::new(),
            width: WidthController::new(mode),
            stats: CodecStats::new(mode),
            bits_read: 0,
        }
    }

    /// Decode one stream from `source`, writing the expanded bytes to `output`.
    ///
    /// Reading stops at the end-of-stream code; anything after it (padding)
    /// is left unread.
    ///
    /// # Errors
    ///
    /// - [`LzwError::InvalidCode`] for a codeword that names no entry
    /// - [`LzwError::Stream`] if the stream ends before the end-of-stream code
    /// - [`LzwError::Io`] if `output` fails
    pub fn decode<S, W>(&mut self, source: &mut S, output: &mut W) -> Result<CodecStats>
    where
        S: CodeSource + ?Sized,
        W: Write + ?Sized,
    {
        let mode = StreamMode::from_flag(source.read_byte()?);
        *self = Self::with_mode(mode);
        self.bits_read = 8;
        tracing::trace!(mode = %mode, "decoding stream");

        let first = self.read_code(source)?;
        if first == EOS_CODE {
            return Ok(self.finish());
        }
        if first >= ALPHABET_SIZE {
            return Err(self.invalid(first));
        }
        let mut previous = vec![first as u8];
        self.write(output, &previous)?;

        loop {
            self.admit();

            let code = self.read_code(source)?;
            if code == EOS_CODE {
                break;
            }

            let current = if code == self.width.next_code() {
                let mut entry = previous.clone();
                entry.push(previous[0]);
                entry
            } else {
                match self.dict.get(code) {
                    Some(entry) => entry.to_vec(),
                    None => return Err(self.invalid(code)),
                }
            };
            self.write(output, &current)?;

            if let Some(next) = self.width.assign() {
                let mut entry = previous;
                entry.push(current[0]);
                self.dict.insert(next, entry);
                self.stats.entries_added += 1;
            }
            previous = current;
        }

        Ok(self.finish())
    }

    fn read_code<S: CodeSource + ?Sized>(&mut self, source: &mut S) -> Result<u32> {
        let width = self.width.width();
        let code = source.read_bits(width)?;
        self.bits_read += width as u64;
        self.stats.codewords += 1;
        Ok(code)
    }

    fn write<W: Write + ?Sized>(&mut self, output: &mut W, bytes: &[u8]) -> Result<()> {
        output.write_all(bytes)?;
        self.stats.bytes_out += bytes.len() as u64;
        Ok(())
    }

    fn admit(&mut self) {
        let event = self.width.admit();
        match event {
            WidthEvent::Widened(width) => {
                tracing::debug!(width, code = self.width.next_code(), "codeword width increased");
            }
            WidthEvent::Reset => {
                tracing::debug!(
                    entries = self.dict.entry_count(),
                    resets = self.stats.dictionary_resets + 1,
                    "dictionary reset"
                );
                self.dict.reset();
            }
            WidthEvent::Unchanged | WidthEvent::Exhausted => {}
        }
        self.stats.record(event);
    }

    fn invalid(&self, code: u32) -> LzwError {
        LzwError::InvalidCode {
            code,
            next_code: self.width.next_code(),
        }
    }

    fn finish(&mut self) -> CodecStats {
        self.stats.bytes_in = self.bits_read.div_ceil(8);
        self.stats.final_width = self.width.width();
        tracing::debug!(
            bytes_in = self.stats.bytes_in,
            bytes_out = self.stats.bytes_out,
            codewords = self.stats.codewords,
            resets = self.stats.dictionary_resets,
            "decoded stream"
        );
        self.stats
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
