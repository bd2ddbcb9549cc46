//! LZW encoder (compression).

use crate::config::{EOS_CODE, StreamMode};
use crate::dictionary::EncodeDictionary;
use crate::error::Result;
use crate::stats::CodecStats;
use crate::width::{WidthController, WidthEvent};
use oxilzw_core::CodeSink;
use std::io::{self, Read};

/// Size of the chunks pulled from the input reader.
const READ_CHUNK: usize = 8 * 1024;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct Encoder {
    /// Dictionary for string lookup.
    dict: EncodeDictionary,
    /// Width and capacity policy.
    width: WidthController,
    /// Code of the longest match so far (`w`), `None` before the first byte.
    pending_code: Option<u32>,
    /// Counters for the current stream.
    stats: CodecStats,
    /// Bits written, flag byte included.
    bits_written: u64,
}

impl Encoder {
    /// Create a new encoder for the given stream mode.
    pub fn new(mode: StreamMode) -> Self {
        Self {
            dict: EncodeDictionary::new(),
            width: WidthController::new(mode),
            pending_code: None,
            stats: CodecStats::new(mode),
            bits_written: 0,
        }
    }

    /// The stream mode this encoder writes.
    pub fn mode(&self) -> StreamMode {
        self.width.mode()
    }

    /// Encode everything `input` yields into `sink`, then close the sink.
    ///
    /// # Algorithm
    ///
    /// 1. Write the mode flag byte
    /// 2. Extend the current match `w` byte by byte while `w + c` is known
    /// 3. Otherwise emit the code for `w` at the current width, apply the
    ///    width policy, add `w + c` under the next code, and restart from `c`
    /// 4. At end of input emit the code for `w`, apply the width policy
    ///    once more, and emit the end-of-stream code
    ///
    /// Each call encodes an independent stream.
    pub fn encode<R: Read, S: CodeSink>(
        &mut self,
        mut input: R,
        sink: &mut S,
    ) -> Result<CodecStats> {
        self.reset();
        tracing::trace!(mode = %self.mode(), "encoding stream");

        sink.write_byte(self.mode().flag())?;
        self.bits_written = 8;

        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                self.push(byte, sink)?;
            }
            self.stats.bytes_in += n as u64;
        }

        self.finish(sink)
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        let mode = self.mode();
        *self = Self::new(mode);
    }

    fn push<S: CodeSink>(&mut self, byte: u8, sink: &mut S) -> Result<()> {
        let Some(code) = self.pending_code else {
            self.pending_code = Some(byte as u32);
            return Ok(());
        };
        if let Some(extended) = self.dict.get(code, byte) {
            self.pending_code = Some(extended);
            return Ok(());
        }

        self.emit(code, sink)?;
        let carried = match self.admit() {
            WidthEvent::Reset => {
                // `w` does not survive the reset, but `w + c` still goes in
                let prefix = self.dict.string_of(code);
                self.dict.reset();
                Some(prefix)
            }
            _ => None,
        };
        if let Some(next) = self.width.assign() {
            match carried {
                Some(prefix) => self.dict.insert_detached(prefix, byte, next),
                None => self.dict.insert(code, byte, next),
            }
            self.stats.entries_added += 1;
        }

        self.pending_code = Some(byte as u32);
        Ok(())
    }

    fn finish<S: CodeSink>(&mut self, sink: &mut S) -> Result<CodecStats> {
        if let Some(code) = self.pending_code.take() {
            self.emit(code, sink)?;
        }
        // The decoder applies the policy before every read after the first,
        // the end-of-stream code included.
        if self.stats.codewords > 0 && self.admit() == WidthEvent::Reset {
            self.dict.reset();
        }
        self.emit(EOS_CODE, sink)?;
        sink.close()?;

        self.stats.bytes_out = self.bits_written.div_ceil(8);
        self.stats.final_width = self.width.width();
        tracing::debug!(
            bytes_in = self.stats.bytes_in,
            bytes_out = self.stats.bytes_out,
            codewords = self.stats.codewords,
            resets = self.stats.dictionary_resets,
            "encoded stream"
        );
        Ok(self.stats)
    }

    fn emit<S: CodeSink>(&mut self, code: u32, sink: &mut S) -> Result<()> {
        let width = self.width.width();
        sink.write_bits(code, width)?;
        self.bits_written += width as u64;
        self.stats.codewords += 1;
        Ok(())
    }

    /// Apply the width policy. On a reset the caller rebuilds the dictionary.
    fn admit(&mut self) -> WidthEvent {
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
            }
            WidthEvent::Unchanged | WidthEvent::Exhausted => {}
        }
        self.stats.record(event);
        event
    }
}
