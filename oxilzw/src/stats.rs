//! Per-stream counters reported by the encoder and decoder.

use crate::config::{MIN_WIDTH, StreamMode};
use crate::width::WidthEvent;

/// Counters for one compressed stream.
///
/// The encoder and decoder of the same stream report identical values for
/// every field except `bytes_in`/`bytes_out`, which swap roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecStats {
    /// Stream mode from the leading flag byte.
    pub mode: StreamMode,
    /// Bytes consumed.
    pub bytes_in: u64,
    /// Bytes produced.
    pub bytes_out: u64,
    /// Codewords written or read, end-of-stream code included.
    pub codewords: u64,
    /// Dictionary entries added, across resets.
    pub entries_added: u64,
    /// Number of times the codeword width grew.
    pub width_increases: u64,
    /// Number of full dictionary resets.
    pub dictionary_resets: u64,
    /// Codeword width in effect at the end of the stream.
    pub final_width: u8,
}

impl CodecStats {
    pub(crate) fn new(mode: StreamMode) -> Self {
        Self {
            mode,
            bytes_in: 0,
            bytes_out: 0,
            codewords: 0,
            entries_added: 0,
            width_increases: 0,
            dictionary_resets: 0,
            final_width: MIN_WIDTH,
        }
    }

    pub(crate) fn record(&mut self, event: WidthEvent) {
        match event {
            WidthEvent::Widened(_) => self.width_increases += 1,
            WidthEvent::Reset => self.dictionary_resets += 1,
            WidthEvent::Unchanged | WidthEvent::Exhausted => {}
        }
    }

    /// Output size relative to input size (0.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64
        }
    }
}
