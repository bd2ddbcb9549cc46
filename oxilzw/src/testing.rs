//! Test doubles for the code stream traits.

use oxilzw_core::{CodeSink, CodeSource, Result, StreamError};
use std::collections::VecDeque;

/// Records every byte and `(code, width)` pair written to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub bytes: Vec<u8>,
    pub codes: Vec<(u32, u8)>,
    pub closes: usize,
}

impl CodeSink for RecordingSink {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.bytes.push(byte);
        Ok(())
    }

    fn write_bits(&mut self, value: u32, width: u8) -> Result<()> {
        self.codes.push((value, width));
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }
}

/// Replays a flag byte and a list of `(code, width)` pairs, checking that
/// each code is read at the width it was scripted with.
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    flag: Option<u8>,
    codes: VecDeque<(u32, u8)>,
    position: u64,
}

impl ScriptedSource {
    pub fn new(flag: u8, codes: &[(u32, u8)]) -> Self {
        Self {
            flag: Some(flag),
            codes: codes.iter().copied().collect(),
            position: 0,
        }
    }
}

impl CodeSource for ScriptedSource {
    fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.flag.is_none() && self.codes.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let flag = self
            .flag
            .take()
            .ok_or(StreamError::unexpected_eof(self.position))?;
        self.position += 8;
        Ok(flag)
    }

    fn read_bits(&mut self, width: u8) -> Result<u32> {
        let (code, expected) = self
            .codes
            .pop_front()
            .ok_or(StreamError::unexpected_eof(self.position))?;
        assert_eq!(width, expected, "code {} read at the wrong width", code);
        self.position += width as u64;
        Ok(code)
    }
}

/// Reproducible pseudo-random bytes.
pub(crate) fn lcg_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed ^ 0x123456789ABCDEF0;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 32) as u8
        })
        .collect()
}
