//! Codeword width and dictionary capacity policy.
//!
//! Encoder and decoder each own a [`WidthController`] and consult it at the
//! same points in the stream: once before every dictionary insertion, and
//! once more before the end-of-stream codeword. Because both sides apply
//! the identical policy at identical points, the width never has to be
//! transmitted.

use crate::config::{FIRST_CODE, MAX_WIDTH, MIN_WIDTH, StreamMode};

/// Outcome of [`WidthController::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthEvent {
    /// The current width still has room for the next code.
    Unchanged,
    /// The width grew by one bit; the payload is the new width.
    Widened(u8),
    /// Everything started over at the minimum width. The owner must
    /// rebuild its dictionary before assigning the next code.
    Reset,
    /// The dictionary is full at the maximum width and stays that way.
    Exhausted,
}

/// Tracks the current codeword width, the capacity it allows, and the next
/// code to hand out.
///
/// Invariants: `capacity == 2^width`, `next_code <= capacity`, and `width`
/// only ever grows, except when a reset sends it back to [`MIN_WIDTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthController {
    mode: StreamMode,
    width: u8,
    capacity: u32,
    next_code: u32,
}

impl WidthController {
    /// Create a controller at the minimum width.
    pub fn new(mode: StreamMode) -> Self {
        Self {
            mode,
            width: MIN_WIDTH,
            capacity: 1 << MIN_WIDTH,
            next_code: FIRST_CODE,
        }
    }

    /// Current codeword width in bits.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of codes representable at the current width.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The code the next insertion will receive.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// The stream mode this controller applies.
    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    /// Whether another code can be assigned at the current width.
    pub fn has_room(&self) -> bool {
        self.next_code < self.capacity
    }

    /// Apply the grow/reset policy ahead of the next assignment.
    ///
    /// Nothing happens while `next_code < capacity`. Once the last code of
    /// the current width has been assigned, the width grows by one bit, or
    /// at [`MAX_WIDTH`] either everything resets (reset mode) or the
    /// dictionary stays full for the rest of the stream (freeze mode).
    ///
    /// The caller has already written (or read) the codeword preceding this
    /// call at the old width; only later codewords see the change.
    pub fn admit(&mut self) -> WidthEvent {
        if self.has_room() {
            return WidthEvent::Unchanged;
        }

        if self.width < MAX_WIDTH {
            self.width += 1;
            self.capacity = 1 << self.width;
            return WidthEvent::Widened(self.width);
        }

        match self.mode {
            StreamMode::Reset => {
                self.restart();
                WidthEvent::Reset
            }
            StreamMode::Freeze => WidthEvent::Exhausted,
        }
    }

    /// Hand out the next code, or `None` when the dictionary is full.
    pub fn assign(&mut self) -> Option<u32> {
        if !self.has_room() {
            return None;
        }
        let code = self.next_code;
        self.next_code += 1;
        Some(code)
    }

    fn restart(&mut self) {
        self.width = MIN_WIDTH;
        self.capacity = 1 << MIN_WIDTH;
        self.next_code = FIRST_CODE;
    }
}
