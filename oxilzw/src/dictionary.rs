//! LZW dictionaries for the encode and decode directions.
//!
//! Both start with the 256 single-byte strings under codes 0-255 and grow
//! by one entry per step. Code 256 is the end-of-stream marker and never
//! names a string.

use crate::config::{ALPHABET_SIZE, EOS_CODE, FIRST_CODE, MIN_WIDTH};
use std::collections::HashMap;

/// Prefix slot of an entry whose prefix string is not in the dictionary.
const DETACHED: u32 = u32::MAX;

/// Encode-side dictionary: `(prefix code, next byte)` -> code.
///
/// Extending the current match by one byte is a single lookup, whatever the
/// match length. Every entry is keyed under the code of its prefix, with
/// one exception: the entry inserted right after a reset, whose prefix
/// string was dropped along with the old dictionary. That entry stays
/// detached until its prefix string is inserted again, and is then keyed
/// under the new prefix code.
#[derive(Debug)]
pub struct EncodeDictionary {
    /// Child lookup for every reachable multi-byte entry.
    children: HashMap<(u32, u8), u32>,
    /// `(prefix code, last byte)` per code, starting at [`FIRST_CODE`].
    entries: Vec<(u32, u8)>,
    /// Entry waiting for its prefix string to come back.
    detached: Option<Detached>,
}

#[derive(Debug)]
struct Detached {
    code: u32,
    prefix: Vec<u8>,
    last: u8,
    /// Code of the longest known head of `prefix`.
    cursor: u32,
    /// Length of that head.
    matched: usize,
}

impl EncodeDictionary {
    /// Create a dictionary holding only the single-byte strings.
    pub fn new() -> Self {
        Self {
            children: HashMap::with_capacity(1 << MIN_WIDTH),
            entries: Vec::with_capacity(1 << MIN_WIDTH),
            detached: None,
        }
    }

    /// Drop every multi-byte entry.
    pub fn reset(&mut self) {
        self.children.clear();
        self.entries.clear();
        self.detached = None;
    }

    /// Find the code for the string of `prefix` followed by `byte`.
    pub fn get(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Add the string of `prefix` followed by `byte` under `code`.
    ///
    /// `prefix` must name an entry of this dictionary.
    pub fn insert(&mut self, prefix: u32, byte: u8, code: u32) {
        debug_assert_eq!(code as usize, self.next_slot(), "codes are assigned in order");
        self.children.insert((prefix, byte), code);
        self.entries.push((prefix, byte));
        self.follow_detached(prefix, byte, code);
    }

    /// Add `prefix + [last]` under `code` when `prefix` is not an entry.
    ///
    /// Only the first insertion after a reset needs this.
    pub fn insert_detached(&mut self, prefix: Vec<u8>, last: u8, code: u32) {
        debug_assert_eq!(code as usize, self.next_slot(), "codes are assigned in order");
        let Some(&head) = prefix.first() else {
            return;
        };
        self.entries.push((DETACHED, last));
        let detached = Detached {
            code,
            prefix,
            last,
            cursor: head as u32,
            matched: 1,
        };
        if detached.matched == detached.prefix.len() {
            self.attach(detached);
        } else {
            self.detached = Some(detached);
        }
    }

    /// Rebuild the byte string of `code`, which must name a reachable entry.
    pub fn string_of(&self, code: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut code = code;
        while let Some(&(prefix, byte)) = self.entry(code) {
            bytes.push(byte);
            code = prefix;
        }
        bytes.push(code as u8);
        bytes.reverse();
        bytes
    }

    /// Number of strings in the dictionary, single bytes included.
    pub fn entry_count(&self) -> usize {
        ALPHABET_SIZE as usize + self.entries.len()
    }

    fn next_slot(&self) -> usize {
        FIRST_CODE as usize + self.entries.len()
    }

    fn entry(&self, code: u32) -> Option<&(u32, u8)> {
        let index = code.checked_sub(FIRST_CODE)?;
        self.entries.get(index as usize)
    }

    /// Advance the detached entry's prefix walk if `(prefix, byte)` extends it.
    fn follow_detached(&mut self, prefix: u32, byte: u8, code: u32) {
        let Some(detached) = self.detached.as_mut() else {
            return;
        };
        if detached.cursor != prefix || detached.prefix.get(detached.matched) != Some(&byte) {
            return;
        }
        detached.cursor = code;
        detached.matched += 1;
        if detached.matched < detached.prefix.len() {
            return;
        }
        if let Some(detached) = self.detached.take() {
            self.attach(detached);
        }
    }

    fn attach(&mut self, detached: Detached) {
        let key = (detached.cursor, detached.last);
        self.children.insert(key, detached.code);
        let index = detached.code.checked_sub(FIRST_CODE);
        if let Some(slot) = index.and_then(|i| self.entries.get_mut(i as usize)) {
            *slot = key;
        }
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode-side dictionary: code -> byte string.
#[derive(Debug)]
pub struct DecodeDictionary {
    /// Indexed by code. Slot 256 is the reserved end-of-stream placeholder.
    table: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    /// Create a dictionary holding only the single-byte strings.
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(1 << MIN_WIDTH);
        table.extend((0..ALPHABET_SIZE).map(|byte| vec![byte as u8]));
        // Placeholder for the end-of-stream code
        table.push(Vec::new());
        Self { table }
    }

    /// Replace the dictionary with a freshly seeded one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the byte string for a code.
    pub fn get(&self, code: u32) -> Option<&[u8]> {
        if code == EOS_CODE {
            return None;
        }
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Store `entry` under `code`, which must be the next unused code.
    pub fn insert(&mut self, code: u32, entry: Vec<u8>) {
        debug_assert_eq!(code as usize, self.table.len(), "codes are assigned in order");
        self.table.push(entry);
    }

    /// Number of strings in the dictionary, single bytes included.
    pub fn entry_count(&self) -> usize {
        self.table.len() - 1
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}
