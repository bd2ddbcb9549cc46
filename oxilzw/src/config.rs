//! Codec parameters and the stream mode flag.

/// Number of single-byte dictionary entries (codes 0-255).
pub const ALPHABET_SIZE: u32 = 256;

/// Reserved end-of-stream codeword. Never assigned to a dictionary entry.
pub const EOS_CODE: u32 = 256;

/// First code handed out for multi-byte entries.
pub const FIRST_CODE: u32 = 257;

/// Initial codeword width in bits.
pub const MIN_WIDTH: u8 = 9;

/// Largest codeword width in bits.
pub const MAX_WIDTH: u8 = 16;

/// Mode flag byte for streams that reset their dictionary.
pub const RESET_FLAG: u8 = b'r';

/// Mode flag byte written for streams that freeze their dictionary.
///
/// Any byte other than [`RESET_FLAG`] is read back as freeze mode.
pub const FREEZE_FLAG: u8 = b'n';

/// What happens once the dictionary fills at [`MAX_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Keep the full dictionary and keep emitting at the maximum width.
    #[default]
    Freeze,
    /// Discard the dictionary and start over at [`MIN_WIDTH`].
    Reset,
}

impl StreamMode {
    /// Decode the leading mode flag byte of a stream.
    pub fn from_flag(flag: u8) -> Self {
        if flag == RESET_FLAG {
            Self::Reset
        } else {
            Self::Freeze
        }
    }

    /// The mode flag byte written at the start of a stream.
    pub fn flag(self) -> u8 {
        match self {
            Self::Freeze => FREEZE_FLAG,
            Self::Reset => RESET_FLAG,
        }
    }

    /// Whether a full dictionary is discarded.
    pub fn resets(self) -> bool {
        self == Self::Reset
    }

    /// Get a human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Freeze => "freeze",
            Self::Reset => "reset",
        }
    }
}

impl std::fmt::Display for StreamMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
