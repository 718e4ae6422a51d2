//! 256-bit big-endian word

use primitive_types::U256;
use std::fmt;
use thiserror::Error;

/// Word parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid word length: expected at most 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// 32-byte big-endian value.
///
/// Small integers are stored right-aligned: the integer `0xbb` is 31 zero
/// bytes followed by `0xbb`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Word([u8; 32]);

impl Word {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// Zero word
    pub const ZERO: Word = Word([0u8; 32]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }

    /// Create from a slice of at most 32 bytes, right-aligned.
    pub fn from_slice(slice: &[u8]) -> Result<Self, WordError> {
        if slice.len() > Self::LEN {
            return Err(WordError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes[Self::LEN - slice.len()..].copy_from_slice(slice);
        Ok(Word(bytes))
    }

    /// Parse from hex string. Short values are left-padded, odd digit counts allowed.
    pub fn from_hex(s: &str) -> Result<Self, WordError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = if s.len() % 2 == 1 {
            hex::decode(format!("0{}", s))
        } else {
            hex::decode(s)
        }
        .map_err(|e| WordError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Word holding a single byte in its lowest position
    pub const fn from_low_u8(value: u8) -> Self {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        Word(bytes)
    }

    /// Word holding a u64, big-endian in the last 8 bytes
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Word(bytes)
    }

    /// Lowest (last) byte
    pub const fn low_u8(&self) -> u8 {
        self.0[31]
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Word {
    fn from(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }
}

impl From<U256> for Word {
    fn from(value: U256) -> Self {
        let mut bytes = [0u8; 32];
        value.to_big_endian(&mut bytes);
        Word(bytes)
    }
}

impl From<Word> for U256 {
    fn from(word: Word) -> Self {
        U256::from_big_endian(&word.0)
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
