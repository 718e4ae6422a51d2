//! Scratch memory

use crate::error::{EvmError, EvmResult};
use crate::gas::cost::MEMORY_SIZE;
use lite_primitives::Word;

/// Fixed-size, zero-initialized byte buffer.
///
/// Instructions address it with a single byte taken from the low byte of a
/// word, so every access the interpreter makes stays below 512 bytes. Accesses
/// are still bounds-checked against the full buffer.
#[derive(Clone, Debug)]
pub struct Memory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Create zeroed memory
    pub fn new() -> Self {
        Self {
            data: Box::new([0u8; MEMORY_SIZE]),
        }
    }

    /// Memory size in bytes
    pub fn size(&self) -> usize {
        MEMORY_SIZE
    }

    /// Store a 32-byte word at `offset`
    pub fn store_word(&mut self, offset: usize, value: &Word) -> EvmResult<()> {
        let range = Self::range(offset, Word::LEN)?;
        self.data[range].copy_from_slice(value.as_bytes());
        Ok(())
    }

    /// Borrow `size` bytes starting at `offset`
    pub fn slice(&self, offset: usize, size: usize) -> EvmResult<&[u8]> {
        let range = Self::range(offset, size)?;
        Ok(&self.data[range])
    }

    fn range(offset: usize, size: usize) -> EvmResult<std::ops::Range<usize>> {
        match offset.checked_add(size) {
            Some(end) if end <= MEMORY_SIZE => Ok(offset..end),
            _ => Err(EvmError::InvalidMemoryAccess { offset, size }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
