//! Evaluation stack

use crate::error::{EvmError, EvmResult};
use crate::gas::cost::MAX_STACK_SIZE;
use lite_primitives::Word;

/// Evaluation stack (max 1024 words)
#[derive(Clone, Debug)]
pub struct Stack {
    data: Vec<Word>,
}

impl Stack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(MAX_STACK_SIZE),
        }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: Word) -> EvmResult<()> {
        if self.data.len() >= MAX_STACK_SIZE {
            return Err(EvmError::StackOverflow);
        }
        self.data.push(value);
        Ok(())
    }

    /// Pop a value from the stack
    pub fn pop(&mut self) -> EvmResult<Word> {
        self.data.pop().ok_or(EvmError::StackUnderflow)
    }

    /// Peek at the top of the stack
    pub fn peek(&self) -> EvmResult<&Word> {
        self.data.last().ok_or(EvmError::StackUnderflow)
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
