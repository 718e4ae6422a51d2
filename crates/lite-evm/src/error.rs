//! EVM error types

use thiserror::Error;

/// Faults raised while executing a single instruction.
///
/// None of these cross the [`crate::Vm::execute`] boundary: the interpreter
/// folds every fault into a [`crate::StatusCode`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvmError {
    /// Out of gas
    #[error("out of gas")]
    OutOfGas,

    /// Stack underflow
    #[error("stack underflow")]
    StackUnderflow,

    /// Stack overflow
    #[error("stack overflow (max 1024)")]
    StackOverflow,

    /// Byte that does not decode to a known opcode
    #[error("undefined instruction: 0x{0:02x}")]
    UndefinedInstruction(u8),

    /// Known opcode used before the revision that introduced it
    #[error("instruction 0x{0:02x} not available in this revision")]
    InstructionNotActive(u8),

    /// Invalid memory access
    #[error("invalid memory access: offset {offset}, size {size}")]
    InvalidMemoryAccess {
        /// First byte of the access
        offset: usize,
        /// Number of bytes accessed
        size: usize,
    },

    /// Revert with data
    #[error("execution reverted")]
    Revert(Vec<u8>),
}

/// Result type for EVM operations
pub type EvmResult<T> = Result<T, EvmError>;
