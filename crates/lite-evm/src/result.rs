//! Execution status and result

use crate::error::EvmError;
use lite_primitives::Gas;
use std::fmt;
use std::str::FromStr;

/// Outcome of a single execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Completed through STOP, RETURN or the end of code
    Success,
    /// Generic failure
    Failure,
    /// Completed through REVERT
    Revert,
    /// Gas budget exhausted
    OutOfGas,
    /// Unknown opcode, or an opcode not yet enabled in the requested revision
    UndefinedInstruction,
    /// Push onto a full stack
    StackOverflow,
    /// Pop from an empty stack
    StackUnderflow,
    /// Memory access outside the scratch buffer
    InvalidMemoryAccess,
    /// Interpreter bug
    InternalError,
}

impl StatusCode {
    /// Every status, in declaration order
    pub const ALL: [StatusCode; 9] = [
        StatusCode::Success,
        StatusCode::Failure,
        StatusCode::Revert,
        StatusCode::OutOfGas,
        StatusCode::UndefinedInstruction,
        StatusCode::StackOverflow,
        StatusCode::StackUnderflow,
        StatusCode::InvalidMemoryAccess,
        StatusCode::InternalError,
    ];

    /// Whether the execution completed successfully
    pub fn is_success(self) -> bool {
        self == StatusCode::Success
    }

    /// Stable snake_case name, as used in test fixtures
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::Success => "success",
            StatusCode::Failure => "failure",
            StatusCode::Revert => "revert",
            StatusCode::OutOfGas => "out_of_gas",
            StatusCode::UndefinedInstruction => "undefined_instruction",
            StatusCode::StackOverflow => "stack_overflow",
            StatusCode::StackUnderflow => "stack_underflow",
            StatusCode::InvalidMemoryAccess => "invalid_memory_access",
            StatusCode::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCode::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown status code: {}", s))
    }
}

impl From<&EvmError> for StatusCode {
    fn from(err: &EvmError) -> Self {
        match err {
            EvmError::OutOfGas => StatusCode::OutOfGas,
            EvmError::StackUnderflow => StatusCode::StackUnderflow,
            EvmError::StackOverflow => StatusCode::StackOverflow,
            EvmError::UndefinedInstruction(_) | EvmError::InstructionNotActive(_) => {
                StatusCode::UndefinedInstruction
            }
            EvmError::InvalidMemoryAccess { .. } => StatusCode::InvalidMemoryAccess,
            EvmError::Revert(_) => StatusCode::Revert,
        }
    }
}

/// Result of a single execution.
///
/// `output` is copied out of the interpreter's memory when RETURN or REVERT
/// executes, so it is owned by the caller and outlives the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Execution status
    pub status: StatusCode,
    /// Gas remaining. Always 0 for failures.
    pub gas_left: Gas,
    /// Return data (or revert data)
    pub output: Vec<u8>,
}

impl ExecutionResult {
    /// Create a successful result
    pub fn success(gas_left: Gas, output: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Success,
            gas_left,
            output,
        }
    }

    /// Create a revert result. Remaining gas is preserved.
    pub fn revert(gas_left: Gas, output: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Revert,
            gas_left,
            output,
        }
    }

    /// Create a failed result: no gas is refunded and there is no output
    pub fn failure(status: StatusCode) -> Self {
        Self {
            status,
            gas_left: 0,
            output: Vec::new(),
        }
    }

    /// Whether the execution completed successfully
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
