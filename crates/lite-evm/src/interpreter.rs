//! Bytecode interpreter

use crate::config::VmConfig;
use crate::context::Message;
use crate::error::{EvmError, EvmResult};
use crate::gas;
use crate::host::Host;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::result::{ExecutionResult, StatusCode};
use crate::revision::Revision;
use crate::stack::Stack;
use lite_primitives::{Gas, Word};

/// Interpreter state for one execution.
///
/// Stack, memory and program counter are private to this value; the host,
/// message and code are borrowed for its lifetime.
#[derive(Debug)]
pub struct Interpreter<'a, H: Host + ?Sized> {
    /// State owner
    host: &'a mut H,
    /// Protocol revision gating opcodes
    revision: Revision,
    /// Call being executed
    message: &'a Message,
    /// Bytecode being executed
    code: &'a [u8],
    /// Diagnostic settings
    config: VmConfig,
    /// Program counter
    pc: usize,
    /// Gas remaining
    gas_left: Gas,
    /// Stack
    stack: Stack,
    /// Memory
    memory: Memory,
    /// Execution stopped
    stopped: bool,
    /// Output set by RETURN
    return_data: Vec<u8>,
}

impl<'a, H: Host + ?Sized> Interpreter<'a, H> {
    /// Create an interpreter positioned at the first instruction
    pub fn new(
        host: &'a mut H,
        revision: Revision,
        message: &'a Message,
        code: &'a [u8],
        config: VmConfig,
    ) -> Self {
        Self {
            host,
            revision,
            message,
            code,
            config,
            pc: 0,
            gas_left: message.gas,
            stack: Stack::new(),
            memory: Memory::new(),
            stopped: false,
            return_data: Vec::new(),
        }
    }

    /// Execute until completion or error
    pub fn run(mut self) -> ExecutionResult {
        while !self.stopped && self.pc < self.code.len() {
            match self.step() {
                Ok(()) => {}
                Err(EvmError::Revert(data)) => {
                    return ExecutionResult::revert(self.gas_left, data);
                }
                Err(err) => {
                    if self.config.logs_execution() {
                        tracing::debug!(pc = self.pc, error = %err, "execution aborted");
                    }
                    return ExecutionResult::failure(StatusCode::from(&err));
                }
            }
        }

        // STOP, RETURN, or end of code
        ExecutionResult::success(self.gas_left, self.return_data)
    }

    /// Execute a single step
    pub fn step(&mut self) -> EvmResult<()> {
        let Some(&byte) = self.code.get(self.pc) else {
            self.stopped = true;
            return Ok(());
        };

        // Metered before decoding, so undefined bytes cost gas too
        self.use_gas(gas::instruction_cost(byte))?;

        let opcode = Opcode::from_byte(byte).ok_or(EvmError::UndefinedInstruction(byte))?;
        if !self.revision.is_active(opcode.since()) {
            return Err(EvmError::InstructionNotActive(byte));
        }

        if self.config.traces_steps() {
            tracing::trace!(
                pc = self.pc,
                opcode = %opcode,
                gas_left = self.gas_left,
                stack = self.stack.len(),
                "step"
            );
        }

        self.execute(opcode)
    }

    /// Use gas, returning error if the budget goes negative
    fn use_gas(&mut self, amount: Gas) -> EvmResult<()> {
        match self.gas_left.checked_sub(amount) {
            Some(left) if left >= 0 => {
                self.gas_left = left;
                Ok(())
            }
            _ => Err(EvmError::OutOfGas),
        }
    }

    /// Execute an opcode
    fn execute(&mut self, opcode: Opcode) -> EvmResult<()> {
        match opcode {
            Opcode::STOP => {
                self.stopped = true;
            }

            // Single-byte arithmetic: only the low bytes take part
            Opcode::ADD => {
                let a = self.stack.pop()?;
                let b = self.stack.pop()?;
                let sum = a.low_u8().wrapping_add(b.low_u8());
                self.stack.push(Word::from_low_u8(sum))?;
                self.pc += 1;
            }

            Opcode::ADDRESS => {
                self.stack.push(self.message.destination.into_word())?;
                self.pc += 1;
            }
            Opcode::NUMBER => {
                let number = self.host.get_tx_context().block_number;
                self.stack.push(Word::from_low_u8(number as u8))?;
                self.pc += 1;
            }

            Opcode::MSTORE => {
                let offset = self.pop_offset()?;
                let value = self.stack.pop()?;
                self.memory.store_word(offset, &value)?;
                self.pc += 1;
            }
            Opcode::SLOAD => {
                let key = self.stack.pop()?;
                let value = self.host.get_storage(&self.message.destination, &key);
                self.stack.push(value)?;
                self.pc += 1;
            }
            Opcode::SSTORE => {
                let key = self.stack.pop()?;
                let value = self.stack.pop()?;
                self.host.set_storage(&self.message.destination, &key, &value);
                self.pc += 1;
            }

            // Immediate bytes past the end of code read as zero
            op if op.is_push() => {
                let size = op.push_size();
                let mut value = [0u8; 32];
                for i in 0..size {
                    if let Some(&byte) = self.code.get(self.pc + 1 + i) {
                        value[32 - size + i] = byte;
                    }
                }
                self.stack.push(Word::from_bytes(value))?;
                self.pc += 1 + size;
            }

            Opcode::RETURN => {
                let offset = self.pop_offset()?;
                let size = self.pop_offset()?;
                self.return_data = self.memory.slice(offset, size)?.to_vec();
                self.stopped = true;
            }
            Opcode::REVERT => {
                let offset = self.pop_offset()?;
                let size = self.pop_offset()?;
                let data = self.memory.slice(offset, size)?.to_vec();
                return Err(EvmError::Revert(data));
            }

            op => {
                return Err(EvmError::UndefinedInstruction(op.byte()));
            }
        }

        Ok(())
    }

    /// Pop a memory offset or size: the low byte of the top word
    fn pop_offset(&mut self) -> EvmResult<usize> {
        Ok(self.stack.pop()?.low_u8() as usize)
    }

    /// Get remaining gas
    pub fn gas_left(&self) -> Gas {
        self.gas_left
    }

    /// Get the program counter
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Get the stack
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Whether STOP or RETURN has executed
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
