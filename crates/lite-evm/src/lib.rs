//! # lite-evm
//!
//! Minimal stack-based EVM interpreter.
//!
//! This crate provides:
//! - A small opcode set (STOP, ADD, ADDRESS, NUMBER, MSTORE, SLOAD, SSTORE,
//!   PUSH1..PUSH32, RETURN, REVERT) gated by protocol [`Revision`]
//! - Per-step gas metering
//! - A [`Host`] trait through which all persistent state is reached
//! - A [`Vm`] handle exposing identity, capabilities and runtime options
//!
//! ```
//! use lite_evm::{Host, Message, Revision, StatusCode, StorageStatus, TxContext, Vm};
//! use lite_evm::{Address, Word};
//!
//! struct EmptyHost;
//!
//! impl Host for EmptyHost {
//!     fn get_storage(&self, _: &Address, _: &Word) -> Word { Word::ZERO }
//!     fn set_storage(&mut self, _: &Address, _: &Word, _: &Word) -> StorageStatus {
//!         StorageStatus::Assigned
//!     }
//!     fn get_tx_context(&self) -> TxContext { TxContext::default() }
//! }
//!
//! let vm = Vm::new();
//! let msg = Message::call(Address::ZERO, Address::ZERO, 10);
//! let result = vm.execute(&mut EmptyHost, Revision::Frontier, &msg, &[0x00]);
//! assert_eq!(result.status, StatusCode::Success);
//! assert_eq!(result.gas_left, 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod gas;
pub mod host;
pub mod interpreter;
pub mod memory;
pub mod opcode;
pub mod result;
pub mod revision;
pub mod stack;
pub mod vm;

pub use config::{ConfigError, SetOptionResult, VmConfig};
pub use context::{CallKind, Message, TxContext};
pub use error::{EvmError, EvmResult};
pub use host::{Host, StorageStatus};
pub use interpreter::Interpreter;
pub use memory::Memory;
pub use opcode::Opcode;
pub use result::{ExecutionResult, StatusCode};
pub use revision::Revision;
pub use stack::Stack;
pub use vm::{Capabilities, Vm, ABI_VERSION};

pub use lite_primitives::{Address, BlockNumber, Gas, Word};
