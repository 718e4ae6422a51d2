//! # lite-primitives
//!
//! Value types shared by the lite-evm interpreter and its hosts.
//!
//! - [`Address`]: 20-byte account address
//! - [`Word`]: 32-byte big-endian word, the only operand type of the VM

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod word;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use word::{Word, WordError};

// Re-export primitive-types for full-width conversions
pub use primitive_types::U256;

/// Gas amount. Signed so that an exhausted budget is observable as a negative value.
pub type Gas = i64;

/// Block number as reported by the host.
pub type BlockNumber = i64;
