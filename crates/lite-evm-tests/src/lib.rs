//! # lite-evm-tests
//!
//! Test support for lite-evm.
//!
//! This crate provides:
//! - [`MockedHost`], a shareable in-memory [`lite_evm::Host`] that records calls
//! - A JSON fixture format and [`VmTestRunner`] to execute it
//! - Result aggregation via [`VmTestResults`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod host;
mod types;

pub use error::{TestError, TestResult};
pub use host::{HostCall, MockedHost};
pub use types::*;
pub use vm_test::{VmTestResults, VmTestRunner};
