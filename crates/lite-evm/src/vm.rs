//! VM instance: identity, options and the execute entry point

use crate::config::{SetOptionResult, VmConfig};
use crate::context::Message;
use crate::host::Host;
use crate::interpreter::Interpreter;
use crate::result::ExecutionResult;
use crate::revision::Revision;
use std::fmt;
use std::ops::BitOr;

/// Interface version implemented by [`Vm`]
pub const ABI_VERSION: u32 = 12;

/// Set of code kinds a VM can execute
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u32);

impl Capabilities {
    /// EVM1 bytecode
    pub const EVM1: Self = Self(1 << 0);
    /// eWASM bytecode
    pub const EWASM: Self = Self(1 << 1);
    /// Precompiled contracts
    pub const PRECOMPILES: Self = Self(1 << 2);

    /// Empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every capability in `other` is present
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capabilities({:#05b})", self.0)
    }
}

/// A configured interpreter instance.
///
/// `execute` takes `&self`, so one VM can serve many executions at once
/// provided each has its own host. Options are changed through `&mut self`
/// and cannot race with running executions.
#[derive(Clone, Debug, Default)]
pub struct Vm {
    config: VmConfig,
}

impl Vm {
    /// Create a VM with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a VM with the given options
    pub fn with_config(config: VmConfig) -> Self {
        Self { config }
    }

    /// Current options
    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    /// Implementation name
    pub fn name(&self) -> &'static str {
        "lite_evm"
    }

    /// Implementation version
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Interface version, see [`ABI_VERSION`]
    pub fn abi_version(&self) -> u32 {
        ABI_VERSION
    }

    /// Code kinds this VM executes
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::EVM1
    }

    /// Set a named option. Only `verbose` is recognized.
    pub fn set_option(&mut self, name: &str, value: &str) -> SetOptionResult {
        let result = self.config.set_option(name, value);
        match result {
            SetOptionResult::Success => {
                tracing::debug!(option = name, value, verbose = self.config.verbose, "option set")
            }
            _ => tracing::debug!(option = name, value, ?result, "option rejected"),
        }
        result
    }

    /// Execute `code` under `message` against `host`
    pub fn execute<H: Host + ?Sized>(
        &self,
        host: &mut H,
        revision: Revision,
        message: &Message,
        code: &[u8],
    ) -> ExecutionResult {
        if self.config.logs_execution() {
            tracing::info!(
                %revision,
                gas = message.gas,
                code_size = code.len(),
                "execution started"
            );
        }

        let result = Interpreter::new(host, revision, message, code, self.config).run();

        if self.config.logs_execution() {
            tracing::info!(
                status = %result.status,
                gas_left = result.gas_left,
                output_size = result.output.len(),
                "execution finished"
            );
        }

        result
    }
}
