//! In-memory host for tests

use lite_evm::{Host, StorageStatus, TxContext};
use lite_primitives::{Address, BlockNumber, Word};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A host call observed by [`MockedHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// Storage read
    GetStorage {
        /// Account
        address: Address,
        /// Slot
        key: Word,
    },
    /// Storage write
    SetStorage {
        /// Account
        address: Address,
        /// Slot
        key: Word,
        /// New value
        value: Word,
        /// Classification returned to the VM
        status: StorageStatus,
    },
    /// Transaction context query
    GetTxContext,
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<Address, HashMap<Word, Word>>,
    tx_context: TxContext,
    recorded: Vec<HostCall>,
}

/// Host backed by in-memory maps.
///
/// Cloning yields a handle to the same state, so executions on different
/// threads through clones of one host observe a single store. Each host call
/// takes the lock once and is atomic.
#[derive(Debug, Clone, Default)]
pub struct MockedHost {
    state: Arc<RwLock<State>>,
}

impl MockedHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a storage slot without recording a call
    pub fn set_storage_value(&self, address: &Address, key: &Word, value: &Word) {
        let mut state = self.state.write();
        let storage = state.accounts.entry(*address).or_default();
        if value.is_zero() {
            storage.remove(key);
        } else {
            storage.insert(*key, *value);
        }
    }

    /// Read a storage slot without recording a call
    pub fn storage_value(&self, address: &Address, key: &Word) -> Word {
        self.state
            .read()
            .accounts
            .get(address)
            .and_then(|storage| storage.get(key))
            .copied()
            .unwrap_or_default()
    }

    /// Non-zero storage slots of an account
    pub fn storage(&self, address: &Address) -> HashMap<Word, Word> {
        self.state
            .read()
            .accounts
            .get(address)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace the transaction context
    pub fn set_tx_context(&self, tx_context: TxContext) {
        self.state.write().tx_context = tx_context;
    }

    /// Set the block number reported by the transaction context
    pub fn set_block_number(&self, block_number: BlockNumber) {
        self.state.write().tx_context.block_number = block_number;
    }

    /// Host calls made so far, in order
    pub fn recorded_calls(&self) -> Vec<HostCall> {
        self.state.read().recorded.clone()
    }

    /// Forget recorded host calls
    pub fn clear_recorded_calls(&self) {
        self.state.write().recorded.clear();
    }
}

impl Host for MockedHost {
    fn get_storage(&self, address: &Address, key: &Word) -> Word {
        let mut state = self.state.write();
        state.recorded.push(HostCall::GetStorage {
            address: *address,
            key: *key,
        });
        let value = state
            .accounts
            .get(address)
            .and_then(|storage| storage.get(key))
            .copied()
            .unwrap_or_default();

        tracing::debug!(%address, %key, %value, "get_storage");
        value
    }

    fn set_storage(&mut self, address: &Address, key: &Word, value: &Word) -> StorageStatus {
        let mut state = self.state.write();
        let storage = state.accounts.entry(*address).or_default();
        let current = storage.get(key).copied().unwrap_or_default();

        let status = if current == *value {
            StorageStatus::Assigned
        } else if current.is_zero() {
            StorageStatus::Added
        } else if value.is_zero() {
            StorageStatus::Deleted
        } else {
            StorageStatus::Modified
        };

        if value.is_zero() {
            storage.remove(key);
        } else {
            storage.insert(*key, *value);
        }
        state.recorded.push(HostCall::SetStorage {
            address: *address,
            key: *key,
            value: *value,
            status,
        });

        tracing::debug!(%address, %key, %value, ?status, "set_storage");
        status
    }

    fn get_tx_context(&self) -> TxContext {
        let mut state = self.state.write();
        state.recorded.push(HostCall::GetTxContext);
        state.tx_context.clone()
    }
}
