//! Host boundary
//!
//! The interpreter owns no persistent state. Storage and transaction context
//! live behind [`Host`], which the caller supplies for each execution.

use crate::context::TxContext;
use lite_primitives::{Address, Word};

/// Effect of a storage write, as classified by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageStatus {
    /// Value written without a change worth classifying (e.g. same value)
    Assigned,
    /// Zero slot became non-zero
    Added,
    /// Non-zero slot changed to another non-zero value
    Modified,
    /// Non-zero slot became zero
    Deleted,
}

/// State owned by the surrounding system.
///
/// The interpreter calls these synchronously and treats every call as atomic
/// and immediately consistent. Hosts shared between concurrent executions are
/// responsible for their own synchronization.
pub trait Host {
    /// Read a storage slot. Absent slots read as [`Word::ZERO`].
    fn get_storage(&self, address: &Address, key: &Word) -> Word;

    /// Write a storage slot. Cannot fail from the interpreter's point of view.
    fn set_storage(&mut self, address: &Address, key: &Word, value: &Word) -> StorageStatus;

    /// Current transaction and block context. Queried on every use, never cached.
    fn get_tx_context(&self) -> TxContext;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn get_storage(&self, address: &Address, key: &Word) -> Word {
        (**self).get_storage(address, key)
    }

    fn set_storage(&mut self, address: &Address, key: &Word, value: &Word) -> StorageStatus {
        (**self).set_storage(address, key, value)
    }

    fn get_tx_context(&self) -> TxContext {
        (**self).get_tx_context()
    }
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn get_storage(&self, address: &Address, key: &Word) -> Word {
        (**self).get_storage(address, key)
    }

    fn set_storage(&mut self, address: &Address, key: &Word, value: &Word) -> StorageStatus {
        (**self).set_storage(address, key, value)
    }

    fn get_tx_context(&self) -> TxContext {
        (**self).get_tx_context()
    }
}
