//! Execution message and transaction context

use lite_primitives::{Address, BlockNumber, Gas, Word};

/// Kind of call that produced a message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Regular message call
    #[default]
    Call,
    /// DELEGATECALL
    DelegateCall,
    /// CALLCODE
    CallCode,
    /// Contract creation
    Create,
    /// Contract creation at a salted address
    Create2,
}

/// Input to a single execution. Borrowed immutably for its whole duration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// Call kind
    pub kind: CallKind,
    /// Gas budget. May be zero or negative.
    pub gas: Gas,
    /// Account whose code is executed and whose storage is accessed
    pub destination: Address,
    /// Caller address
    pub sender: Address,
    /// Call data
    pub input: Vec<u8>,
}

impl Message {
    /// Create a regular call message
    pub fn call(sender: Address, destination: Address, gas: Gas) -> Self {
        Self {
            sender,
            destination,
            gas,
            ..Default::default()
        }
    }

    /// Set call data
    pub fn with_input(mut self, input: Vec<u8>) -> Self {
        self.input = input;
        self
    }

    /// Set the gas budget
    pub fn with_gas(mut self, gas: Gas) -> Self {
        self.gas = gas;
        self
    }

    /// Set the call kind
    pub fn with_kind(mut self, kind: CallKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Transaction and block information provided by the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxContext {
    /// Transaction gas price
    pub gas_price: Word,
    /// Transaction origin (original sender)
    pub origin: Address,
    /// Block coinbase (miner/validator)
    pub coinbase: Address,
    /// Block number
    pub block_number: BlockNumber,
    /// Block timestamp
    pub timestamp: i64,
    /// Block gas limit
    pub gas_limit: i64,
    /// Block prevrandao (formerly difficulty)
    pub prev_randao: Word,
    /// Chain ID
    pub chain_id: Word,
    /// Base fee (EIP-1559)
    pub base_fee: Word,
}

impl Default for TxContext {
    fn default() -> Self {
        Self {
            gas_price: Word::ZERO,
            origin: Address::ZERO,
            coinbase: Address::ZERO,
            block_number: 0,
            timestamp: 0,
            gas_limit: 30_000_000,
            prev_randao: Word::ZERO,
            chain_id: Word::from_low_u8(1),
            base_fee: Word::ZERO,
        }
    }
}
