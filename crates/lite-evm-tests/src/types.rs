//! Fixture file format
//!
//! A fixture file is a JSON object mapping test names to [`VmTestCase`]s:
//!
//! ```json
//! {
//!   "counter_in_storage": {
//!     "revision": "frontier",
//!     "gas": 6,
//!     "code": "0x600160005401600055",
//!     "destination": "0xd00000000000000000000000000000000000000d",
//!     "pre": { "0x00": "0xbb" },
//!     "expect": { "status": "success", "gasLeft": 0, "post": { "0x00": "0xbc" } }
//!   }
//! }
//! ```

use crate::error::TestResult;
use lite_primitives::{Address, Gas, PrimitiveError, Word};
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

/// Decode a hex string with optional `0x` prefix
pub fn decode_hex(s: &str) -> TestResult<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

/// Parse a hex word, left-padding short values
pub fn parse_word(s: &str) -> TestResult<Word> {
    Ok(Word::from_hex(s).map_err(PrimitiveError::from)?)
}

/// Parse a 20-byte hex address
pub fn parse_address(s: &str) -> TestResult<Address> {
    Ok(Address::from_hex(s).map_err(PrimitiveError::from)?)
}

/// Hex-encoded bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        decode_hex(&s).map(HexBytes).map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded 32-byte word. Short values are left-padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexWord(pub Word);

impl<'de> Deserialize<'de> for HexWord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        parse_word(&s).map(HexWord).map_err(serde::de::Error::custom)
    }
}

/// Hex-encoded address (20 bytes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HexAddress(pub Address);

impl<'de> Deserialize<'de> for HexAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        parse_address(&s).map(HexAddress).map_err(serde::de::Error::custom)
    }
}

/// Storage of the executing account, key to value
pub type StorageMap = HashMap<HexWord, HexWord>;

/// Fixture file structure (test name -> test case), iterated in name order
pub type VmTestFile = BTreeMap<String, VmTestCase>;

/// Single fixture test case
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmTestCase {
    /// Revision name, e.g. "frontier" or "byzantium"
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Gas budget
    pub gas: Gas,
    /// Code to execute
    pub code: HexBytes,
    /// Call data
    #[serde(default)]
    pub input: HexBytes,
    /// Caller address
    #[serde(default)]
    pub sender: HexAddress,
    /// Executing account
    #[serde(default)]
    pub destination: HexAddress,
    /// Block number reported by the host
    #[serde(default)]
    pub block_number: i64,
    /// Storage of `destination` before execution
    #[serde(default)]
    pub pre: StorageMap,
    /// Expected outcome
    pub expect: VmExpect,
}

fn default_revision() -> String {
    "frontier".to_string()
}

/// Expected outcome. Absent fields are not checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmExpect {
    /// Status name, e.g. "success" or "out_of_gas"
    pub status: String,
    /// Gas remaining
    pub gas_left: Option<Gas>,
    /// Output bytes
    pub output: Option<HexBytes>,
    /// Storage of `destination` after execution. Zero values may be omitted.
    pub post: Option<StorageMap>,
}
