//! SDK types

use serde::{Deserialize, Serialize};
use sol_primitives::{Epoch, Slot};
use std::fmt;

/// Commitment level requested for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    /// Most recent block seen by the node
    Processed,
    /// Voted on by a supermajority
    Confirmed,
    /// Rooted; will not be rolled back
    Finalized,
}

/// Wire encoding of account data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountEncoding {
    /// Base58, slow and size-limited
    #[serde(rename = "base58")]
    Base58,
    /// Base64, the only encoding the account decoder accepts
    #[serde(rename = "base64")]
    Base64,
    /// Zstd-compressed base64
    #[serde(rename = "base64+zstd")]
    Base64Zstd,
    /// Program-specific JSON
    #[serde(rename = "jsonParsed")]
    JsonParsed,
}

impl AccountEncoding {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountEncoding::Base58 => "base58",
            AccountEncoding::Base64 => "base64",
            AccountEncoding::Base64Zstd => "base64+zstd",
            AccountEncoding::JsonParsed => "jsonParsed",
        }
    }
}

impl fmt::Display for AccountEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range of account data to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSlice {
    /// Start offset
    pub offset: usize,
    /// Number of bytes
    pub length: usize,
}

/// Optional modifiers sent as the trailing configuration object.
///
/// Absent fields are left out of the JSON entirely; an empty configuration
/// is not sent at all (see [`Params`](crate::Params)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfiguration {
    /// Commitment level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    /// Account data encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<AccountEncoding>,
    /// Account data range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_slice: Option<DataSlice>,
    /// Minimum slot the node must have reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_context_slot: Option<Slot>,
}

impl RequestConfiguration {
    /// Empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: Option<Commitment>) -> Self {
        self.commitment = commitment;
        self
    }

    /// Set the account data encoding
    pub fn with_encoding(mut self, encoding: AccountEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Restrict returned account data to a byte range
    pub fn with_data_slice(mut self, offset: usize, length: usize) -> Self {
        self.data_slice = Some(DataSlice { offset, length });
        self
    }

    /// Require the node to have reached `slot`
    pub fn with_min_context_slot(mut self, slot: Slot) -> Self {
        self.min_context_slot = Some(slot);
        self
    }

    /// True when every field is absent
    pub fn is_empty(&self) -> bool {
        self.commitment.is_none()
            && self.encoding.is_none()
            && self.data_slice.is_none()
            && self.min_context_slot.is_none()
    }
}

/// Metadata attached to enveloped responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Slot the response was evaluated at
    pub slot: Slot,
    /// Node software version, when reported
    #[serde(default)]
    pub api_version: Option<String>,
}

/// `{context, value}` response envelope.
///
/// An absent or null `value` means the call succeeded with nothing at the
/// requested address; it is never a transport failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rpc<T> {
    /// Response context
    pub context: Context,
    /// Decoded value
    pub value: Option<T>,
}

/// Result of `getEpochInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochInfo {
    /// Current slot
    pub absolute_slot: Slot,
    /// Current block height
    pub block_height: u64,
    /// Current epoch
    pub epoch: Epoch,
    /// Slot offset within the epoch
    pub slot_index: u64,
    /// Slots in this epoch
    pub slots_in_epoch: u64,
    /// Transactions processed since genesis
    #[serde(default)]
    pub transaction_count: Option<u64>,
}
