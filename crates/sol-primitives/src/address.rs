//! Textual account address

use std::fmt;

use crate::{PrimitiveError, Pubkey};

/// Account address in the base58 text form used on the wire.
///
/// The RPC layer passes addresses through verbatim; use [`Address::to_pubkey`]
/// when the raw 32 bytes are needed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Address(String);

impl Address {
    /// Wrap an address string
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    /// Borrow the address text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into a 32-byte public key
    pub fn to_pubkey(&self) -> Result<Pubkey, PrimitiveError> {
        Pubkey::from_base58(&self.0)
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Address(s)
    }
}

impl From<Pubkey> for Address {
    fn from(key: Pubkey) -> Self {
        Address(key.to_base58())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Address {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
