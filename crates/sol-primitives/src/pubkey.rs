//! 32-byte public key

use std::fmt;
use std::str::FromStr;

use crate::PrimitiveError;

/// Ed25519 public key, rendered as base58
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// All-zero key, used by layouts where an optional key is absent
    pub const ZERO: Pubkey = Pubkey([0u8; 32]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    /// Create from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
        if slice.len() != Self::LEN {
            return Err(PrimitiveError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Pubkey(bytes))
    }

    /// Parse from base58 text
    pub fn from_base58(s: &str) -> Result<Self, PrimitiveError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| PrimitiveError::InvalidBase58(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to base58 text
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Pubkey {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Pubkey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_base58())
        }
    }

    impl<'de> Deserialize<'de> for Pubkey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Pubkey::from_base58(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    #[test]
    fn test_pubkey_base58_roundtrip() {
        let key = Pubkey::from_base58(TOKEN_PROGRAM).unwrap();
        assert_eq!(key.to_base58(), TOKEN_PROGRAM);
        assert_eq!(key.to_string(), TOKEN_PROGRAM);
    }

    #[test]
    fn test_zero_pubkey_text() {
        assert_eq!(Pubkey::ZERO.to_base58(), "11111111111111111111111111111111");
    }

    #[test]
    fn test_pubkey_invalid_chars() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet
        let result = Pubkey::from_base58("0OIl");
        assert!(matches!(result, Err(PrimitiveError::InvalidBase58(_))));
    }

    #[test]
    fn test_pubkey_from_slice_wrong_length() {
        assert_eq!(
            Pubkey::from_slice(&[1u8; 31]),
            Err(PrimitiveError::InvalidLength(31))
        );
        assert!(Pubkey::from_slice(&[1u8; 32]).is_ok());
    }

    #[test]
    fn test_pubkey_from_str() {
        let key: Pubkey = TOKEN_PROGRAM.parse().unwrap();
        assert_eq!(key, Pubkey::from_base58(TOKEN_PROGRAM).unwrap());
    }
}
