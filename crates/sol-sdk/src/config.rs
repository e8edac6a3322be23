//! Client configuration

use serde::{Deserialize, Serialize};
use sol_layout::TOKEN_PROGRAM_ID;
use sol_primitives::Pubkey;
use std::path::Path;
use std::time::Duration;

use crate::types::Commitment;
use crate::SdkError;

/// Explicit client-wide defaults; nothing here is global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Commitment applied when a call leaves it unset; `None` defers to the node
    #[serde(default)]
    pub commitment: Option<Commitment>,
    /// Program expected to own token and mint accounts
    #[serde(default = "default_token_program_id")]
    pub token_program_id: Pubkey,
    /// Per-request HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_rpc_url() -> String {
    "http://localhost:8899".to_string()
}

fn default_token_program_id() -> Pubkey {
    TOKEN_PROGRAM_ID
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: None,
            token_program_id: default_token_program_id(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Config for `rpc_url` with everything else defaulted
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Self::default()
        }
    }

    /// Set the default commitment
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Request timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Parse from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SdkError> {
        toml::from_str(content).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
