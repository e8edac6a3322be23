//! SDK error types

use sol_layout::LayoutError;
use thiserror::Error;

/// SDK error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdkError {
    /// Transport/network error
    #[error("Transport error: {0}")]
    Transport(String),

    /// RPC error from node
    #[error("RPC error: {code} - {message}")]
    Rpc {
        /// Error code
        code: i64,
        /// Error message
        message: String,
    },

    /// The call succeeded but returned no value where one is required
    #[error("No value returned by {method}")]
    MissingValue {
        /// RPC method that came back empty
        method: &'static str,
    },

    /// Account data could not be decoded
    #[error("Account decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A callback-style call was made with no Tokio runtime to run it on
    #[error("No Tokio runtime to dispatch {method} on")]
    NoRuntime {
        /// RPC method that could not be dispatched
        method: &'static str,
    },
}

impl SdkError {
    /// Whether this is the "call succeeded, nothing there" case
    pub fn is_missing_value(&self) -> bool {
        matches!(self, SdkError::MissingValue { .. })
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

/// Account data decode failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Data arrived in an encoding other than base64
    #[error("unsupported account encoding: {0}")]
    UnsupportedEncoding(String),

    /// The `data` field is not a `[payload, encoding]` pair
    #[error("unexpected account data shape: {0}")]
    InvalidShape(String),

    /// The payload tagged as base64 was not valid base64
    #[error("invalid base64 account data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The bytes do not fit the requested layout
    #[error("account data is not a valid {type_name}: {source}")]
    Malformed {
        /// Requested payload type
        type_name: &'static str,
        /// Underlying layout failure
        #[source]
        source: LayoutError,
    },
}
