//! # sol-sdk
//!
//! Typed JSON-RPC client with generic account decoding.
//!
//! ## Features
//!
//! - **Api**: one facade method per endpoint, in callback and `async` form
//! - **Command**: an RPC call as a value, executable against any `Api`
//! - **Account decoding**: base64 account data into any [`BufferLayout`] type
//! - **Transport**: pluggable; HTTP and mock implementations included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sol_sdk::{Address, Api, ClientConfig, Commitment, TokenAccount};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Api::connect(ClientConfig::new("https://api.devnet.solana.com"))?;
//!
//!     let slot = api.get_slot(Some(Commitment::Finalized)).await?;
//!     println!("Slot: {}", slot);
//!
//!     let account = Address::new("2wmVCSfPxGPjrnMMn7rchp4uaeoTqN39mXFC2zhPdri9");
//!     let info = api.get_account_info::<TokenAccount>(&account).await?;
//!     println!("Token balance: {}", info.data.amount);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Commands
//!
//! ```rust
//! use sol_sdk::{templates, Api, MockTransport};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let transport = MockTransport::new();
//! transport.set_response("getBlockTime", json!(1_700_000_000));
//! let api = Api::with_transport(transport);
//!
//! let commands = vec![templates::get_block_time(10), templates::get_block_time(11)];
//! let times = api.execute_all(&commands).await;
//! assert_eq!(times.len(), 2);
//! # }
//! ```
//!
//! [`BufferLayout`]: sol_layout::BufferLayout

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
mod api;
pub mod bridge;
mod command;
mod config;
mod error;
mod params;
pub mod templates;
mod transport;
pub mod types;

pub use account::{
    decode_account, decode_account_value, decode_optional_account_value, AccountInfo, RawAccount,
};
pub use api::Api;
pub use command::{Command, NullPolicy, ResponseShape};
pub use config::ClientConfig;
pub use error::{DecodeError, SdkError};
pub use params::Params;
pub use transport::{MockTransport, RecordedRequest};
pub use types::{AccountEncoding, Commitment, Context, EpochInfo, RequestConfiguration, Rpc};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export primitives and layouts for convenience
pub use sol_layout::{
    AccountState, BufferLayout, LayoutError, Mint, Reader, TokenAccount, TOKEN_PROGRAM_ID,
};
pub use sol_primitives::{Address, Epoch, Lamports, Pubkey, Slot, UnixTimestamp};
