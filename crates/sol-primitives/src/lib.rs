//! # sol-primitives
//!
//! Primitive types shared by the layout decoders and the RPC client.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod pubkey;

pub use address::Address;
pub use error::PrimitiveError;
pub use pubkey::Pubkey;

/// Slot number, the network's monotonic ordering unit
pub type Slot = u64;

/// Epoch number
pub type Epoch = u64;

/// Balance in lamports
pub type Lamports = u64;

/// Seconds since the Unix epoch
pub type UnixTimestamp = i64;
