//! # sol-layout
//!
//! Decoding of opaque account bytes into typed values.
//!
//! Any type implementing [`BufferLayout`] can be requested from the RPC
//! client's account lookups; the client never inspects the layout itself.
//!
//! ```rust
//! use sol_layout::{BufferLayout, LayoutError, Reader};
//!
//! #[derive(Debug, PartialEq)]
//! struct Counter {
//!     count: u64,
//! }
//!
//! impl BufferLayout for Counter {
//!     fn read(reader: &mut Reader<'_>) -> Result<Self, LayoutError> {
//!         Ok(Counter { count: u64::read(reader)? })
//!     }
//!
//!     fn write(&self, out: &mut Vec<u8>) {
//!         self.count.write(out);
//!     }
//! }
//!
//! let bytes = 7u64.to_le_bytes();
//! assert_eq!(Counter::decode(&bytes).unwrap(), Counter { count: 7 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod option;
mod reader;
pub mod token;
mod traits;

pub use error::LayoutError;
pub use option::{read_coption, write_coption};
pub use reader::Reader;
pub use token::{AccountState, Mint, TokenAccount, TOKEN_PROGRAM_ID};
pub use traits::BufferLayout;
