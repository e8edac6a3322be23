//! Layout error types

use thiserror::Error;

/// Failure while reading a binary layout
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Input ended before the layout was complete
    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes the next field required
        needed: usize,
        /// Bytes left in the input
        remaining: usize,
    },

    /// An enum or option tag held an unknown value
    #[error("invalid tag for {field}: {value}")]
    InvalidTag {
        /// Field being decoded
        field: &'static str,
        /// Tag read from the input
        value: u32,
    },

    /// A boolean byte was neither 0 nor 1
    #[error("invalid bool byte: {0}")]
    InvalidBool(u8),
}
