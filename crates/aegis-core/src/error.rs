//! # Error Types — Construction-Time Input Rejection
//!
//! Validation errors for the core newtypes. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Component-level errors (registry, token, subscription) live with their
//! components; this crate only rejects malformed raw inputs at the
//! constructor boundary.

use thiserror::Error;

/// Error constructing a core newtype from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a valid `0x`-prefixed 20-byte hex address.
    #[error("invalid holder address: {0:?}")]
    InvalidAddress(String),

    /// The string is not a valid `0x`-prefixed 256-bit hex value.
    #[error("invalid 256-bit value: {0:?}")]
    InvalidUint(String),

    /// The value is outside the representable timestamp range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
