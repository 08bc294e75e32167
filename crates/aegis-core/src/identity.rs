//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the identifiers flowing through the Aegis
//! ID Stack. Each identifier is a distinct type — you cannot pass a
//! [`Commitment`] where a [`HolderAddress`] is expected.
//!
//! ## Validation
//!
//! [`HolderAddress`] and [`Uint256`] validate their textual form at
//! construction time and at deserialization time. [`TokenId`] and
//! [`Commitment`] are valid by construction.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for newtypes that must validate
/// their contents. Deserializes as a plain `String`, then routes through the
/// type's constructor so that invalid values are rejected at
/// deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident, $ctor:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::$ctor(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// HolderAddress
// ---------------------------------------------------------------------------

/// The unforgeable caller principal: a 20-byte account address.
///
/// Canonical storage format is `0x` followed by 40 lowercase hex digits.
/// The constructor accepts mixed-case input and lowercases it; everything
/// else is rejected.
///
/// The execution environment — not the caller — supplies this value for
/// every mutating operation. Ledger components compare addresses, they never
/// derive them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HolderAddress(String);

impl_validating_deserialize!(HolderAddress, new);

impl HolderAddress {
    /// Create an address from a string, validating the `0x` + 40-hex-digit
    /// format and lowercasing to canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] if the input is not a
    /// `0x`-prefixed 20-byte hex string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = match raw.strip_prefix("0x") {
            Some(d) => d,
            None => return Err(ValidationError::InvalidAddress(raw)),
        };
        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidAddress(raw));
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// Access the canonical `0x`-prefixed lowercase form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HolderAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Uint256
// ---------------------------------------------------------------------------

/// An unsigned 256-bit integer, stored as 32 big-endian bytes.
///
/// The stack only ever compares, hashes, and displays these values — the
/// proof coordinates and public signals are opaque field elements — so no
/// arithmetic is provided beyond construction from native integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// The zero value.
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// Construct from a native `u64`.
    pub const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Construct from a native `u128`.
    pub const fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 16 {
            bytes[16 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Construct from 32 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The 32 big-endian bytes of this value.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Parse a `0x`-prefixed hex string of 1 to 64 digits.
    ///
    /// Shorter strings are left-padded with zeros, matching the usual
    /// big-integer hex convention (`0x3039` == 12345).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUint`] if the prefix is missing,
    /// the digit count is 0 or above 64, or a non-hex character appears.
    pub fn parse_hex(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = match raw.strip_prefix("0x") {
            Some(d) => d,
            None => return Err(ValidationError::InvalidUint(raw)),
        };
        if digits.is_empty()
            || digits.len() > 64
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ValidationError::InvalidUint(raw));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let pos = i * 2;
            // Padded to exactly 64 hex digits above; the slice and parse
            // cannot fail.
            *chunk = u8::from_str_radix(&padded[pos..pos + 2], 16)
                .map_err(|_| ValidationError::InvalidUint(raw.clone()))?;
        }
        Ok(Self(bytes))
    }

    /// Render as minimal `0x`-prefixed lowercase hex (`0x0` for zero).
    pub fn to_hex(&self) -> String {
        let full: String = self.0.iter().map(|b| format!("{b:02x}")).collect();
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }
}

impl std::fmt::Display for Uint256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u64> for Uint256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl_validating_deserialize!(Uint256, parse_hex);

// ---------------------------------------------------------------------------
// Commitment
// ---------------------------------------------------------------------------

/// The uniqueness-binding identity commitment (a nullifier): a one-way value
/// derived from a verified identity document, unique per person per
/// application context.
///
/// Consuming a commitment is permanent — once the registry accepts it, it can
/// never be registered again, by any holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(Uint256);

impl Commitment {
    /// Wrap a 256-bit value as a commitment.
    pub const fn new(value: Uint256) -> Self {
        Self(value)
    }

    /// Construct from a native `u64` (convenient for fixtures and the CLI).
    pub const fn from_u64(value: u64) -> Self {
        Self(Uint256::from_u64(value))
    }

    /// Access the underlying 256-bit value.
    pub const fn as_uint(&self) -> &Uint256 {
        &self.0
    }

    /// The 32 big-endian bytes of the commitment value.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// A soulbound token identifier.
///
/// Ids are allocated by the token ledger as a strictly increasing sequence
/// starting at 1. A burned id is never reissued.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenId(u64);

impl TokenId {
    /// Wrap a raw token id.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw numeric id.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -- HolderAddress --

    #[test]
    fn address_valid_lowercase() {
        let addr = HolderAddress::new("0x00000000000000000000000000000000000000a1").unwrap();
        assert_eq!(addr.as_str(), "0x00000000000000000000000000000000000000a1");
    }

    #[test]
    fn address_mixed_case_canonicalized() {
        let addr = HolderAddress::new("0x00000000000000000000000000000000000000A1").unwrap();
        assert_eq!(addr.as_str(), "0x00000000000000000000000000000000000000a1");
    }

    #[test]
    fn address_rejects_invalid() {
        assert!(HolderAddress::new("").is_err());
        assert!(HolderAddress::new("0x").is_err());
        assert!(HolderAddress::new("00000000000000000000000000000000000000a1").is_err()); // no 0x
        assert!(HolderAddress::new("0x0000000000000000000000000000000000000a1").is_err()); // 39
        assert!(HolderAddress::new("0x00000000000000000000000000000000000000a1b").is_err()); // 41
        assert!(HolderAddress::new("0x0000000000000000000000000000000000000zzz").is_err()); // non-hex
    }

    #[test]
    fn address_display_matches_canonical() {
        let addr = HolderAddress::new("0x00000000000000000000000000000000000000FF").unwrap();
        assert_eq!(format!("{addr}"), "0x00000000000000000000000000000000000000ff");
    }

    #[test]
    fn address_serde_roundtrip() {
        let addr = HolderAddress::new("0x00000000000000000000000000000000000000a1").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        let parsed: HolderAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn address_deserialize_rejects_invalid() {
        let result: Result<HolderAddress, _> = serde_json::from_str("\"not-an-address\"");
        assert!(result.is_err());
    }

    // -- Uint256 --

    #[test]
    fn uint_from_u64_hex() {
        assert_eq!(Uint256::from_u64(12345).to_hex(), "0x3039");
        assert_eq!(Uint256::from_u64(0).to_hex(), "0x0");
        assert_eq!(Uint256::from_u64(18).to_hex(), "0x12");
    }

    #[test]
    fn uint_parse_hex_left_pads() {
        let parsed = Uint256::parse_hex("0x3039").unwrap();
        assert_eq!(parsed, Uint256::from_u64(12345));
    }

    #[test]
    fn uint_parse_full_width() {
        let s = format!("0x{}", "ff".repeat(32));
        let parsed = Uint256::parse_hex(s).unwrap();
        assert_eq!(parsed.to_be_bytes(), [0xff; 32]);
    }

    #[test]
    fn uint_parse_rejects_invalid() {
        assert!(Uint256::parse_hex("").is_err());
        assert!(Uint256::parse_hex("0x").is_err());
        assert!(Uint256::parse_hex("3039").is_err()); // no prefix
        assert!(Uint256::parse_hex("0xzz").is_err()); // non-hex
        assert!(Uint256::parse_hex(format!("0x{}", "0".repeat(65))).is_err()); // too long
    }

    #[test]
    fn uint_zero_checks() {
        assert!(Uint256::ZERO.is_zero());
        assert!(!Uint256::from_u64(1).is_zero());
    }

    #[test]
    fn uint_from_u128_wide_value() {
        let value = u128::from(u64::MAX) + 1;
        let uint = Uint256::from_u128(value);
        assert_eq!(uint.to_hex(), "0x10000000000000000");
    }

    #[test]
    fn uint_serde_roundtrip() {
        let uint = Uint256::from_u64(67890);
        let json = serde_json::to_string(&uint).unwrap();
        assert_eq!(json, "\"0x10932\"");
        let parsed: Uint256 = serde_json::from_str(&json).unwrap();
        assert_eq!(uint, parsed);
    }

    proptest! {
        #[test]
        fn uint_hex_roundtrip(value: u128) {
            let uint = Uint256::from_u128(value);
            let parsed = Uint256::parse_hex(uint.to_hex()).unwrap();
            prop_assert_eq!(uint, parsed);
        }
    }

    // -- Commitment --

    #[test]
    fn commitment_wraps_uint() {
        let c = Commitment::from_u64(12345);
        assert_eq!(c.as_uint(), &Uint256::from_u64(12345));
        assert_eq!(format!("{c}"), "0x3039");
    }

    #[test]
    fn commitment_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Commitment::from_u64(1));
        set.insert(Commitment::from_u64(2));
        set.insert(Commitment::from_u64(1));
        assert_eq!(set.len(), 2);
    }

    // -- TokenId --

    #[test]
    fn token_id_value_and_display() {
        let id = TokenId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{id}"), "7");
    }

    #[test]
    fn token_id_ordering() {
        assert!(TokenId::new(1) < TokenId::new(2));
    }
}
