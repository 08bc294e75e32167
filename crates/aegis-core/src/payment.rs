//! # Payment Amounts
//!
//! `Amount` is the base-unit payment value attached to mutating
//! subscription calls. One whole token is 10^18 base units, matching the
//! denomination the tier prices were defined in.

use serde::{Deserialize, Serialize};

/// Base units per whole token (10^18).
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// A payment value in base units.
///
/// The ledger can only observe the total attached value of a call, never
/// its source breakdown, so a plain unsigned magnitude is sufficient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Wrap a raw base-unit value.
    pub const fn from_base_units(value: u128) -> Self {
        Self(value)
    }

    /// `n` whole tokens, in base units.
    pub const fn tokens(n: u64) -> Self {
        Self(n as u128 * ONE_TOKEN)
    }

    /// The raw base-unit value.
    pub const fn base_units(&self) -> u128 {
        self.0
    }

    /// Whether this is the zero amount.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
