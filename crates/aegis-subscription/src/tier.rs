//! # Subscription Tiers
//!
//! The three fixed protocol tiers with their prices, verification limits,
//! and the paid-tier duration window. All values are named constants so
//! tier semantics stay auditable and testable independent of wall-clock
//! quirks.

use serde::{Deserialize, Serialize};

use aegis_core::Amount;

use crate::error::SubscriptionError;

/// Duration of a paid subscription window: 30 days, in seconds.
pub const SUBSCRIPTION_PERIOD_SECS: i64 = 30 * 24 * 60 * 60;

/// Verification allowance of the Free tier.
pub const FREE_VERIFICATION_LIMIT: u64 = 100;

/// Verification allowance of the Pro tier.
pub const PRO_VERIFICATION_LIMIT: u64 = 10_000;

/// Sentinel for an unbounded verification allowance (Enterprise).
pub const UNLIMITED_VERIFICATIONS: u64 = u64::MAX;

/// Price of the Pro tier.
pub const PRO_PRICE: Amount = Amount::tokens(100);

/// Price of the Enterprise tier.
pub const ENTERPRISE_PRICE: Amount = Amount::tokens(1000);

/// A subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// No payment, no expiry, 100 verifications.
    Free,
    /// 100 tokens for 30 days, 10 000 verifications.
    Pro,
    /// 1000 tokens for 30 days, unbounded verifications.
    Enterprise,
}

impl Tier {
    /// The exact payment this tier requires.
    pub const fn price(&self) -> Amount {
        match self {
            Self::Free => Amount::ZERO,
            Self::Pro => PRO_PRICE,
            Self::Enterprise => ENTERPRISE_PRICE,
        }
    }

    /// The per-period verification allowance.
    pub const fn verification_limit(&self) -> u64 {
        match self {
            Self::Free => FREE_VERIFICATION_LIMIT,
            Self::Pro => PRO_VERIFICATION_LIMIT,
            Self::Enterprise => UNLIMITED_VERIFICATIONS,
        }
    }

    /// Whether the tier carries a 30-day expiry window.
    pub const fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }

    /// The string representation of this tier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Pro => "PRO",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Tier {
    type Error = SubscriptionError;

    /// Decode the external tier discriminant (`0 | 1 | 2`).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Free),
            1 => Ok(Self::Pro),
            2 => Ok(Self::Enterprise),
            _ => Err(SubscriptionError::InvalidTier),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
