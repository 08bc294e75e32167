//! # aegis-subscription — Metered Subscription Ledger
//!
//! Tracks per-address subscription tier, expiry, and usage, funded by
//! exact-value payments attached to mutating calls. Independent of the
//! identity registry — no shared state, only conceptually co-located in
//! the product.
//!
//! ## Tiers
//!
//! | Tier       | Price        | Verification limit | Expiry          |
//! |------------|--------------|--------------------|-----------------|
//! | Free       | 0            | 100                | never (always active) |
//! | Pro        | 100 tokens   | 10 000             | 30 days         |
//! | Enterprise | 1000 tokens  | unbounded          | 30 days         |
//!
//! Renewal re-anchors the expiry window at the renewal time — renewing
//! late does not stack unused time.

pub mod error;
pub mod events;
pub mod ledger;
pub mod tier;

pub use error::SubscriptionError;
pub use events::SubscriptionEvent;
pub use ledger::{SubscriptionLedger, SubscriptionRecord};
pub use tier::{
    Tier, ENTERPRISE_PRICE, FREE_VERIFICATION_LIMIT, PRO_PRICE, PRO_VERIFICATION_LIMIT,
    SUBSCRIPTION_PERIOD_SECS, UNLIMITED_VERIFICATIONS,
};
