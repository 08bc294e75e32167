//! # Subscription Events
//!
//! Append-only records of subscription lifecycle transitions, observable
//! by external indexers; never consumed internally.

use serde::{Deserialize, Serialize};

use aegis_core::{Amount, HolderAddress, Timestamp};

use crate::tier::Tier;

/// A subscription lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SubscriptionEvent {
    /// A new subscription was created.
    Subscribed {
        /// The subscriber.
        subscriber: HolderAddress,
        /// The chosen tier.
        tier: Tier,
        /// Expiry of the paid window; `None` for Free.
        expires_at: Option<Timestamp>,
    },
    /// A paid subscription was renewed.
    Renewed {
        /// The subscriber.
        subscriber: HolderAddress,
        /// The renewed tier.
        tier: Tier,
        /// The re-anchored expiry.
        expires_at: Timestamp,
    },
    /// The owner withdrew the collected balance.
    Withdrawn {
        /// The ledger owner.
        owner: HolderAddress,
        /// The full amount withdrawn.
        amount: Amount,
    },
}

// ─── Tests ───────────────────────────────────────────────────────────
