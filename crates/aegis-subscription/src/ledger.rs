//! # Subscription Ledger
//!
//! Owns the per-address subscription records and the collected-funds
//! balance. Payments are attached atomically to mutating calls and must
//! match the tier price exactly; the ledger only ever observes the total
//! attached value.
//!
//! ## Expiry Semantics
//!
//! Paid windows are anchored at the action time: `subscribe` and `renew`
//! both set `expires_at = now + SUBSCRIPTION_PERIOD_SECS`. Renewing before
//! expiry therefore forfeits the remainder of the old window rather than
//! stacking it. Free subscriptions never expire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aegis_core::{Amount, Clock, HolderAddress, Timestamp};

use crate::error::SubscriptionError;
use crate::events::SubscriptionEvent;
use crate::tier::{Tier, SUBSCRIPTION_PERIOD_SECS};

/// The per-subscriber record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    /// The subscribed tier.
    pub tier: Tier,
    /// Expiry of the paid window; `None` for Free (always active).
    pub expires_at: Option<Timestamp>,
    /// Verifications consumed in the current period.
    pub verifications_used: u64,
    /// The period's verification allowance, fixed from the tier at
    /// subscribe/renew time.
    pub verification_limit: u64,
}

/// The metered subscription ledger.
pub struct SubscriptionLedger {
    owner: HolderAddress,
    subscriptions: HashMap<HolderAddress, SubscriptionRecord>,
    collected: Amount,
    clock: Box<dyn Clock>,
    events: Vec<SubscriptionEvent>,
}

impl std::fmt::Debug for SubscriptionLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionLedger")
            .field("owner", &self.owner)
            .field("subscriptions", &self.subscriptions.len())
            .field("collected", &self.collected)
            .field("events", &self.events.len())
            .finish()
    }
}

impl SubscriptionLedger {
    /// Create an empty ledger whose collected funds belong to `owner`.
    pub fn new(owner: HolderAddress, clock: Box<dyn Clock>) -> Self {
        Self {
            owner,
            subscriptions: HashMap::new(),
            collected: Amount::ZERO,
            clock,
            events: Vec::new(),
        }
    }

    // -- Mutations ------------------------------------------------------

    /// Create a subscription for the caller.
    ///
    /// The attached payment must equal the tier price exactly (zero for
    /// Free). A caller with any existing record — including an expired
    /// paid one — is rejected; renewal is the only path that extends a
    /// record.
    pub fn subscribe(
        &mut self,
        caller: &HolderAddress,
        tier: Tier,
        payment: Amount,
    ) -> Result<(), SubscriptionError> {
        if self.subscriptions.contains_key(caller) {
            return Err(SubscriptionError::AlreadySubscribed);
        }
        let price = tier.price();
        if payment != price {
            return Err(SubscriptionError::IncorrectPayment {
                expected: price,
                actual: payment,
            });
        }

        let now = self.clock.now();
        let expires_at = tier
            .is_paid()
            .then(|| now.add_secs(SUBSCRIPTION_PERIOD_SECS));
        self.subscriptions.insert(
            caller.clone(),
            SubscriptionRecord {
                tier,
                expires_at,
                verifications_used: 0,
                verification_limit: tier.verification_limit(),
            },
        );
        self.credit(payment);
        self.events.push(SubscriptionEvent::Subscribed {
            subscriber: caller.clone(),
            tier,
            expires_at,
        });
        Ok(())
    }

    /// Renew the caller's paid subscription.
    ///
    /// The new window is anchored at the renewal time, not at the old
    /// expiry, and the usage counter resets. Free records cannot renew.
    pub fn renew(
        &mut self,
        caller: &HolderAddress,
        payment: Amount,
    ) -> Result<(), SubscriptionError> {
        let tier = match self.subscriptions.get(caller) {
            None => return Err(SubscriptionError::NoActiveSubscription),
            Some(record) if record.tier == Tier::Free => {
                return Err(SubscriptionError::InvalidTier)
            }
            Some(record) => record.tier,
        };
        let price = tier.price();
        if payment != price {
            return Err(SubscriptionError::IncorrectPayment {
                expected: price,
                actual: payment,
            });
        }

        let expires_at = self.clock.now().add_secs(SUBSCRIPTION_PERIOD_SECS);
        if let Some(record) = self.subscriptions.get_mut(caller) {
            record.expires_at = Some(expires_at);
            record.verifications_used = 0;
            record.verification_limit = tier.verification_limit();
        }
        self.credit(payment);
        self.events.push(SubscriptionEvent::Renewed {
            subscriber: caller.clone(),
            tier,
            expires_at,
        });
        Ok(())
    }

    /// Consume one verification from the caller's current period.
    ///
    /// Returns the updated usage count. Requires an active subscription
    /// and remaining allowance.
    pub fn record_verification(
        &mut self,
        caller: &HolderAddress,
    ) -> Result<u64, SubscriptionError> {
        if !self.is_active(caller) {
            return Err(SubscriptionError::NoActiveSubscription);
        }
        let record = self
            .subscriptions
            .get_mut(caller)
            .ok_or(SubscriptionError::NoActiveSubscription)?;
        if record.verifications_used >= record.verification_limit {
            return Err(SubscriptionError::VerificationLimitReached);
        }
        record.verifications_used += 1;
        Ok(record.verifications_used)
    }

    /// Withdraw the entire collected balance to the owner.
    ///
    /// Owner-only; fails with [`SubscriptionError::NothingToWithdraw`]
    /// when the balance is zero. Returns the withdrawn amount.
    pub fn withdraw(&mut self, caller: &HolderAddress) -> Result<Amount, SubscriptionError> {
        if caller != &self.owner {
            return Err(SubscriptionError::NotOwner);
        }
        if self.collected.is_zero() {
            return Err(SubscriptionError::NothingToWithdraw);
        }

        let amount = self.collected;
        self.collected = Amount::ZERO;
        self.events.push(SubscriptionEvent::Withdrawn {
            owner: self.owner.clone(),
            amount,
        });
        Ok(amount)
    }

    // -- Views ----------------------------------------------------------

    /// Whether `addr` has an active subscription right now.
    ///
    /// Free subscriptions are always active once created; paid tiers are
    /// active strictly before their expiry instant.
    pub fn is_active(&self, addr: &HolderAddress) -> bool {
        match self.subscriptions.get(addr) {
            None => false,
            Some(record) if record.tier == Tier::Free => true,
            Some(record) => record
                .expires_at
                .is_some_and(|expires| self.clock.now() < expires),
        }
    }

    /// The caller's subscription record, if any.
    pub fn get_subscription(&self, addr: &HolderAddress) -> Option<SubscriptionRecord> {
        self.subscriptions.get(addr).cloned()
    }

    /// The collected, not-yet-withdrawn balance.
    pub fn collected(&self) -> Amount {
        self.collected
    }

    /// The ledger owner principal.
    pub fn owner(&self) -> &HolderAddress {
        &self.owner
    }

    /// The append-only event log.
    pub fn events(&self) -> &[SubscriptionEvent] {
        &self.events
    }

    // -- Internals ------------------------------------------------------

    /// Add an exact-price payment to the collected balance. Saturates at
    /// `u128::MAX`, which is unreachable at protocol prices.
    fn credit(&mut self, payment: Amount) {
        self.collected = self.collected.saturating_add(payment);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
