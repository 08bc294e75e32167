//! # Subscription Errors
//!
//! Validation failures raised by the subscription ledger. All are
//! non-retryable and abort the triggering operation with zero state
//! change.

use thiserror::Error;

use aegis_core::Amount;

/// Errors raised by the subscription ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The caller already has a subscription record.
    #[error("caller already has a subscription")]
    AlreadySubscribed,

    /// The attached payment does not exactly match the tier price.
    #[error("incorrect payment: expected {expected}, got {actual}")]
    IncorrectPayment {
        /// The exact price required.
        expected: Amount,
        /// The payment that was attached.
        actual: Amount,
    },

    /// The caller has no (active) subscription.
    #[error("caller has no active subscription")]
    NoActiveSubscription,

    /// The operation is not available for the caller's tier.
    #[error("operation not available for the current tier")]
    InvalidTier,

    /// The period's verification allowance is exhausted.
    #[error("verification limit reached for the current period")]
    VerificationLimitReached,

    /// There are no collected funds to withdraw.
    #[error("no collected funds to withdraw")]
    NothingToWithdraw,

    /// The caller is not the ledger owner.
    #[error("caller is not the ledger owner")]
    NotOwner,
}
