//! # Identity Registry
//!
//! Orchestrates proof verification, commitment uniqueness, identity
//! records, and the soulbound token lifecycle. This is the only component
//! allowed to mutate identity state; it presents its own principal address
//! to the token ledger as the minting capability.
//!
//! ## Check Precedence
//!
//! `verify_and_register` evaluates its constraints in a fixed order so that
//! error reporting is deterministic when several are violated at once:
//! already-verified, then commitment-uniqueness, then age-threshold, then
//! proof validity. Tests pin this order.
//!
//! ## Atomicity
//!
//! Every mutating operation is all-or-nothing. All checks run before any
//! mutation; the token mint — the one fallible effect — runs before the
//! registry's own maps are touched, so a mint failure leaves zero state
//! behind.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aegis_core::{Clock, Commitment, HolderAddress, Timestamp, TokenId, Uint256};
use aegis_zkp::{AgeVerifier, Groth16Proof, PublicSignals};

use crate::events::RegistryEvent;
use crate::token::{SoulboundLedger, TokenError};

/// The fixed protocol age threshold. Proofs generated for any other
/// threshold are rejected before the verifier is consulted.
pub const AGE_THRESHOLD: u64 = 18;

/// Errors raised by the identity registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller already has a verified identity.
    #[error("caller is already verified")]
    AlreadyVerified,

    /// The caller has no verified identity to revoke.
    #[error("caller has no verified identity")]
    NotVerified,

    /// The identity commitment was consumed by an earlier registration.
    #[error("identity commitment has already been used")]
    CommitmentAlreadyUsed,

    /// The supplied age threshold is not the protocol constant.
    #[error("age threshold does not match the protocol constant {AGE_THRESHOLD}")]
    InvalidAgeThreshold,

    /// The verifier rejected the proof (or failed; failures count as
    /// rejection).
    #[error("proof rejected by the verifier")]
    InvalidProof,

    /// The token ledger rejected the operation.
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// The per-holder identity record.
///
/// The zero-valued `Default` record doubles as the view result for holders
/// that never registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Whether the holder currently counts as a verified human.
    pub is_human: bool,
    /// Mirror of the age-threshold signal at verification time.
    pub is_over_18: bool,
    /// The commitment bound to this holder; `None` after revocation or if
    /// never registered.
    pub commitment_hash: Option<Commitment>,
    /// The soulbound token currently held; `None` if none.
    pub token_id: Option<TokenId>,
    /// When verification committed. Left unchanged by revocation.
    pub verified_at: Option<Timestamp>,
}

/// The identity registry state machine.
///
/// Generic over the proof verifier so the pairing backend can be swapped
/// without touching the state-transition rules.
pub struct IdentityRegistry<V> {
    address: HolderAddress,
    verifier: V,
    token: SoulboundLedger,
    identities: HashMap<HolderAddress, IdentityRecord>,
    used_commitments: HashSet<Commitment>,
    clock: Box<dyn Clock>,
    events: Vec<RegistryEvent>,
}

impl<V> std::fmt::Debug for IdentityRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("address", &self.address)
            .field("identities", &self.identities.len())
            .field("used_commitments", &self.used_commitments.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl<V: AgeVerifier> IdentityRegistry<V> {
    /// Create a registry over a wired token ledger.
    ///
    /// `address` is the principal this registry presents to the token
    /// ledger; the ledger's owner must have authorized it via
    /// [`SoulboundLedger::set_identity_registry`] for minting to succeed.
    pub fn new(
        address: HolderAddress,
        verifier: V,
        token: SoulboundLedger,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            address,
            verifier,
            token,
            identities: HashMap::new(),
            used_commitments: HashSet::new(),
            clock,
            events: Vec::new(),
        }
    }

    // -- Mutations ------------------------------------------------------

    /// Verify a personhood proof and register the caller.
    ///
    /// On success the caller's record is written, the commitment is
    /// permanently consumed, a soulbound token is minted, and an
    /// [`RegistryEvent::IdentityVerified`] event is appended. Returns the
    /// minted token id.
    ///
    /// # Errors
    ///
    /// In precedence order: [`RegistryError::AlreadyVerified`],
    /// [`RegistryError::CommitmentAlreadyUsed`],
    /// [`RegistryError::InvalidAgeThreshold`],
    /// [`RegistryError::InvalidProof`].
    pub fn verify_and_register(
        &mut self,
        caller: &HolderAddress,
        proof: &Groth16Proof,
        signals: &PublicSignals,
    ) -> Result<TokenId, RegistryError> {
        if self.is_human(caller) {
            return Err(RegistryError::AlreadyVerified);
        }
        if self.used_commitments.contains(&signals.commitment) {
            return Err(RegistryError::CommitmentAlreadyUsed);
        }
        if signals.age_threshold != Uint256::from_u64(AGE_THRESHOLD) {
            return Err(RegistryError::InvalidAgeThreshold);
        }
        // Any non-true verifier result, including backend errors, is
        // rejection.
        match self.verifier.verify(proof, signals) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(RegistryError::InvalidProof),
        }

        // The mint is the only fallible mutation; it commits before the
        // registry's own maps so a failure here leaves no state behind.
        let token_id = self.token.mint(&self.address, caller)?;
        let now = self.clock.now();

        self.used_commitments.insert(signals.commitment);
        self.identities.insert(
            caller.clone(),
            IdentityRecord {
                is_human: true,
                is_over_18: true,
                commitment_hash: Some(signals.commitment),
                token_id: Some(token_id),
                verified_at: Some(now),
            },
        );
        self.events.push(RegistryEvent::IdentityVerified {
            holder: caller.clone(),
            commitment: signals.commitment,
            token_id,
            timestamp: now,
        });
        Ok(token_id)
    }

    /// Revoke the caller's verified identity.
    ///
    /// Burns the soulbound token and clears the record's flags, commitment,
    /// and token id. `verified_at` is left as a historical mark, and the
    /// consumed commitment stays in the used set forever — re-registration
    /// under the same commitment is impossible, even by a new holder.
    pub fn revoke_identity(&mut self, caller: &HolderAddress) -> Result<(), RegistryError> {
        if !self.is_human(caller) {
            return Err(RegistryError::NotVerified);
        }

        let token_id = self.identities.get(caller).and_then(|r| r.token_id);
        if let Some(id) = token_id {
            self.token.burn(&self.address, id)?;
        }

        let now = self.clock.now();
        if let Some(record) = self.identities.get_mut(caller) {
            record.is_human = false;
            record.is_over_18 = false;
            record.commitment_hash = None;
            record.token_id = None;
        }
        self.events.push(RegistryEvent::IdentityRevoked {
            holder: caller.clone(),
            timestamp: now,
        });
        Ok(())
    }

    // -- Views ----------------------------------------------------------

    /// Whether `holder` currently counts as a verified human.
    pub fn is_human(&self, holder: &HolderAddress) -> bool {
        self.identities.get(holder).is_some_and(|r| r.is_human)
    }

    /// Whether `holder` passed the age threshold.
    pub fn is_over_18(&self, holder: &HolderAddress) -> bool {
        self.identities.get(holder).is_some_and(|r| r.is_over_18)
    }

    /// Whether `holder` has a commitment bound (true iff a stored
    /// commitment is present).
    pub fn is_unique(&self, holder: &HolderAddress) -> bool {
        self.identities
            .get(holder)
            .is_some_and(|r| r.commitment_hash.is_some())
    }

    /// The full identity record; zero-valued if the holder never
    /// registered.
    pub fn get_identity(&self, holder: &HolderAddress) -> IdentityRecord {
        self.identities.get(holder).cloned().unwrap_or_default()
    }

    /// Whether `commitment` has ever been consumed by a registration.
    pub fn is_commitment_used(&self, commitment: &Commitment) -> bool {
        self.used_commitments.contains(commitment)
    }

    /// The token ledger, for token-side views.
    pub fn token(&self) -> &SoulboundLedger {
        &self.token
    }

    /// The registry's own principal address.
    pub fn address(&self) -> &HolderAddress {
        &self.address
    }

    /// The append-only event log.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
