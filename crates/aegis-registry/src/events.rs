//! # Registry Events
//!
//! Append-only records of identity lifecycle transitions, observable by
//! external indexers. Events are never consumed internally — the ledger
//! state, not the log, is authoritative.

use serde::{Deserialize, Serialize};

use aegis_core::{Commitment, HolderAddress, Timestamp, TokenId};

/// An identity lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A holder passed verification and received a soulbound token.
    IdentityVerified {
        /// The verified holder.
        holder: HolderAddress,
        /// The consumed identity commitment.
        commitment: Commitment,
        /// The freshly minted token.
        token_id: TokenId,
        /// When verification committed.
        timestamp: Timestamp,
    },
    /// A holder revoked their verified identity.
    IdentityRevoked {
        /// The revoking holder.
        holder: HolderAddress,
        /// When revocation committed.
        timestamp: Timestamp,
    },
}

// ─── Tests ───────────────────────────────────────────────────────────
