//! # aegis-registry — Identity State Machine
//!
//! The central state machine of the Aegis ID Stack: converts a valid
//! zero-knowledge personhood proof into durable, non-transferable ledger
//! state, and tears that state down again on revocation.
//!
//! ## Components
//!
//! - [`SoulboundLedger`] — the 1:1 holder ↔ token mapping. Mint and burn
//!   are restricted to the single authorized registry principal; transfer
//!   entry points reject unconditionally.
//! - [`IdentityRegistry`] — orchestrates proof verification, commitment
//!   uniqueness, identity records, and drives the token ledger. Generic
//!   over the verifier so mock and real backends are interchangeable at
//!   compile time.
//!
//! ## Invariants
//!
//! - At most one holder ever registers a given commitment, across the
//!   entire history of the ledger — consumed commitments are never
//!   released, even after revocation.
//! - Token ids are strictly increasing and never reused.
//! - Every mutating operation is all-or-nothing; a failed constraint
//!   leaves zero state behind.

pub mod events;
pub mod registry;
pub mod token;

pub use events::RegistryEvent;
pub use registry::{IdentityRecord, IdentityRegistry, RegistryError, AGE_THRESHOLD};
pub use token::{SoulboundLedger, TokenError, TOKEN_NAME, TOKEN_SYMBOL};
