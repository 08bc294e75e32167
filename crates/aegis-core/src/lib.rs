//! # aegis-core — Foundational Types for the Aegis ID Stack
//!
//! This crate is the bedrock of the Aegis ID Stack. It defines the
//! type-system primitives shared by the identity registry, the soulbound
//! token ledger, and the subscription ledger. Every other crate in the
//! workspace depends on `aegis-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `HolderAddress`,
//!    `Commitment`, `TokenId`, `Amount` — all newtypes with validated
//!    constructors. No bare strings for identifiers, no bare integers for
//!    money.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. The `Clock` trait is the single seam through which
//!    ledger components observe time, so expiry behavior is deterministic
//!    under test.
//!
//! 3. **Single-writer execution.** `SingleWriter<T>` serializes all
//!    mutations of a shared ledger through one `parking_lot::Mutex`,
//!    matching the transactional model the ledgers assume.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aegis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod payment;
pub mod sync;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use identity::{Commitment, HolderAddress, TokenId, Uint256};
pub use payment::{Amount, ONE_TOKEN};
pub use sync::SingleWriter;
pub use temporal::{Clock, ManualClock, SystemClock, Timestamp};
