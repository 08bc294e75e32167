//! # Verifier Trait
//!
//! Defines the abstract interface for age-proof verification. All
//! implementations (mock, digest-bound, real pairing backends) must satisfy
//! this trait.
//!
//! ## Security Invariant
//!
//! The trait requires `Send + Sync` bounds for safe concurrent access.
//! Verification is a pure function with no side effects. Callers must treat
//! any non-`Ok(true)` result — including `Err` — as proof rejection.

use thiserror::Error;

use crate::groth16::{Groth16Proof, PublicSignals};

/// Error during proof verification.
///
/// The registry never distinguishes these from an invalid proof; the
/// variants exist so operators can diagnose a misbehaving backend.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proof bytes could not be interpreted by the backend.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The verification backend failed internally.
    #[error("verifier backend error: {0}")]
    Backend(String),
}

/// Abstract interface for the age/uniqueness proof verifier.
///
/// Given a proof and its public-signal vector, returns whether the proof is
/// valid for those signals. Implementations hold whatever verifying-key
/// material they need; the registry treats them as a black box.
pub trait AgeVerifier: Send + Sync {
    /// Verify a proof against its public signals.
    fn verify(&self, proof: &Groth16Proof, signals: &PublicSignals)
        -> Result<bool, VerifyError>;
}
