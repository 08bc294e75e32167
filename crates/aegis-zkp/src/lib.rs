//! # aegis-zkp — Proof Verifier Boundary
//!
//! The identity registry consumes zero-knowledge proofs; it does not
//! produce them, and it does not perform the elliptic-curve pairing check
//! itself. This crate defines that boundary: the [`AgeVerifier`] trait, the
//! opaque Groth16 proof and public-signal types the external prover SDK
//! emits, and two development verifiers.
//!
//! Proof *generation* lives in an external circuit toolchain. A production
//! deployment implements [`AgeVerifier`] over a real pairing backend; the
//! registry is generic over the trait, so mock and real implementations are
//! interchangeable at compile time.

pub mod groth16;
pub mod mock;
pub mod traits;

pub use groth16::{Groth16Proof, PublicSignals};
pub use mock::{DigestBoundVerifier, MockVerifier};
pub use traits::{AgeVerifier, VerifyError};
