//! # Groth16 Proof Types
//!
//! The opaque proof triple and public-signal vector emitted by the external
//! proving toolchain. The coordinates are field elements the registry never
//! interprets — it forwards them to the configured [`AgeVerifier`] and acts
//! on the boolean result.
//!
//! [`AgeVerifier`]: crate::traits::AgeVerifier

use serde::{Deserialize, Serialize};

use aegis_core::{Commitment, Uint256};

/// A Groth16 proof: the (A, B, C) curve-point triple in affine coordinates.
///
/// Serialized as hex field elements so proofs can round-trip through JSON
/// scenario files and external indexers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groth16Proof {
    /// The A point (G1, two coordinates).
    pub pi_a: [Uint256; 2],
    /// The B point (G2, two coordinate pairs).
    pub pi_b: [[Uint256; 2]; 2],
    /// The C point (G1, two coordinates).
    pub pi_c: [Uint256; 2],
}

impl Groth16Proof {
    /// A structurally valid all-zero proof, useful as a fixture where the
    /// verifier under test ignores the coordinates.
    pub fn zeroed() -> Self {
        Self {
            pi_a: [Uint256::ZERO; 2],
            pi_b: [[Uint256::ZERO; 2]; 2],
            pi_c: [Uint256::ZERO; 2],
        }
    }
}

/// The public-signal vector bound into an age proof: the identity
/// commitment and the age threshold the circuit was instantiated with.
///
/// Signal order matches the circuit output (`[commitment, ageThreshold]`);
/// the struct form exists so the two cannot be swapped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSignals {
    /// The uniqueness-binding identity commitment.
    pub commitment: Commitment,
    /// The age threshold the proof attests to.
    pub age_threshold: Uint256,
}

impl PublicSignals {
    /// Build the signal vector for a commitment and threshold.
    pub fn new(commitment: Commitment, age_threshold: impl Into<Uint256>) -> Self {
        Self {
            commitment,
            age_threshold: age_threshold.into(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
