//! # Development Verifiers
//!
//! Two [`AgeVerifier`] implementations for development and testing.
//! Neither provides zero-knowledge guarantees; both exist so the registry's
//! state machine can be exercised without a pairing backend.
//!
//! - [`MockVerifier`] — a toggleable accept/reject/error switch.
//! - [`DigestBoundVerifier`] — deterministic SHA-256 recompute-and-compare:
//!   a proof is valid iff its first A coordinate equals the digest of the
//!   public signals. Transparent — anyone can forge a passing proof from
//!   the public inputs.

use std::sync::Arc;

use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use aegis_core::Uint256;

use crate::groth16::{Groth16Proof, PublicSignals};
use crate::traits::{AgeVerifier, VerifyError};

/// What the [`MockVerifier`] does with the next verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockMode {
    Accept,
    Reject,
    Error,
}

/// A toggleable verifier for registry tests.
///
/// Cloning shares the toggle, so a test can keep a handle and flip the
/// outcome after the registry has taken ownership of its clone.
#[derive(Debug, Clone)]
pub struct MockVerifier {
    mode: Arc<Mutex<MockMode>>,
}

impl MockVerifier {
    /// A verifier that accepts every proof.
    pub fn accepting() -> Self {
        Self {
            mode: Arc::new(Mutex::new(MockMode::Accept)),
        }
    }

    /// A verifier that rejects every proof.
    pub fn rejecting() -> Self {
        Self {
            mode: Arc::new(Mutex::new(MockMode::Reject)),
        }
    }

    /// A verifier whose backend fails on every call. Callers are required
    /// to treat the error as rejection.
    pub fn erroring() -> Self {
        Self {
            mode: Arc::new(Mutex::new(MockMode::Error)),
        }
    }

    /// Flip between accepting and rejecting.
    pub fn set_should_verify(&self, should_verify: bool) {
        *self.mode.lock() = if should_verify {
            MockMode::Accept
        } else {
            MockMode::Reject
        };
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::accepting()
    }
}

impl AgeVerifier for MockVerifier {
    fn verify(
        &self,
        _proof: &Groth16Proof,
        _signals: &PublicSignals,
    ) -> Result<bool, VerifyError> {
        match *self.mode.lock() {
            MockMode::Accept => Ok(true),
            MockMode::Reject => Ok(false),
            MockMode::Error => Err(VerifyError::Backend(
                "mock backend configured to fail".to_string(),
            )),
        }
    }
}

/// A deterministic, transparent development verifier.
///
/// Accepts a proof iff `proof.pi_a[0]` equals
/// `SHA256(commitment_bytes || age_threshold_bytes)`. Verification is pure
/// recomputation; [`DigestBoundVerifier::bind`] produces the matching proof.
///
/// **NOT PRIVATE.** The binding is a plain hash of the public inputs, so
/// anyone can construct an accepting proof. This implementation exists for
/// scripted simulations where the registry's state transitions — not the
/// cryptography — are under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestBoundVerifier;

impl DigestBoundVerifier {
    /// Compute the signal digest: `SHA256(commitment || age_threshold)`.
    fn signal_digest(signals: &PublicSignals) -> Uint256 {
        let mut hasher = Sha256::new();
        hasher.update(signals.commitment.to_be_bytes());
        hasher.update(signals.age_threshold.to_be_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        Uint256::from_be_bytes(digest)
    }

    /// Construct the proof this verifier accepts for `signals`.
    pub fn bind(signals: &PublicSignals) -> Groth16Proof {
        let mut proof = Groth16Proof::zeroed();
        proof.pi_a[0] = Self::signal_digest(signals);
        proof
    }
}

impl AgeVerifier for DigestBoundVerifier {
    fn verify(
        &self,
        proof: &Groth16Proof,
        signals: &PublicSignals,
    ) -> Result<bool, VerifyError> {
        Ok(proof.pi_a[0] == Self::signal_digest(signals))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_core::Commitment;

    fn signals() -> PublicSignals {
        PublicSignals::new(Commitment::from_u64(12345), 18u64)
    }

    // -- MockVerifier --

    #[test]
    fn mock_accepting_accepts() {
        let verifier = MockVerifier::accepting();
        assert!(verifier.verify(&Groth16Proof::zeroed(), &signals()).unwrap());
    }

    #[test]
    fn mock_rejecting_rejects() {
        let verifier = MockVerifier::rejecting();
        assert!(!verifier.verify(&Groth16Proof::zeroed(), &signals()).unwrap());
    }

    #[test]
    fn mock_erroring_errors() {
        let verifier = MockVerifier::erroring();
        let result = verifier.verify(&Groth16Proof::zeroed(), &signals());
        assert!(matches!(result, Err(VerifyError::Backend(_))));
    }

    #[test]
    fn mock_toggle_is_shared_across_clones() {
        let verifier = MockVerifier::accepting();
        let handle = verifier.clone();
        handle.set_should_verify(false);
        assert!(!verifier.verify(&Groth16Proof::zeroed(), &signals()).unwrap());
        handle.set_should_verify(true);
        assert!(verifier.verify(&Groth16Proof::zeroed(), &signals()).unwrap());
    }

    // -- DigestBoundVerifier --

    #[test]
    fn bound_proof_verifies() {
        let proof = DigestBoundVerifier::bind(&signals());
        assert!(DigestBoundVerifier.verify(&proof, &signals()).unwrap());
    }

    #[test]
    fn bound_proof_is_deterministic() {
        assert_eq!(
            DigestBoundVerifier::bind(&signals()),
            DigestBoundVerifier::bind(&signals())
        );
    }

    #[test]
    fn zeroed_proof_is_rejected() {
        assert!(!DigestBoundVerifier
            .verify(&Groth16Proof::zeroed(), &signals())
            .unwrap());
    }

    #[test]
    fn proof_does_not_verify_for_other_signals() {
        let proof = DigestBoundVerifier::bind(&signals());
        let other = PublicSignals::new(Commitment::from_u64(67890), 18u64);
        assert!(!DigestBoundVerifier.verify(&proof, &other).unwrap());
    }

    #[test]
    fn threshold_changes_the_binding() {
        let proof = DigestBoundVerifier::bind(&signals());
        let wrong_threshold = PublicSignals::new(Commitment::from_u64(12345), 21u64);
        assert!(!DigestBoundVerifier.verify(&proof, &wrong_threshold).unwrap());
    }
}
