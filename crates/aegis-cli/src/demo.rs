//! # Demo Scenario
//!
//! Drives the full identity + subscription lifecycle against an in-memory
//! stack with a manually advanced clock and the deterministic
//! digest-bound verifier, then prints both event logs as JSON.
//!
//! The scripted rejections (duplicate commitment, post-revocation
//! re-registration) are part of the scenario and are reported, not
//! treated as failures.

use anyhow::Context;
use serde::Serialize;

use aegis_core::{Commitment, HolderAddress, ManualClock, Timestamp};
use aegis_registry::{IdentityRegistry, RegistryEvent, SoulboundLedger, AGE_THRESHOLD};
use aegis_subscription::{
    SubscriptionEvent, SubscriptionLedger, Tier, SUBSCRIPTION_PERIOD_SECS,
};
use aegis_zkp::{DigestBoundVerifier, PublicSignals};

/// Arguments for `aegis demo`.
#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Epoch second the simulated clock starts at.
    #[arg(long, default_value_t = 1_700_000_000)]
    pub start_epoch: i64,
}

/// The demo's printed result: both append-only event logs.
#[derive(Debug, Serialize)]
struct DemoReport {
    registry_events: Vec<RegistryEvent>,
    subscription_events: Vec<SubscriptionEvent>,
}

/// Run the demo scenario.
pub fn run(args: DemoArgs) -> anyhow::Result<()> {
    let start = Timestamp::from_epoch_secs(args.start_epoch)
        .with_context(|| format!("invalid --start-epoch {}", args.start_epoch))?;
    let clock = ManualClock::new(start);

    let admin = address(0xa);
    let registry_principal = address(0xb);
    let alice = address(0x100);
    let bob = address(0x200);

    // Wire the token ledger to the registry principal, then hand it over.
    let mut token = SoulboundLedger::new(admin.clone());
    token
        .set_identity_registry(&admin, registry_principal.clone())
        .context("wiring token ledger")?;
    let mut registry = IdentityRegistry::new(
        registry_principal,
        DigestBoundVerifier,
        token,
        Box::new(clock.clone()),
    );
    let mut subscriptions = SubscriptionLedger::new(admin.clone(), Box::new(clock.clone()));

    // Alice proves personhood and registers.
    let alice_signals = PublicSignals::new(Commitment::from_u64(12345), AGE_THRESHOLD);
    let alice_proof = DigestBoundVerifier::bind(&alice_signals);
    let token_id = registry
        .verify_and_register(&alice, &alice_proof, &alice_signals)
        .context("registering alice")?;
    tracing::info!(holder = %alice, %token_id, "identity verified");

    // Bob replays Alice's commitment — rejected.
    if let Err(err) = registry.verify_and_register(&bob, &alice_proof, &alice_signals) {
        tracing::info!(holder = %bob, %err, "replayed commitment rejected");
    }

    // Bob registers with his own commitment.
    let bob_signals = PublicSignals::new(Commitment::from_u64(67890), AGE_THRESHOLD);
    let bob_proof = DigestBoundVerifier::bind(&bob_signals);
    registry
        .verify_and_register(&bob, &bob_proof, &bob_signals)
        .context("registering bob")?;

    // Alice revokes; her commitment stays consumed forever.
    registry.revoke_identity(&alice).context("revoking alice")?;
    if let Err(err) = registry.verify_and_register(&alice, &alice_proof, &alice_signals) {
        tracing::info!(holder = %alice, %err, "post-revocation re-registration rejected");
    }

    // Bob takes a Pro subscription and meters a few verifications.
    subscriptions
        .subscribe(&bob, Tier::Pro, Tier::Pro.price())
        .context("subscribing bob")?;
    for _ in 0..3 {
        subscriptions
            .record_verification(&bob)
            .context("metering bob")?;
    }

    // The window lapses; renewal re-anchors it at the renewal time.
    clock.advance_secs(SUBSCRIPTION_PERIOD_SECS + 1);
    tracing::info!(active = subscriptions.is_active(&bob), "after expiry");
    subscriptions
        .renew(&bob, Tier::Pro.price())
        .context("renewing bob")?;

    // The admin sweeps the collected funds.
    let withdrawn = subscriptions.withdraw(&admin).context("withdrawing")?;
    tracing::info!(amount = %withdrawn, "collected balance withdrawn");

    let report = DemoReport {
        registry_events: registry.events().to_vec(),
        subscription_events: subscriptions.events().to_vec(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("rendering report")?
    );
    Ok(())
}

/// A fixture address: `n` rendered into the canonical 20-byte hex form.
fn address(n: u64) -> HolderAddress {
    // The format string always yields 40 hex digits, so construction
    // cannot fail.
    HolderAddress::new(format!("0x{n:040x}")).expect("fixture address is well-formed")
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_to_completion() {
        run(DemoArgs {
            start_epoch: 1_700_000_000,
        })
        .unwrap();
    }

    #[test]
    fn demo_rejects_bad_epoch() {
        assert!(run(DemoArgs {
            start_epoch: i64::MAX
        })
        .is_err());
    }
}
