//! # Tier Table
//!
//! Prints the protocol's subscription tier constants as JSON.

use serde::Serialize;

use aegis_subscription::{Tier, SUBSCRIPTION_PERIOD_SECS, UNLIMITED_VERIFICATIONS};

/// Arguments for `aegis tiers`.
#[derive(clap::Args, Debug)]
pub struct TiersArgs {}

/// One row of the printed tier table.
#[derive(Debug, Serialize)]
struct TierRow {
    tier: Tier,
    /// Price in base units, rendered as a string so indexer-side JSON
    /// parsers need no 128-bit integer support.
    price_base_units: String,
    /// `null` means unbounded.
    verification_limit: Option<u64>,
    /// `null` means the tier never expires.
    period_secs: Option<i64>,
}

/// Print the tier table.
pub fn run(_args: TiersArgs) -> anyhow::Result<()> {
    let rows: Vec<TierRow> = [Tier::Free, Tier::Pro, Tier::Enterprise]
        .into_iter()
        .map(|tier| TierRow {
            tier,
            price_base_units: tier.price().base_units().to_string(),
            verification_limit: match tier.verification_limit() {
                UNLIMITED_VERIFICATIONS => None,
                limit => Some(limit),
            },
            period_secs: tier.is_paid().then_some(SUBSCRIPTION_PERIOD_SECS),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────
