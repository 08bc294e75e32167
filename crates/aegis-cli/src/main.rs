//! # aegis CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Aegis ID Stack CLI — personhood registry toolchain.
///
/// Runs scripted ledger scenarios against an in-memory stack and inspects
/// the protocol's tier constants.
#[derive(Parser, Debug)]
#[command(name = "aegis", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the end-to-end demo scenario and print the event logs.
    Demo(aegis_cli::demo::DemoArgs),
    /// Print the subscription tier table.
    Tiers(aegis_cli::tiers::TiersArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo(args) => aegis_cli::demo::run(args),
        Commands::Tiers(args) => aegis_cli::tiers::run(args),
    }
}
