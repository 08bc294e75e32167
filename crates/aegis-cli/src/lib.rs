//! # aegis-cli — Operator Tooling
//!
//! Subcommand handlers for the `aegis` binary. Each module owns one
//! subcommand: its clap argument struct and its `run()` entry point.

pub mod demo;
pub mod tiers;
