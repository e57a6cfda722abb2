//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod check;
mod rank;
mod strategies;

pub use check::run_check;
pub use rank::run_rank;
pub use strategies::run_strategies;

// Re-export config types used by handlers
pub use crate::config::SearchConfig;

use std::sync::Arc;

use anyhow::bail;
use clap::ValueEnum;

use crate::config::Validatable;
use crate::matching::{AbbreviationTable, Scorer, StrategyRegistry};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

/// Reject a configuration that fails validation, logging every error.
pub(crate) fn ensure_valid(config: &SearchConfig) -> anyhow::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("{error}");
    }
    bail!("invalid configuration ({} error(s))", errors.len());
}

/// Build a scorer from a validated configuration.
///
/// The abbreviation table degrades to empty if its file is missing or
/// malformed; the strategy identifier must resolve.
pub(crate) fn build_scorer(
    config: &SearchConfig,
    include_token_variants: bool,
) -> crate::error::Result<Scorer> {
    let registry = StrategyRegistry::builtin();
    let strategy = registry.get(&config.strategy)?.clone();

    let mut scorer = Scorer::new(strategy).with_token_variants(include_token_variants);
    if let Some(path) = &config.abbreviations {
        let table = AbbreviationTable::load_or_empty(path);
        scorer = scorer.with_abbreviations(Arc::new(table));
    }
    Ok(scorer)
}
