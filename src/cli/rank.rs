//! Ranked retrieval command handler.
//!
//! Scores a query against a file of candidate labels (one per line) and
//! prints the top results.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::{build_scorer, ensure_valid, OutputFormat};
use crate::config::SearchConfig;
use crate::matching::Candidate;

// ============================================================================
// Rank Results
// ============================================================================

/// One ranked result row.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RankedLabel {
    pub rank: usize,
    pub id: u32,
    pub label: String,
    pub score: f64,
}

/// Full rank command result.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RankReport {
    pub query: String,
    pub strategy: String,
    pub candidates: usize,
    pub results: Vec<RankedLabel>,
}

// ============================================================================
// Core Implementation
// ============================================================================

/// Run the rank command.
pub fn run_rank(
    query: &str,
    labels_path: &Path,
    config: &SearchConfig,
    format: OutputFormat,
) -> Result<()> {
    if !config.ranked_enabled {
        bail!("ranked retrieval is disabled in this configuration");
    }
    ensure_valid(config)?;

    let candidates = load_labels(labels_path)?;
    if candidates.is_empty() {
        bail!("no labels found in {}", labels_path.display());
    }
    tracing::info!(
        "Ranking {} labels from {:?} with {}",
        candidates.len(),
        labels_path,
        config.strategy
    );

    let scorer = build_scorer(config, false)?;

    if config.score_debug {
        for candidate in &candidates {
            eprintln!(
                "{:>6.2}  {}",
                scorer.score(query, &candidate.label),
                candidate.label
            );
        }
    }

    let ranked = scorer.rank(query, &candidates, config.max_results);

    let results: Vec<RankedLabel> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| RankedLabel {
            rank: i + 1,
            id: r.id,
            label: candidates
                .get(r.id as usize)
                .map(|c| c.label.clone())
                .unwrap_or_default(),
            score: r.score,
        })
        .collect();

    let report = RankReport {
        query: query.to_string(),
        strategy: config.strategy.clone(),
        candidates: candidates.len(),
        results,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_table(&report)),
    }

    // Exit code: 1 if nothing matched
    if report.results.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Read candidate labels from a file, one per line, skipping blank lines.
/// The candidate id is the label's zero-based position in the file.
fn load_labels(path: &Path) -> Result<Vec<Candidate>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read labels from {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| Candidate::new(i as u32, line))
        .collect())
}

// ============================================================================
// Output Formatting
// ============================================================================

fn format_table(report: &RankReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Query: \"{}\" against {} labels ({})\n\n",
        report.query, report.candidates, report.strategy
    ));

    if report.results.is_empty() {
        out.push_str("0 labels matched\n");
        return out;
    }

    out.push_str("RANK   SCORE  LABEL\n");
    for r in &report.results {
        out.push_str(&format!("{:>4}  {:>6.2}  {}\n", r.rank, r.score, r.label));
    }

    out
}

// ============================================================================
// Tests
// ============================================================================
