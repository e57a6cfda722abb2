//! Query-to-label similarity scoring.
//!
//! The engine answers two questions about a short free-form query and a set
//! of candidate labels:
//!
//! - **filter**: does this query plausibly refer to this one label?
//!   ([`Scorer::matches`], a threshold on the 0-100 score)
//! - **rank**: which K labels does the query most plausibly refer to?
//!   ([`Scorer::rank`], a bounded top-K pass over the candidate set)
//!
//! Scoring itself is pluggable through [`StrategyRegistry`], and labels are
//! expanded through an [`AbbreviationTable`] before scoring so that community
//! nicknames ("rune scimmy") land on the stored label ("Rune Scimitar").

pub mod abbrev;
pub mod cosine;
pub mod metric;
pub mod ngram;
pub mod rank;
pub mod strategy;

pub use abbrev::AbbreviationTable;
pub use ngram::{NGramVector, WeightScheme, DEFAULT_WINDOW};
pub use rank::{ScoredCandidate, TopK};
pub use strategy::{MetricFn, ScoreFamily, Strategy, StrategyRegistry, DEFAULT_STRATEGY};

use std::sync::Arc;

use rayon::prelude::*;

/// Candidate sets larger than this are scored on the rayon pool.
const PARALLEL_THRESHOLD: usize = 64;

/// A label with a stable caller-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub label: String,
}

impl Candidate {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Scoring engine: one strategy plus an abbreviation table.
///
/// A `Scorer` is cheap to clone and safe to share across threads; the
/// abbreviation table sits behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Scorer {
    strategy: Strategy,
    abbreviations: Arc<AbbreviationTable>,
    include_token_variants: bool,
}

impl Scorer {
    /// A scorer with the given strategy and no abbreviations.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            abbreviations: Arc::new(AbbreviationTable::new()),
            include_token_variants: false,
        }
    }

    /// Attach an abbreviation table used to expand labels before scoring.
    #[must_use]
    pub fn with_abbreviations(mut self, table: Arc<AbbreviationTable>) -> Self {
        self.abbreviations = table;
        self
    }

    /// Also score each raw whitespace token of the label as its own variant.
    /// Acceptable for filter calls where any word of the label counting as a
    /// hit is wanted; too permissive for ranking.
    #[must_use]
    pub fn with_token_variants(mut self, include: bool) -> Self {
        self.include_token_variants = include;
        self
    }

    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Score `query` against `label` on the 0-100 scale, taking the best
    /// scoring variant of the label.
    #[must_use]
    pub fn score(&self, query: &str, label: &str) -> f64 {
        if query.is_empty() || label.is_empty() {
            return 0.0;
        }

        self.abbreviations
            .expand(label, self.include_token_variants)
            .iter()
            .map(|variant| self.strategy.apply(query, variant))
            .fold(0.0, f64::max)
    }

    /// Binary filter decision: does the score reach `threshold` (inclusive)?
    #[must_use]
    pub fn matches(&self, query: &str, label: &str, threshold: u8) -> bool {
        self.score(query, label) >= f64::from(threshold)
    }

    /// Rank `candidates` against `query`, returning the best `limit` results
    /// in descending score order with ties broken by candidate position.
    /// Every candidate is offered, zero scores included, so the result holds
    /// exactly `limit` entries whenever the set is at least that large.
    #[must_use]
    pub fn rank(
        &self,
        query: &str,
        candidates: &[Candidate],
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let top = if candidates.len() > PARALLEL_THRESHOLD {
            candidates
                .par_iter()
                .enumerate()
                .fold(
                    || TopK::new(limit),
                    |mut top, (index, candidate)| {
                        let score = self.score(query, &candidate.label);
                        top.insert(candidate.id, score, index);
                        top
                    },
                )
                .reduce(|| TopK::new(limit), TopK::merge)
        } else {
            let mut top = TopK::new(limit);
            for (index, candidate) in candidates.iter().enumerate() {
                let score = self.score(query, &candidate.label);
                top.insert(candidate.id, score, index);
            }
            top
        };

        top.into_sorted_vec()
    }
}

impl Default for Scorer {
    /// A scorer over the default strategy with no abbreviations.
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
