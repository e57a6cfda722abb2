//! Matching strategies and the strategy registry.
//!
//! A [`Strategy`] binds an identifier to a raw metric plus a [`ScoreFamily`]
//! that tells the engine how to map the raw value onto the 0-100 scale.
//! Strategies are looked up by identifier in a [`StrategyRegistry`]; unknown
//! identifiers fail fast rather than falling back to a default.

use serde::{Deserialize, Serialize};

use super::cosine;
use super::metric;
use super::ngram::{WeightScheme, DEFAULT_WINDOW};
use crate::error::{Result, SimscoreError};
use indexmap::IndexMap;

/// Identifier of the strategy used when none is configured.
pub const DEFAULT_STRATEGY: &str = "bigram-cosine";

/// Raw metric signature shared by every strategy.
pub type MetricFn = fn(&str, &str) -> f64;

/// Whether a metric reports similarity (higher is better) or distance
/// (lower is better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFamily {
    Similarity,
    Distance,
}

impl ScoreFamily {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::Distance => "distance",
        }
    }

    /// Map a raw metric value onto the 0-100 scale.
    ///
    /// Distances are normalized against the longer of the two full input
    /// strings in characters, even when the raw value came from a
    /// whitespace token of `text`.
    fn normalize(self, raw: f64, query: &str, text: &str) -> f64 {
        match self {
            Self::Similarity => raw * 100.0,
            Self::Distance => {
                let max_len = query.chars().count().max(text.chars().count());
                if max_len == 0 {
                    return 0.0;
                }
                (1.0 - raw / max_len as f64) * 100.0
            }
        }
    }
}

/// A named scoring strategy.
#[derive(Debug, Clone)]
pub struct Strategy {
    id: String,
    family: ScoreFamily,
    metric: MetricFn,
}

impl Strategy {
    pub fn new(id: impl Into<String>, family: ScoreFamily, metric: MetricFn) -> Self {
        Self {
            id: id.into(),
            family,
            metric,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn family(&self) -> ScoreFamily {
        self.family
    }

    /// Score `query` against `text`, returning a value on the 0-100 scale.
    ///
    /// Both inputs are lowercased. The raw metric runs once over the full
    /// strings and once per whitespace token of `text`; the largest raw value
    /// is normalized. The fold is a plain maximum for both families, so a
    /// distance metric keeps its worst comparison and a multi-word text lands
    /// below 100 even against itself.
    /// Empty input on either side short-circuits to 0.
    #[must_use]
    pub fn apply(&self, query: &str, text: &str) -> f64 {
        if query.is_empty() || text.is_empty() {
            return 0.0;
        }

        let query = query.to_lowercase();
        let text = text.to_lowercase();

        let mut best = (self.metric)(&query, &text);
        for token in text.split_whitespace() {
            best = best.max((self.metric)(&query, token));
        }

        self.family.normalize(best, &query, &text)
    }
}

impl Default for Strategy {
    /// The positional bigram cosine strategy, [`DEFAULT_STRATEGY`].
    fn default() -> Self {
        Self::new(DEFAULT_STRATEGY, ScoreFamily::Similarity, bigram_cosine)
    }
}

// ============================================================================
// Built-in metrics
// ============================================================================

fn bigram_cosine(query: &str, text: &str) -> f64 {
    cosine::cosine(query, text, DEFAULT_WINDOW, WeightScheme::Positional)
}

fn penalized_cosine(query: &str, text: &str) -> f64 {
    cosine::length_penalized(query, text, DEFAULT_WINDOW, WeightScheme::Uniform)
}

// ============================================================================
// Registry
// ============================================================================

/// Registry of known strategies, preserving registration order for listings.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: IndexMap<String, Strategy>,
}

impl StrategyRegistry {
    /// An empty registry with no strategies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: IndexMap::new(),
        }
    }

    /// The registry of built-in strategies.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_STRATEGY, ScoreFamily::Similarity, bigram_cosine);
        registry.register("penalized-cosine", ScoreFamily::Similarity, penalized_cosine);
        registry.register("jaccard", ScoreFamily::Similarity, metric::jaccard);
        registry.register("jaro-winkler", ScoreFamily::Similarity, metric::jaro_winkler);
        registry.register(
            "levenshtein",
            ScoreFamily::Distance,
            metric::levenshtein_distance,
        );
        registry
    }

    /// Register a strategy under a (lowercased) identifier.
    ///
    /// Re-registering an identifier replaces the existing strategy but keeps
    /// its position in the listing order.
    pub fn register(&mut self, id: impl Into<String>, family: ScoreFamily, metric: MetricFn) {
        let id = id.into().to_lowercase();
        let strategy = Strategy::new(id.clone(), family, metric);
        self.strategies.insert(id, strategy);
    }

    /// Look up a strategy by identifier, case-insensitively.
    pub fn get(&self, name: &str) -> Result<&Strategy> {
        let key = name.to_lowercase();
        self.strategies.get(key.as_str()).ok_or_else(|| {
            let registered = self
                .strategies
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            SimscoreError::unknown_strategy(name, registered)
        })
    }

    /// Iterate strategies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(name: &str) -> Strategy {
        StrategyRegistry::builtin()
            .get(name)
            .map(Strategy::clone)
            .unwrap()
    }

    #[test]
    fn test_default_strategy_favors_prefix_token() {
        let strategy = builtin(DEFAULT_STRATEGY);
        let score = strategy.apply("adm", "Adamant platebody");
        assert!(score > 70.0, "got {}", score);
        assert!((score - 73.24).abs() < 0.05, "got {}", score);

        // the "adamant" token, not the full label, produces the best raw value
        let unsplit =
            cosine::cosine("adm", "adamant platebody", DEFAULT_WINDOW, WeightScheme::Positional)
                * 100.0;
        assert!(score > unsplit, "{} vs {}", score, unsplit);
    }

    #[test]
    fn test_identical_strings_score_hundred() {
        let strategy = builtin("penalized-cosine");
        let score = strategy.apply("scimitar", "scimitar");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        for strategy in StrategyRegistry::builtin().iter() {
            assert_eq!(strategy.apply("", "anything"), 0.0, "{}", strategy.id());
            assert_eq!(strategy.apply("query", ""), 0.0, "{}", strategy.id());
            assert_eq!(strategy.apply("", ""), 0.0, "{}", strategy.id());
        }
    }

    #[test]
    fn test_case_folding_before_scoring() {
        let strategy = builtin("jaccard");
        assert_eq!(strategy.apply("ABC", "abc"), strategy.apply("abc", "abc"));
    }

    #[test]
    fn test_levenshtein_normalizes_to_exact_percentage() {
        let strategy = builtin("levenshtein");
        // one edit against max length four
        assert_eq!(strategy.apply("cat", "cats"), 75.0);
    }

    #[test]
    fn test_levenshtein_keeps_worst_comparison() {
        let strategy = builtin("levenshtein");

        // The token pass compares the full query against "rune" (distance 9),
        // which overrides the zero-distance full comparison: a multi-word
        // label never reaches 100, not even against itself.
        let identity = strategy.apply("rune scimitar", "rune scimitar");
        assert_eq!(identity, (1.0 - 9.0 / 13.0) * 100.0);

        // With a short query the full comparison supplies the maximum
        // (distance 9 beats 4 against either token).
        let partial = strategy.apply("scim", "rune scimitar");
        assert_eq!(partial, (1.0 - 9.0 / 13.0) * 100.0);
    }

    #[test]
    fn test_similarity_takes_best_token() {
        let strategy = builtin("penalized-cosine");
        let whole = strategy.apply("scimitar", "scimitar");
        let in_label = strategy.apply("scimitar", "rune scimitar");
        assert_eq!(whole, in_label);
    }

    #[test]
    fn test_registry_lookup_is_case_insensitive() {
        let registry = StrategyRegistry::builtin();
        assert!(registry.get("Bigram-Cosine").is_ok());
        assert!(registry.get("LEVENSHTEIN").is_ok());
    }

    #[test]
    fn test_unknown_strategy_is_an_error() {
        let registry = StrategyRegistry::builtin();
        let err = registry.get("sorensen-dice").unwrap_err();
        assert!(err.to_string().contains("Strategy"));
    }

    #[test]
    fn test_listing_preserves_registration_order() {
        let registry = StrategyRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(Strategy::id).collect();
        assert_eq!(
            ids,
            vec![
                "bigram-cosine",
                "penalized-cosine",
                "jaccard",
                "jaro-winkler",
                "levenshtein"
            ]
        );
    }

    #[test]
    fn test_custom_registration() {
        fn exact(a: &str, b: &str) -> f64 {
            if a == b {
                1.0
            } else {
                0.0
            }
        }

        let mut registry = StrategyRegistry::builtin();
        registry.register("exact", ScoreFamily::Similarity, exact);
        let strategy = registry.get("exact").unwrap();
        assert_eq!(strategy.apply("same", "same"), 100.0);
        assert_eq!(strategy.apply("same", "other"), 0.0);
    }
}
