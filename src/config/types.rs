//! Configuration types for simscore.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default inclusive filter threshold on the 0-100 scale.
pub const DEFAULT_FILTER_THRESHOLD: u8 = 70;

/// Default result cap for ranked retrieval.
pub const DEFAULT_MAX_RESULTS: usize = 36;

// ============================================================================
// Search Configuration
// ============================================================================

/// Engine configuration, loadable from a JSON file or built from CLI args.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Strategy identifier, resolved against the registry at startup.
    pub strategy: String,
    /// Inclusive 0-100 threshold for the binary filter mode.
    pub filter_threshold: u8,
    /// Whether filter mode is available.
    pub filter_enabled: bool,
    /// Whether ranked retrieval mode is available.
    pub ranked_enabled: bool,
    /// Maximum number of ranked results returned.
    pub max_results: usize,
    /// Print per-candidate scores while ranking.
    pub score_debug: bool,
    /// Optional path to an abbreviation table JSON file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviations: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: crate::matching::DEFAULT_STRATEGY.to_string(),
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
            filter_enabled: true,
            ranked_enabled: true,
            max_results: DEFAULT_MAX_RESULTS,
            score_debug: false,
            abbreviations: None,
        }
    }
}

impl SearchConfig {
    /// Create a new `SearchConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset that only accepts near-certain matches.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            filter_threshold: 85,
            ..Self::default()
        }
    }

    /// Preset that lets marginal matches through the filter.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            filter_threshold: 55,
            ..Self::default()
        }
    }

    /// Create a config from a named preset.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            "lenient" | "permissive" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Override the strategy identifier.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Override the filter threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.filter_threshold = threshold;
        self
    }

    /// Override the ranked result cap.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Point at an abbreviation table file.
    #[must_use]
    pub fn with_abbreviations(mut self, path: Option<PathBuf>) -> Self {
        self.abbreviations = path;
        self
    }

    /// Toggle per-candidate score printing.
    #[must_use]
    pub const fn with_score_debug(mut self, debug: bool) -> Self {
        self.score_debug = debug;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
