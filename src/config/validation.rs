//! Configuration validation for simscore.

use super::types::SearchConfig;
use crate::matching::StrategyRegistry;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for SearchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let registry = StrategyRegistry::builtin();
        if registry.get(&self.strategy).is_err() {
            errors.push(ConfigError {
                field: "strategy".to_string(),
                message: format!(
                    "Unknown strategy '{}'. Valid options: {}",
                    self.strategy,
                    registry
                        .iter()
                        .map(crate::matching::Strategy::id)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        if self.filter_threshold == 0 || self.filter_threshold > 100 {
            errors.push(ConfigError {
                field: "filter_threshold".to_string(),
                message: format!(
                    "Threshold must be between 1 and 100, got {}",
                    self.filter_threshold
                ),
            });
        }

        if self.max_results == 0 {
            errors.push(ConfigError {
                field: "max_results".to_string(),
                message: "Maximum results must be at least 1".to_string(),
            });
        }

        // The abbreviations path is not checked here: a missing or broken
        // table degrades to an empty one at load time.

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SearchConfig::default().is_valid());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let config = SearchConfig::default().with_strategy("soundex");
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "strategy");
        assert!(errors[0].message.contains("bigram-cosine"));
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(!SearchConfig::default().with_threshold(0).is_valid());
        assert!(SearchConfig::default().with_threshold(1).is_valid());
        assert!(SearchConfig::default().with_threshold(100).is_valid());
        assert!(!SearchConfig::default().with_threshold(101).is_valid());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let config = SearchConfig::default().with_max_results(0);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_missing_abbreviations_path_is_not_an_error() {
        let config = SearchConfig::default()
            .with_abbreviations(Some("/nowhere/abbrev.json".into()));
        assert!(config.is_valid());
    }

    #[test]
    fn test_errors_accumulate() {
        let config = SearchConfig::default()
            .with_strategy("bogus")
            .with_threshold(0)
            .with_max_results(0);
        assert_eq!(config.validate().len(), 3);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "filter_threshold".to_string(),
            message: "out of range".to_string(),
        };
        assert_eq!(error.to_string(), "filter_threshold: out of range");
    }
}
