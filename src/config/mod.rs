//! Configuration module for simscore.
//!
//! This module provides:
//! - A type-safe [`SearchConfig`] with named presets
//! - Validation for all configuration values
//! - JSON config file loading
//!
//! # Quick Start
//!
//! ```rust
//! use simscore::config::{SearchConfig, Validatable};
//!
//! // Use defaults
//! let config = SearchConfig::default();
//! assert!(config.is_valid());
//!
//! // Use a preset with overrides
//! let config = SearchConfig::strict().with_max_results(10);
//! assert_eq!(config.filter_threshold, 85);
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{load_config_file, load_or_default};
pub use types::{SearchConfig, DEFAULT_FILTER_THRESHOLD, DEFAULT_MAX_RESULTS};
pub use validation::{ConfigError, Validatable};
