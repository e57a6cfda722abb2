//! Query-to-label similarity scoring and top-K retrieval.
//!
//! simscore scores short free-form queries ("rune scimmy", "adm plate")
//! against candidate labels on a 0-100 scale. It answers two questions:
//!
//! - **filter**: does this query plausibly refer to this one label?
//!   A binary yes/no at a configurable threshold.
//! - **rank**: which K labels of a candidate set does the query most
//!   plausibly refer to? A bounded top-K pass, parallelized for large sets.
//!
//! Scoring strategies are pluggable: the default is a positionally weighted
//! character bigram cosine that rewards shared prefixes, and the registry
//! also carries a length-penalized cosine, Jaccard, Jaro-Winkler and
//! Levenshtein. Labels pass through an abbreviation table before scoring so
//! community nicknames land on their stored labels.
//!
//! # Example
//!
//! ```
//! use simscore::{Candidate, Scorer};
//!
//! let scorer = Scorer::default();
//!
//! // filter: does "adm" plausibly refer to this label?
//! assert!(scorer.matches("adm", "Adamant platebody", 70));
//!
//! // rank: best K labels for a query
//! let candidates = vec![
//!     Candidate::new(0, "Adamant platebody"),
//!     Candidate::new(1, "Rune platebody"),
//!     Candidate::new(2, "Shark"),
//! ];
//! let results = scorer.rank("adm plate", &candidates, 2);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].id, 0);
//! ```

#![warn(clippy::unwrap_used)]
// Scoring math converts usize lengths and gram counts to f64 throughout.
#![allow(clippy::cast_precision_loss)]
// Failure modes are documented on the error enums themselves.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;

pub use config::{ConfigError, SearchConfig, Validatable};
pub use error::{Result, SimscoreError};
pub use matching::{
    AbbreviationTable, Candidate, NGramVector, ScoreFamily, ScoredCandidate, Scorer, Strategy,
    StrategyRegistry, TopK, WeightScheme,
};
