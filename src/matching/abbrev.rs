//! Abbreviation tables and label variant expansion.
//!
//! Player-facing names rarely match stored labels exactly: "rune scimmy" for
//! "rune scimitar", "dds" for "dragon dagger". An [`AbbreviationTable`] maps
//! lowercase labels (or single tokens of labels) to known alternate spellings,
//! and [`AbbreviationTable::expand`] turns one label into the list of variants
//! a scorer should try.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SimscoreError};

/// Lowercase label-to-alternates lookup table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationTable {
    entries: HashMap<String, Vec<String>>,
}

impl AbbreviationTable {
    /// An empty table. Expansion over an empty table yields only the label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from key/alternates pairs, lowercasing both sides.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut table = Self::new();
        for (label, alternates) in entries {
            table.insert(label, alternates);
        }
        table
    }

    /// Add an entry, lowercasing the label and every alternate.
    pub fn insert(&mut self, label: impl Into<String>, alternates: Vec<String>) {
        let label = label.into().to_lowercase();
        let alternates = alternates.into_iter().map(|a| a.to_lowercase()).collect();
        self.entries.insert(label, alternates);
    }

    /// Alternates registered for a label, if any.
    #[must_use]
    pub fn alternates(&self, label: &str) -> Option<&[String]> {
        self.entries
            .get(label.to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// Parse a table from a JSON object of `{"label": ["alt", ...]}`.
    ///
    /// Entries keyed by a blank label are skipped with a warning; only
    /// malformed JSON fails the whole table.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;

        let mut table = Self::new();
        for (key, alternates) in raw {
            if key.trim().is_empty() {
                warn!("Skipping abbreviation entry with a blank label");
                continue;
            }
            table.insert(key, alternates);
        }
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SimscoreError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Load a table, degrading to an empty one if the file is missing or
    /// malformed. A scorer without abbreviations still works, it just
    /// cannot bridge nicknames.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => {
                debug!(
                    path = %path.display(),
                    entries = table.len(),
                    "Loaded abbreviation table"
                );
                table
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load abbreviation table, continuing without one"
                );
                Self::new()
            }
        }
    }

    /// Expand a label into scoring variants. The lowercased label itself is
    /// always the first variant.
    ///
    /// A whole-label entry with at least one alternate takes precedence and
    /// suppresses per-token substitution. Otherwise each whitespace token
    /// with an entry contributes one variant per alternate, substituted at
    /// the token's first occurrence in the label. With `include_tokens` set,
    /// every whitespace token is appended as a variant of its own.
    #[must_use]
    pub fn expand(&self, label: &str, include_tokens: bool) -> Vec<String> {
        let label = label.to_lowercase();
        let mut variants = vec![label.clone()];

        match self.entries.get(label.as_str()) {
            Some(alternates) if !alternates.is_empty() => {
                variants.extend(alternates.iter().cloned());
            }
            _ => {
                for token in label.split_whitespace() {
                    if let Some(alternates) = self.entries.get(token) {
                        for alt in alternates {
                            variants.push(label.replacen(token, alt, 1));
                        }
                    }
                }
            }
        }

        if include_tokens {
            for token in label.split_whitespace() {
                variants.push(token.to_string());
            }
        }

        variants
    }

    /// Number of labels with entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
