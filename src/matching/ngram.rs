//! Sparse character n-gram vectors.
//!
//! A text is decomposed into overlapping windows of `window` characters and
//! accumulated into a sparse weight map. Repeated grams add their weights, so
//! "aaa" with window 2 yields `{"aa": w0 + w1}` rather than a set membership.
//!
//! Two weighting schemes are supported: [`WeightScheme::Uniform`] counts every
//! occurrence as 1.0, while [`WeightScheme::Positional`] discounts later
//! windows as `1 / (1 + offset)`, which rewards matches near the front of the
//! text. Short queries against long labels score much higher under positional
//! weighting because the unmatched tail of the label contributes little mass.

use std::collections::HashMap;

/// Window width used by the built-in strategies (character bigrams).
pub const DEFAULT_WINDOW: usize = 2;

/// How much weight a single n-gram occurrence contributes to the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightScheme {
    /// Every occurrence contributes 1.0 regardless of position.
    Uniform,
    /// An occurrence starting at character offset `i` contributes `1 / (1 + i)`.
    Positional,
}

impl WeightScheme {
    fn weight_at(self, offset: usize) -> f64 {
        match self {
            Self::Uniform => 1.0,
            Self::Positional => 1.0 / (1.0 + offset as f64),
        }
    }
}

/// Sparse n-gram weight vector over a single text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NGramVector {
    weights: HashMap<String, f64>,
}

impl NGramVector {
    /// Build the n-gram vector for `text`.
    ///
    /// Texts shorter than `window` characters (and a window of 0) produce an
    /// empty vector, which has magnitude 0 and scores 0 against anything.
    #[must_use]
    pub fn build(text: &str, window: usize, scheme: WeightScheme) -> Self {
        if window == 0 || text.len() < window {
            return Self::default();
        }

        let mut weights = HashMap::new();

        if text.is_ascii() {
            // Fast path: byte windows are char windows for ASCII
            for (i, chunk) in text.as_bytes().windows(window).enumerate() {
                // SAFETY: input verified as ASCII, all byte windows are valid UTF-8
                let gram = unsafe { std::str::from_utf8_unchecked(chunk) };
                // only allocate the key on first sight of a gram
                if let Some(weight) = weights.get_mut(gram) {
                    *weight += scheme.weight_at(i);
                } else {
                    weights.insert(gram.to_string(), scheme.weight_at(i));
                }
            }
        } else {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() < window {
                return Self::default();
            }
            for (i, chunk) in chars.windows(window).enumerate() {
                let gram: String = chunk.iter().collect();
                *weights.entry(gram).or_insert(0.0) += scheme.weight_at(i);
            }
        }

        Self { weights }
    }

    /// Dot product against another vector, iterating the smaller side.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };

        small
            .iter()
            .filter_map(|(gram, w)| large.get(gram).map(|v| w * v))
            .sum()
    }

    /// Euclidean norm of the weight vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Accumulated weight for a specific gram, if present.
    #[must_use]
    pub fn weight(&self, gram: &str) -> Option<f64> {
        self.weights.get(gram).copied()
    }

    /// Number of distinct grams in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
