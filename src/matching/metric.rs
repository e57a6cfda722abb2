//! Classic string metrics wrapped to the common `fn(&str, &str) -> f64` shape.

use std::collections::HashSet;

/// Jaccard similarity over the character sets of both texts.
///
/// `|A ∩ B| / |A ∪ B|` in `[0, 1]`. Two empty texts have an empty union and
/// score 0 here; callers gate empty inputs before the metric runs.
#[must_use]
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union > 0 {
        intersection as f64 / union as f64
    } else {
        0.0
    }
}

/// Jaro-Winkler similarity in `[0, 1]`, prefix-boosted.
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Levenshtein edit distance as a float.
///
/// This is a raw distance, not a similarity: larger means further apart.
/// Normalization into `[0, 100]` happens at the strategy layer.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> f64 {
    strsim::levenshtein(a, b) as f64
}
