//! Cosine similarity over character n-gram vectors.

use super::ngram::{NGramVector, WeightScheme};

/// Cosine similarity between the n-gram vectors of two texts.
///
/// Returns a value in `[0, 1]`. If either vector is empty (text shorter than
/// the window), the result is 0.
#[must_use]
pub fn cosine(left: &str, right: &str, window: usize, scheme: WeightScheme) -> f64 {
    let a = NGramVector::build(left, window, scheme);
    let b = NGramVector::build(right, window, scheme);

    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(&b) / denom
}

/// Cosine similarity with a directional length penalty.
///
/// When the left text is more than one character longer than the right, the
/// cosine score is scaled by `right_len / left_len`. An oversized query can
/// share every gram of a short label and still reach cosine 1.0; the penalty
/// pulls such pairs back down. Lengths are measured in characters.
#[must_use]
pub fn length_penalized(left: &str, right: &str, window: usize, scheme: WeightScheme) -> f64 {
    let mut score = cosine(left, right, window, scheme);

    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if left_len > right_len + 1 {
        score *= right_len as f64 / left_len as f64;
    }
    score
}
