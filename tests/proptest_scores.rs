//! Property-based tests for the scoring engine.
//!
//! Ensures every strategy keeps scores on the 0-100 scale for arbitrary
//! input, and that the ranking and weighting invariants hold across random
//! inputs.

use proptest::prelude::*;
use simscore::matching::{
    cosine::{cosine, length_penalized},
    Candidate, NGramVector, Scorer, StrategyRegistry, TopK, WeightScheme,
};

proptest! {
    // 1000 cases: scoring is fast and the input space is wide enough that
    // the default 256 leaves obvious gaps.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn scores_stay_on_scale(query in "\\PC{0,40}", text in "\\PC{0,40}") {
        for strategy in StrategyRegistry::builtin().iter() {
            let score = strategy.apply(&query, &text);
            prop_assert!(score.is_finite(), "{} produced {}", strategy.id(), score);
            prop_assert!(score >= 0.0, "{} produced {}", strategy.id(), score);
            // identical n-gram vectors can land an ulp above cosine 1.0
            prop_assert!(score <= 100.0 + 1e-9, "{} produced {}", strategy.id(), score);
        }
    }

    #[test]
    fn identity_scores_hundred_for_every_strategy(s in "[a-z]{2,20}") {
        // single tokens only: the raw fold keeps the worst levenshtein
        // comparison, so a multi-word string scores below 100 against itself
        for strategy in StrategyRegistry::builtin().iter() {
            let score = strategy.apply(&s, &s);
            prop_assert!(
                (score - 100.0).abs() < 1e-6,
                "{} scored {} for {:?}",
                strategy.id(),
                score,
                s
            );
        }
    }

    #[test]
    fn empty_query_always_scores_zero(text in "\\PC{0,40}") {
        for strategy in StrategyRegistry::builtin().iter() {
            prop_assert_eq!(strategy.apply("", &text), 0.0);
            prop_assert_eq!(strategy.apply(&text, ""), 0.0);
        }
    }

    #[test]
    fn penalty_never_raises_score(a in "[a-z]{2,16}", b in "[a-z]{2,16}") {
        let plain = cosine(&a, &b, 2, WeightScheme::Uniform);
        let penalized = length_penalized(&a, &b, 2, WeightScheme::Uniform);

        if a.chars().count() > b.chars().count() + 1 {
            prop_assert!(penalized <= plain);
        } else {
            prop_assert_eq!(penalized, plain);
        }
    }

    #[test]
    fn positional_weights_decay_monotonically(len in 2usize..20) {
        // distinct characters, so every bigram occurs exactly once at its offset
        let text: String = ('a'..='z').take(len).collect();
        let v = NGramVector::build(&text, 2, WeightScheme::Positional);

        let grams: Vec<String> = text
            .chars()
            .zip(text.chars().skip(1))
            .map(|(x, y)| format!("{x}{y}"))
            .collect();
        for pair in grams.windows(2) {
            let earlier = v.weight(&pair[0]).unwrap();
            let later = v.weight(&pair[1]).unwrap();
            prop_assert!(earlier > later, "{} vs {}", earlier, later);
        }
    }

    #[test]
    fn topk_matches_sorted_truncation(
        scores in prop::collection::vec(0.01f64..100.0, 1..80),
        k in 1usize..10,
    ) {
        let mut top = TopK::new(k);
        for (i, score) in scores.iter().enumerate() {
            top.insert(i as u32, *score, i);
        }
        let got = top.into_sorted_vec();

        let mut expected: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
        expected.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        expected.truncate(k);

        prop_assert_eq!(got.len(), expected.len());
        for (entry, (index, score)) in got.iter().zip(expected.iter()) {
            prop_assert_eq!(entry.id, *index as u32);
            prop_assert_eq!(entry.score, *score);
        }
    }

    #[test]
    fn rank_shape_invariants(
        labels in prop::collection::vec("[a-z ]{0,14}", 0..40),
        query in "[a-z]{1,8}",
        limit in 0usize..8,
    ) {
        let candidates: Vec<Candidate> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Candidate::new(i as u32, label.clone()))
            .collect();

        let results = Scorer::default().rank(&query, &candidates, limit);

        prop_assert_eq!(results.len(), limit.min(candidates.len()));
        prop_assert!(results.iter().all(|r| r.score >= 0.0));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(results.iter().all(|r| (r.id as usize) < candidates.len()));
    }
}
