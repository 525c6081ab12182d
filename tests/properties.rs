//! Property-style checks against the public API. A small reference distance
//! function is reimplemented here (unbounded, no early termination) purely
//! to cross-check [`Dictionary::lookup`]'s reported distances; it is not the
//! crate's own verifier.

use proptest::prelude::*;
use symspell_core::{Dictionary, RankingPolicy};

/// Unbounded OSA distance, used only to verify reported distances in tests.
fn reference_osa_distance(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (la, lb) = (a.len(), b.len());
    let mut d = vec![vec![0i32; lb + 1]; la + 1];
    for i in 0..=la {
        d[i][0] = i as i32;
    }
    for j in 0..=lb {
        d[0][j] = j as i32;
    }
    for i in 1..=la {
        for j in 1..=lb {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i >= 2 && j >= 2 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[la][lb] as u32
}

fn word_dictionary() -> Dictionary {
    let mut dict = Dictionary::create(2, 7).unwrap();
    let lines = vec![
        "hello 1000".to_string(),
        "help 500".to_string(),
        "world 2000".to_string(),
        "word 1500".to_string(),
        "receive 800".to_string(),
        "retrieve 100".to_string(),
        "apple 300".to_string(),
        "angle 250".to_string(),
        "ample 90".to_string(),
    ];
    dict.load(lines, 0, 1).unwrap();
    dict
}

fn lowercase_ascii_word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

proptest! {
    #[test]
    fn reported_distance_matches_reference_distance(query in lowercase_ascii_word()) {
        let dict = word_dictionary();
        let out = dict.lookup(&query, 2, 5, RankingPolicy::SortedTopK);
        for suggestion in &out {
            let actual = reference_osa_distance(&query, &suggestion.term);
            prop_assert_eq!(suggestion.distance, actual);
        }
    }

    #[test]
    fn lookup_is_deterministic(query in lowercase_ascii_word()) {
        let dict = word_dictionary();
        let first = dict.lookup(&query, 2, 5, RankingPolicy::SortedTopK);
        let second = dict.lookup(&query, 2, 5, RankingPolicy::SortedTopK);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sorted_top_k_never_exceeds_k(query in lowercase_ascii_word(), k in 0usize..8) {
        let dict = word_dictionary();
        let out = dict.lookup(&query, 2, k, RankingPolicy::SortedTopK);
        prop_assert!(out.len() <= k);
    }

    #[test]
    fn sorted_top_k_is_non_decreasing_in_distance(query in lowercase_ascii_word()) {
        let dict = word_dictionary();
        let out = dict.lookup(&query, 2, 10, RankingPolicy::SortedTopK);
        for pair in out.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn probability_is_within_unit_interval(query in lowercase_ascii_word()) {
        let dict = word_dictionary();
        let out = dict.lookup(&query, 2, 5, RankingPolicy::SortedTopK);
        for suggestion in &out {
            prop_assert!(suggestion.probability >= 0.0 && suggestion.probability <= 1.0);
        }
    }

    #[test]
    fn single_best_is_among_sorted_top_k(query in lowercase_ascii_word()) {
        let dict = word_dictionary();
        let best = dict.lookup(&query, 2, 1, RankingPolicy::SingleBest);
        let top_k = dict.lookup(&query, 2, 10, RankingPolicy::SortedTopK);
        if let Some(best) = best.first() {
            prop_assert!(top_k.iter().any(|s| s.term == best.term && s.distance == best.distance));
        } else {
            prop_assert!(top_k.is_empty());
        }
    }
}
