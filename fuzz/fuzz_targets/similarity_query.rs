// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for similarity set queries.
//!
//! Checks the scoring contract on arbitrary Unicode: scores in range, 1.0 only
//! for the identical word, results ordered, and length pruning never losing a
//! word that a full scan would have matched.

#![no_main]

use arbitrary::Arbitrary;
use deckfind::{Metric, Similarity, SimilaritySet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    words: Vec<String>,
    /// Mapped onto [0, 1]
    threshold: u8,
    metric: u8,
}

fuzz_target!(|input: QueryInput| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(32).collect();
    let words: Vec<String> = input
        .words
        .iter()
        .take(64)
        .map(|w| w.chars().take(32).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect();
    let min_score = f64::from(input.threshold) / 255.0;
    let metric = match input.metric % 3 {
        0 => Metric::Levenshtein,
        1 => Metric::JaroWinkler,
        _ => Metric::Dice,
    };

    let set = match SimilaritySet::build_with(metric, &words) {
        Ok(set) => set,
        Err(e) => panic!("non-empty words rejected: {}", e),
    };
    let matches = set.query(&query, min_score).expect("threshold is in range");

    if query.is_empty() {
        assert!(matches.is_empty());
        return;
    }

    for m in &matches {
        assert!((0.0..=1.0).contains(&m.score), "score {}", m.score);
        assert!(m.score >= min_score);
        let exact = m.word == query;
        assert_eq!(m.score == 1.0, exact, "exactness broken for {:?}", m.word);
        assert_eq!(m.score, metric.similarity_str(&query, &m.word));
    }

    for pair in matches.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].word < pair[1].word),
            "unordered: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }

    let expected = set
        .words()
        .filter(|w| metric.similarity_str(&query, w) >= min_score)
        .count();
    assert_eq!(matches.len(), expected, "pruning dropped a match");
});
