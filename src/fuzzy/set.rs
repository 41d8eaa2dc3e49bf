// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate membership over a fixed vocabulary.
//!
//! Words are decoded to chars once and bucketed by char length. Every metric
//! can bound its score from the two lengths alone, so a query walks the
//! buckets, drops whole lengths that cannot reach `min_score`, and scores only
//! what is left.
//!
//! ```text
//! len 3: [bus, cat]        bound(4, 3) = 0.75  -> scored
//! len 4: [cach]            bound(4, 4) = 1.00  -> scored
//! len 9: [eviction,...]    bound(4, 9) = 0.44  -> skipped at min_score 0.5
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::similarity::{may_reach, Metric, Similarity};
use crate::types::Match;
use crate::verify::InvalidInput;

#[derive(Debug, Clone)]
struct Entry {
    word: String,
    chars: Vec<char>,
}

/// An immutable vocabulary that answers "which words look like this?".
///
/// Built once from the index vocabulary and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct SimilaritySet<M = Metric> {
    metric: M,
    /// Sorted, deduplicated.
    entries: Vec<Entry>,
    /// Char length -> positions in `entries`.
    by_length: BTreeMap<usize, Vec<usize>>,
}

impl SimilaritySet<Metric> {
    /// Build with the default metric (normalized Levenshtein).
    pub fn build<I, S>(words: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build_with(Metric::default(), words)
    }
}

impl<M: Similarity> SimilaritySet<M> {
    /// Build with an explicit metric.
    ///
    /// Fails on the first empty word. Duplicates collapse; the empty
    /// vocabulary is fine and matches nothing.
    pub fn build_with<I, S>(metric: M, words: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(position) = words.iter().position(String::is_empty) {
            return Err(InvalidInput::EmptyWord { position });
        }
        words.sort_unstable();
        words.dedup();

        let mut by_length: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let entries: Vec<Entry> = words
            .into_iter()
            .enumerate()
            .map(|(pos, word)| {
                let chars: Vec<char> = word.chars().collect();
                by_length.entry(chars.len()).or_default().push(pos);
                Entry { word, chars }
            })
            .collect();

        log::debug!(
            "built similarity set: {} words in {} length buckets",
            entries.len(),
            by_length.len()
        );

        Ok(Self {
            metric,
            entries,
            by_length,
        })
    }

    /// All words scoring at least `min_score` against `input`.
    ///
    /// Sorted by descending score, then ascending word. An empty `input`
    /// matches nothing. `min_score` must be within `[0, 1]`.
    pub fn query(&self, input: &str, min_score: f64) -> Result<Vec<Match>, InvalidInput> {
        if !(0.0..=1.0).contains(&min_score) {
            return Err(InvalidInput::MinScoreOutOfRange { min_score });
        }
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let query: Vec<char> = input.chars().collect();
        let candidates: Vec<usize> = self
            .by_length
            .iter()
            .filter(|(len, _)| may_reach(self.metric.upper_bound(query.len(), **len), min_score))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect();

        let mut matches = self.score_candidates(&query, &candidates, min_score);
        matches.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.word.cmp(&b.word))
        });

        log::debug!(
            "query {:?}: {} of {} words scored, {} matched at min_score {}",
            input,
            candidates.len(),
            self.entries.len(),
            matches.len(),
            min_score
        );

        Ok(matches)
    }

    #[cfg(feature = "parallel")]
    fn score_candidates(&self, query: &[char], candidates: &[usize], min_score: f64) -> Vec<Match> {
        candidates
            .par_iter()
            .filter_map(|&pos| self.score_entry(query, pos, min_score))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_candidates(&self, query: &[char], candidates: &[usize], min_score: f64) -> Vec<Match> {
        candidates
            .iter()
            .filter_map(|&pos| self.score_entry(query, pos, min_score))
            .collect()
    }

    fn score_entry(&self, query: &[char], pos: usize, min_score: f64) -> Option<Match> {
        let entry = &self.entries[pos];
        self.metric
            .score_at_least(query, &entry.chars, min_score)
            .map(|score| Match {
                word: entry.word.clone(),
                score,
            })
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .is_ok()
    }

    /// The vocabulary in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }
}
