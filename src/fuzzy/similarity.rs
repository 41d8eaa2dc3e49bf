// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String similarity metrics, all normalized to `[0, 1]`.
//!
//! Every metric has to honour the same contract, because the ranking step
//! relies on it and nothing else:
//!
//! - deterministic: same inputs, same score
//! - exact: 1.0 if and only if the strings are identical (case-sensitive)
//! - fixed: a word's score does not depend on the threshold it is asked about,
//!   so raising `min_score` can only remove matches
//!
//! | Metric                  | Score                                  | Good at                |
//! |-------------------------|----------------------------------------|------------------------|
//! | `NormalizedLevenshtein` | `1 - edits / max_len`                  | typos, truncations     |
//! | `JaroWinkler`           | Jaro + Winkler prefix boost            | shared prefixes        |
//! | `BigramDice`            | Dice coefficient over padded bigrams   | reordered fragments    |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::levenshtein::levenshtein_bounded;
use crate::verify::InvalidInput;

/// Slack for float comparisons in pruning. Pruning may admit extra candidates,
/// never drop one; the exact score decides.
const PRUNE_EPSILON: f64 = 1e-9;

/// The largest f64 below 1.0. Distinct strings that a metric cannot tell apart
/// are capped here so 1.0 stays reserved for exact matches.
pub const BELOW_EXACT: f64 = 1.0 - f64::EPSILON / 2.0;

/// A normalized similarity over char sequences.
///
/// `a` is the query, `b` the candidate word.
pub trait Similarity: Send + Sync {
    /// Score in `[0, 1]`.
    fn similarity(&self, a: &[char], b: &[char]) -> f64;

    /// `Some(score)` when `score >= min_score`, else `None`.
    ///
    /// Overrides may bail out early but must return exactly what
    /// `similarity` would.
    fn score_at_least(&self, a: &[char], b: &[char], min_score: f64) -> Option<f64> {
        let score = self.similarity(a, b);
        (score >= min_score).then_some(score)
    }

    /// An upper bound on the score of any pair with these char lengths.
    fn upper_bound(&self, _len_a: usize, _len_b: usize) -> f64 {
        1.0
    }

    /// Convenience for callers holding `&str`.
    fn similarity_str(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.similarity(&a, &b)
    }
}

/// Can a pair with this upper bound still reach `min_score`?
pub(crate) fn may_reach(bound: f64, min_score: f64) -> bool {
    bound + PRUNE_EPSILON >= min_score
}

// =============================================================================
// LEVENSHTEIN
// =============================================================================

/// `1 - distance / max(len_a, len_b)`, lengths in chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedLevenshtein;

impl NormalizedLevenshtein {
    fn score(distance: usize, max_len: usize) -> f64 {
        1.0 - distance as f64 / max_len as f64
    }
}

impl Similarity for NormalizedLevenshtein {
    fn similarity(&self, a: &[char], b: &[char]) -> f64 {
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return 1.0;
        }
        let distance = levenshtein_bounded(a, b, max_len).unwrap_or(max_len);
        Self::score(distance, max_len)
    }

    fn score_at_least(&self, a: &[char], b: &[char], min_score: f64) -> Option<f64> {
        let max_len = a.len().max(b.len());
        if max_len == 0 {
            return (1.0 >= min_score).then_some(1.0);
        }
        // score >= min  <=>  distance <= (1 - min) * max_len
        let allowed = ((1.0 - min_score) * max_len as f64 + PRUNE_EPSILON).floor();
        let allowed = if allowed < 0.0 { 0 } else { allowed as usize };
        let distance = levenshtein_bounded(a, b, allowed)?;
        let score = Self::score(distance, max_len);
        (score >= min_score).then_some(score)
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> f64 {
        let max_len = len_a.max(len_b);
        if max_len == 0 {
            return 1.0;
        }
        Self::score(len_a.abs_diff(len_b), max_len)
    }
}

// =============================================================================
// JARO-WINKLER
// =============================================================================

/// Jaro similarity with the Winkler prefix boost.
///
/// The boost applies only above `boost_threshold` and rewards up to
/// `max_prefix` shared leading chars with `prefix_scale` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinkler {
    prefix_scale: f64,
    max_prefix: usize,
    boost_threshold: f64,
}

impl JaroWinkler {
    /// Custom boost parameters.
    ///
    /// The full boost `prefix_scale * max_prefix` must stay below 1, otherwise
    /// distinct words with a shared prefix could score 1.0.
    pub fn new(
        prefix_scale: f64,
        max_prefix: usize,
        boost_threshold: f64,
    ) -> Result<Self, InvalidInput> {
        if prefix_scale.is_nan() || prefix_scale < 0.0 {
            return Err(InvalidInput::MetricParameter {
                name: "prefix_scale",
                value: prefix_scale,
            });
        }
        if prefix_scale * max_prefix as f64 >= 1.0 {
            return Err(InvalidInput::MetricParameter {
                name: "max_prefix",
                value: max_prefix as f64,
            });
        }
        if !(0.0..=1.0).contains(&boost_threshold) {
            return Err(InvalidInput::MetricParameter {
                name: "boost_threshold",
                value: boost_threshold,
            });
        }
        Ok(Self {
            prefix_scale,
            max_prefix,
            boost_threshold,
        })
    }

    pub fn prefix_scale(&self) -> f64 {
        self.prefix_scale
    }

    pub fn max_prefix(&self) -> usize {
        self.max_prefix
    }

    pub fn boost_threshold(&self) -> f64 {
        self.boost_threshold
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            prefix_scale: 0.1,
            max_prefix: 4,
            boost_threshold: 0.7,
        }
    }
}

/// Plain Jaro similarity.
pub fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut b_taken = vec![false; b.len()];
    let mut a_matched: Vec<char> = Vec::with_capacity(a.len().min(b.len()));

    for (i, ac) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_taken[j] && b[j] == *ac {
                b_taken[j] = true;
                a_matched.push(*ac);
                break;
            }
        }
    }

    let matches = a_matched.len();
    if matches == 0 {
        return 0.0;
    }

    let b_matched = b
        .iter()
        .zip(&b_taken)
        .filter(|(_, taken)| **taken)
        .map(|(c, _)| *c);
    let half_transpositions = a_matched
        .iter()
        .zip(b_matched)
        .filter(|(x, y)| **x != *y)
        .count() as f64
        / 2.0;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - half_transpositions) / m) / 3.0
}

impl JaroWinkler {
    fn boost(&self, jaro: f64, prefix: usize) -> f64 {
        jaro + prefix as f64 * self.prefix_scale * (1.0 - jaro)
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &[char], b: &[char]) -> f64 {
        let sim = jaro(a, b);
        if sim <= self.boost_threshold || sim == 1.0 {
            return sim;
        }
        let prefix = a
            .iter()
            .zip(b)
            .take(self.max_prefix)
            .take_while(|(x, y)| x == y)
            .count();
        self.boost(sim, prefix).min(BELOW_EXACT)
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> f64 {
        if len_a == 0 || len_b == 0 {
            return if len_a == len_b { 1.0 } else { 0.0 };
        }
        // At most min(len) chars can match, with no transpositions
        let m = len_a.min(len_b) as f64;
        let best_jaro = (m / len_a as f64 + m / len_b as f64 + 1.0) / 3.0;
        self.boost(best_jaro, self.max_prefix).min(1.0)
    }
}

// =============================================================================
// BIGRAM DICE
// =============================================================================

/// Dice coefficient over character bigrams, with both ends padded.
///
/// Padding makes the first and last chars count, and gives one-char words
/// two bigrams to compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigramDice;

type Bigram = (Option<char>, Option<char>);

fn bigram_counts(chars: &[char]) -> HashMap<Bigram, usize> {
    let padded: Vec<Option<char>> = std::iter::once(None)
        .chain(chars.iter().copied().map(Some))
        .chain(std::iter::once(None))
        .collect();
    let mut counts = HashMap::with_capacity(padded.len());
    for pair in padded.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

impl Similarity for BigramDice {
    fn similarity(&self, a: &[char], b: &[char]) -> f64 {
        if a == b {
            return 1.0;
        }
        let a_grams = bigram_counts(a);
        let b_grams = bigram_counts(b);
        let shared: usize = a_grams
            .iter()
            .map(|(gram, count)| (*count).min(b_grams.get(gram).copied().unwrap_or(0)))
            .sum();
        let total = (a.len() + 1) + (b.len() + 1);
        let dice = 2.0 * shared as f64 / total as f64;
        // "abaca" and "acaba" share every bigram
        dice.min(BELOW_EXACT)
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> f64 {
        let (ga, gb) = (len_a + 1, len_b + 1);
        2.0 * ga.min(gb) as f64 / (ga + gb) as f64
    }
}

// =============================================================================
// RUNTIME SELECTION
// =============================================================================

/// Which similarity metric a `SimilaritySet` scores with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    #[default]
    Levenshtein,
    JaroWinkler,
    Dice,
}

impl Similarity for Metric {
    fn similarity(&self, a: &[char], b: &[char]) -> f64 {
        match self {
            Metric::Levenshtein => NormalizedLevenshtein.similarity(a, b),
            Metric::JaroWinkler => JaroWinkler::default().similarity(a, b),
            Metric::Dice => BigramDice.similarity(a, b),
        }
    }

    fn score_at_least(&self, a: &[char], b: &[char], min_score: f64) -> Option<f64> {
        match self {
            Metric::Levenshtein => NormalizedLevenshtein.score_at_least(a, b, min_score),
            Metric::JaroWinkler => JaroWinkler::default().score_at_least(a, b, min_score),
            Metric::Dice => BigramDice.score_at_least(a, b, min_score),
        }
    }

    fn upper_bound(&self, len_a: usize, len_b: usize) -> f64 {
        match self {
            Metric::Levenshtein => NormalizedLevenshtein.upper_bound(len_a, len_b),
            Metric::JaroWinkler => JaroWinkler::default().upper_bound(len_a, len_b),
            Metric::Dice => BigramDice.upper_bound(len_a, len_b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Levenshtein => "levenshtein",
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Dice => "dice",
        };
        f.write_str(name)
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "jaro-winkler" | "jarowinkler" | "jw" => Ok(Metric::JaroWinkler),
            "dice" | "bigram" => Ok(Metric::Dice),
            other => Err(format!(
                "unknown metric '{}' (expected levenshtein, jaro-winkler or dice)",
                other
            )),
        }
    }
}
