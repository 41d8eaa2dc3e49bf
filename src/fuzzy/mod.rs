// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: which vocabulary words look like the query.
//!
//! Three layers: bounded edit distance, normalized similarity metrics built on
//! top of it (and two that are not), and `SimilaritySet`, which runs a metric
//! over a whole vocabulary with length-based pruning.

mod levenshtein;
mod set;
pub mod similarity;

pub use levenshtein::*;
pub use set::SimilaritySet;
pub use similarity::{BigramDice, JaroWinkler, Metric, NormalizedLevenshtein, Similarity};
