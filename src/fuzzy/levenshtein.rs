// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! The same bound drives the length buckets in `SimilaritySet`, so most
//! vocabulary words never reach this function at all.

/// Edit distance between `a` and `b` if it is at most `max`, else `None`.
///
/// Works on char slices so callers can decode each vocabulary word once.
/// Two early-exit paths:
/// 1. If length difference exceeds `max`, return immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: a returned distance is always the exact distance.
pub fn levenshtein_bounded(a: &[char], b: &[char], max: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Row minimums never decrease, so nothing below can come back under max
        if min_row > max {
            return None;
        }
    }

    let distance = dp[b.len()];
    (distance <= max).then_some(distance)
}

/// Unbounded edit distance, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max = a.len().max(b.len());
    // Distance never exceeds the longer length, so this always returns Some
    levenshtein_bounded(&a, &b, max).unwrap_or(max)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_bounded(&a, &b, max).is_some()
}
