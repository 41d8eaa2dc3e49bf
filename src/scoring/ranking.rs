// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence ranking: how the slides for one matched word get ordered.
//!
//! Two passes, in this order:
//!
//! 1. sort by deck identifier, ascending
//! 2. stable sort by count, descending
//!
//! Count dominates; the deck order from pass 1 survives only among equal
//! counts. The visible result depends on pass 2 being stable, which
//! `slice::sort_by` guarantees. `compare_occurrences` is the single comparator
//! with the same net effect, for callers that want to check an ordering.

use crate::types::Occurrence;
use std::cmp::Ordering;

/// An occurrence with its deck already looked up through the slide table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOccurrence<'a> {
    pub occurrence: &'a Occurrence,
    pub deck_id: &'a str,
}

impl PlacedOccurrence<'_> {
    pub fn slide_id(&self) -> &str {
        &self.occurrence.slide_id
    }

    pub fn count(&self) -> u32 {
        self.occurrence.count
    }
}

/// Sort by deck, then stably by descending count.
pub fn sort_occurrences(placed: &mut [PlacedOccurrence<'_>]) {
    placed.sort_by(|a, b| a.deck_id.cmp(b.deck_id));
    placed.sort_by(|a, b| b.count().cmp(&a.count()));
}

/// Compare two placed occurrences for ranking.
///
/// Sort order:
/// 1. **Count** - descending, more hits first
/// 2. **Deck** - ascending identifier among equal counts
///
/// Equal on both keys means "keep input order", which is what a stable sort
/// with this comparator does.
pub fn compare_occurrences(a: &PlacedOccurrence<'_>, b: &PlacedOccurrence<'_>) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.deck_id.cmp(b.deck_id))
}

/// Is `placed` already in ranking order?
pub fn is_ranked(placed: &[PlacedOccurrence<'_>]) -> bool {
    placed
        .windows(2)
        .all(|pair| compare_occurrences(&pair[0], &pair[1]) != Ordering::Greater)
}
