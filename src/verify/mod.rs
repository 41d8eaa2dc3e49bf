// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: error types and the index consistency check.
//!
//! Search checks references lazily, only for the words a query touches. The
//! index builder lives elsewhere, so `validate_index` exists to check the whole
//! file up front, once, when a caller wants to know before the first keystroke.

mod types;

pub use types::*;

use crate::types::Index;

/// Check every invariant the index format promises.
///
/// Words are visited in sorted order so the reported violation is the same
/// on every run, whatever order the hash maps iterate in.
pub fn validate_index(index: &Index) -> Result<(), InconsistentIndex> {
    let mut words: Vec<&String> = index.occurrences.keys().collect();
    words.sort();

    for word in words {
        for occurrence in &index.occurrences[word] {
            if occurrence.count == 0 {
                return Err(InconsistentIndex::ZeroCount {
                    word: word.clone(),
                    slide_id: occurrence.slide_id.clone(),
                });
            }
            if !index.slides.contains_key(&occurrence.slide_id) {
                return Err(InconsistentIndex::MissingSlide {
                    word: word.clone(),
                    slide_id: occurrence.slide_id.clone(),
                });
            }
        }
    }

    let mut slide_ids: Vec<&String> = index.slides.keys().collect();
    slide_ids.sort();

    for slide_id in slide_ids {
        let deck_id = &index.slides[slide_id].deck_url;
        if !index.decks.contains_key(deck_id) {
            return Err(InconsistentIndex::MissingDeck {
                slide_id: slide_id.clone(),
                deck_id: deck_id.clone(),
            });
        }
    }

    Ok(())
}
