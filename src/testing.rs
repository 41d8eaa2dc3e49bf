// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical index fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{DeckInfo, Index, Occurrence, SlideInfo};

/// Fluent builder for small in-memory indexes.
///
/// Nothing is validated, so tests can build broken indexes on purpose.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: Index,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deck whose identifier and URL are both `id`.
    pub fn deck(mut self, id: &str, title: Option<&str>, subtitle: Option<&str>) -> Self {
        self.index.decks.insert(
            id.to_string(),
            DeckInfo {
                deck_url: id.to_string(),
                deck_title: title.map(str::to_string),
                deck_subtitle: subtitle.map(str::to_string),
            },
        );
        self
    }

    pub fn slide(mut self, id: &str, deck_id: &str, title: &str) -> Self {
        self.index.slides.insert(
            id.to_string(),
            SlideInfo {
                deck_url: deck_id.to_string(),
                slide_title: title.to_string(),
            },
        );
        self
    }

    /// Append an occurrence to `word`'s list, creating the list if needed.
    pub fn occurrence(mut self, word: &str, slide_id: &str, count: u32) -> Self {
        self.index
            .occurrences
            .entry(word.to_string())
            .or_default()
            .push(Occurrence {
                slide_id: slide_id.to_string(),
                count,
            });
        self
    }

    pub fn build(self) -> Index {
        self.index
    }
}

/// A consistent index with one slide per `(word, deck, count)` triple.
///
/// Slide ids are `"{deck}#/{n}"`, numbered in input order.
pub fn make_index(entries: &[(&str, &str, u32)]) -> Index {
    let mut builder = IndexBuilder::new();
    for (n, (word, deck, count)) in entries.iter().enumerate() {
        let slide_id = format!("{}#/{}", deck, n);
        builder = builder
            .deck(deck, Some(&format!("Deck {}", deck)), None)
            .slide(&slide_id, deck, &format!("Slide {}", n))
            .occurrence(word, &slide_id, *count);
    }
    builder.build()
}
