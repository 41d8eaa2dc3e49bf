// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a slide index and of search output.
//!
//! The index is produced by the deck builder as a single JSON file:
//!
//! ```text
//! {
//!   "index":  { word:    [ { "slide": slideId, "count": n }, ... ] },
//!   "slides": { slideId: { "deckUrl": deckId, "slideTitle": ... } },
//!   "decks":  { deckId:  { "deckUrl": ..., "deckTitle"?: ..., "deckSubtitle"?: ... } }
//! }
//! ```
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - every `slide` in an occurrence is a key of `slides`
//! - every slide's `deckUrl` is a key of `decks`
//! - every `count` is at least 1
//!
//! Nothing here enforces them at load time. `verify::validate_index` checks the
//! whole file; search checks only what a query touches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::verify::{validate_index, InconsistentIndex};

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One word's presence on one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(rename = "slide")]
    pub slide_id: String,
    pub count: u32,
}

/// Slide metadata. `deck_url` doubles as the deck identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideInfo {
    pub deck_url: String,
    #[serde(default)]
    pub slide_title: String,
}

/// Deck metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckInfo {
    pub deck_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_subtitle: Option<String>,
}

/// The precomputed word index for a deck collection.
///
/// Read-only once loaded. The vocabulary is the key set of `occurrences`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(rename = "index", default)]
    pub occurrences: HashMap<String, Vec<Occurrence>>,
    #[serde(default)]
    pub slides: HashMap<String, SlideInfo>,
    #[serde(default)]
    pub decks: HashMap<String, DeckInfo>,
}

impl Index {
    /// Parse the JSON index format. Unknown top-level keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Every distinct indexed word, in no particular order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.occurrences.keys().map(String::as_str)
    }

    /// Occurrences of `word`, or `None` if the index has no entry for it.
    pub fn occurrences_of(&self, word: &str) -> Option<&[Occurrence]> {
        self.occurrences.get(word).map(Vec::as_slice)
    }

    /// Check all reference and count invariants.
    pub fn validate(&self) -> Result<(), InconsistentIndex> {
        validate_index(self)
    }
}

// =============================================================================
// SEARCH OUTPUT
// =============================================================================

/// A vocabulary word close enough to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub word: String,
    /// In `[0, 1]`; exactly 1.0 only when the word equals the query.
    pub score: f64,
}

/// One display-ready line of search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub word: String,
    pub is_exact: bool,
    pub deck_id: String,
    pub slide_id: String,
    pub count: u32,
}
