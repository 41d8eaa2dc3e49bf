// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word search over a precomputed slide-deck index.
//!
//! The index maps every word to the slides it appears on, with a count per
//! slide. A query is matched against the vocabulary with a similarity metric,
//! and each matched word expands into one row per slide.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  types.rs   │────▶│  fuzzy/          │────▶│  search/        │
//! │ (Index,     │     │ (SimilaritySet,  │     │ (search,        │
//! │  Occurrence)│     │  Metric)         │     │  SlideSearcher) │
//! └─────────────┘     └──────────────────┘     └─────────────────┘
//!        │                                        │        │
//!        ▼                                        ▼        ▼
//! ┌─────────────┐                    ┌──────────────┐ ┌───────────┐
//! │  verify/    │                    │  scoring/    │ │ render.rs │
//! │ (errors,    │                    │ (occurrence  │ │ (deck     │
//! │  validate)  │                    │  ranking)    │ │  labels)  │
//! └─────────────┘                    └──────────────┘ └───────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use deckfind::{Index, SlideSearcher};
//!
//! let index = Index::from_json(r#"{
//!     "index":  { "cache": [{ "slide": "mem.html#/2", "count": 3 }] },
//!     "slides": { "mem.html#/2": { "deckUrl": "mem.html", "slideTitle": "Caches" } },
//!     "decks":  { "mem.html": { "deckUrl": "mem.html", "deckTitle": "Memory" } }
//! }"#).unwrap();
//!
//! let searcher = SlideSearcher::new(index).unwrap();
//! let rows = searcher.search("cach", 0.5).unwrap();
//! assert_eq!(rows[0].slide_id, "mem.html#/2");
//! assert!(!rows[0].is_exact);
//! ```

pub mod fuzzy;
pub mod options;
pub mod render;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod verify;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use fuzzy::{
    levenshtein, levenshtein_bounded, levenshtein_within, BigramDice, JaroWinkler, Metric,
    NormalizedLevenshtein, Similarity, SimilaritySet,
};
pub use options::{SearchOptions, DEFAULT_MIN_SCORE};
pub use render::{deck_label, render_rows, RenderedRow};
pub use scoring::{compare_occurrences, is_ranked, sort_occurrences, PlacedOccurrence};
pub use search::{search, SlideSearcher};
pub use types::{DeckInfo, Index, Match, Occurrence, ResultRow, SlideInfo};
pub use verify::{validate_index, InconsistentIndex, InvalidInput, SearchError};
