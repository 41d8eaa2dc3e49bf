// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for bad arguments and broken indexes.
//!
//! Two kinds of failure, kept apart because callers treat them differently:
//!
//! | Type                | Raised by                       | Meaning                          |
//! |---------------------|---------------------------------|----------------------------------|
//! | `InvalidInput`      | `SimilaritySet::build`/`query`  | The caller passed bad arguments  |
//! | `InconsistentIndex` | `search`, `render_rows`, `validate` | The index file itself is broken |
//!
//! Neither is ever retried. Everything here is deterministic and local, so a
//! second attempt would fail the same way.

use std::fmt;

/// Bad arguments handed to the similarity layer.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// A vocabulary word was the empty string.
    EmptyWord { position: usize },
    /// `min_score` was outside `[0, 1]` (or NaN).
    MinScoreOutOfRange { min_score: f64 },
    /// A metric parameter that would let scores leave `[0, 1]` or let
    /// distinct words score 1.0.
    MetricParameter { name: &'static str, value: f64 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptyWord { position } => {
                write!(f, "vocabulary word at position {} is empty", position)
            }
            InvalidInput::MinScoreOutOfRange { min_score } => {
                write!(f, "min_score {} is not within [0, 1]", min_score)
            }
            InvalidInput::MetricParameter { name, value } => {
                write!(f, "metric parameter {} = {} is out of range", name, value)
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// The index references something it does not contain.
///
/// This points at a bug in whatever built the index file, so it is surfaced
/// instead of producing blank rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InconsistentIndex {
    /// An occurrence of `word` points at a slide missing from `slides`.
    MissingSlide { word: String, slide_id: String },
    /// A slide points at a deck missing from `decks`.
    MissingDeck { slide_id: String, deck_id: String },
    /// An occurrence claims the word appears zero times.
    ZeroCount { word: String, slide_id: String },
}

impl fmt::Display for InconsistentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InconsistentIndex::MissingSlide { word, slide_id } => {
                write!(
                    f,
                    "occurrence of '{}' references unknown slide '{}'",
                    word, slide_id
                )
            }
            InconsistentIndex::MissingDeck { slide_id, deck_id } => {
                write!(
                    f,
                    "slide '{}' references unknown deck '{}'",
                    slide_id, deck_id
                )
            }
            InconsistentIndex::ZeroCount { word, slide_id } => {
                write!(
                    f,
                    "occurrence of '{}' on slide '{}' has count 0",
                    word, slide_id
                )
            }
        }
    }
}

impl std::error::Error for InconsistentIndex {}

/// Anything a search call can fail with.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    InvalidInput(InvalidInput),
    InconsistentIndex(InconsistentIndex),
}

impl SearchError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SearchError::InvalidInput(_))
    }

    pub fn is_inconsistent_index(&self) -> bool {
        matches!(self, SearchError::InconsistentIndex(_))
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidInput(e) => write!(f, "invalid input: {}", e),
            SearchError::InconsistentIndex(e) => write!(f, "inconsistent index: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidInput(e) => Some(e),
            SearchError::InconsistentIndex(e) => Some(e),
        }
    }
}

impl From<InvalidInput> for SearchError {
    fn from(e: InvalidInput) -> Self {
        SearchError::InvalidInput(e)
    }
}

impl From<InconsistentIndex> for SearchError {
    fn from(e: InconsistentIndex) -> Self {
        SearchError::InconsistentIndex(e)
    }
}
