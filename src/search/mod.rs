// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query -> rows.
//!
//! ```text
//! query ──▶ SimilaritySet::query ──▶ [Match]           (score desc, word asc)
//!                                      │ per match
//!                                      ▼
//!                            index.occurrences[word]    (missing: skip)
//!                                      │ resolve slide -> deck
//!                                      ▼
//!                            sort_occurrences           (count desc, deck asc)
//!                                      │
//!                                      ▼
//!                            [ResultRow] appended in match order
//! ```
//!
//! Every call stands alone. The index and the similarity set are never
//! mutated, so one `SlideSearcher` can serve any number of threads at once.

use crate::fuzzy::{Metric, Similarity, SimilaritySet};
use crate::options::SearchOptions;
use crate::render::{render_rows, RenderedRow};
use crate::scoring::{sort_occurrences, PlacedOccurrence};
use crate::types::{Index, Match, Occurrence, ResultRow};
use crate::verify::{InconsistentIndex, SearchError};

/// Search `index` for words resembling `query`.
///
/// `words` must have been built from `index.vocabulary()`. An empty query
/// returns no rows before `min_score` is even looked at.
pub fn search<M: Similarity>(
    query: &str,
    index: &Index,
    words: &SimilaritySet<M>,
    min_score: f64,
) -> Result<Vec<ResultRow>, SearchError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let matches = words.query(query, min_score)?;
    let mut rows = Vec::new();

    for matched in &matches {
        let Some(occurrences) = index.occurrences_of(&matched.word) else {
            log::debug!("no occurrences recorded for '{}', skipping", matched.word);
            continue;
        };

        let mut placed = place_occurrences(index, &matched.word, occurrences)?;
        sort_occurrences(&mut placed);

        let is_exact = query == matched.word;
        for entry in placed {
            if !index.decks.contains_key(entry.deck_id) {
                return Err(InconsistentIndex::MissingDeck {
                    slide_id: entry.slide_id().to_string(),
                    deck_id: entry.deck_id.to_string(),
                }
                .into());
            }
            rows.push(ResultRow {
                word: matched.word.clone(),
                is_exact,
                deck_id: entry.deck_id.to_string(),
                slide_id: entry.slide_id().to_string(),
                count: entry.count(),
            });
        }
    }

    log::debug!(
        "search {:?}: {} matching words, {} rows",
        query,
        matches.len(),
        rows.len()
    );

    Ok(rows)
}

/// Look up the deck of every occurrence through the slide table.
fn place_occurrences<'a>(
    index: &'a Index,
    word: &str,
    occurrences: &'a [Occurrence],
) -> Result<Vec<PlacedOccurrence<'a>>, InconsistentIndex> {
    occurrences
        .iter()
        .map(|occurrence| {
            let slide = index.slides.get(&occurrence.slide_id).ok_or_else(|| {
                InconsistentIndex::MissingSlide {
                    word: word.to_string(),
                    slide_id: occurrence.slide_id.clone(),
                }
            })?;
            Ok(PlacedOccurrence {
                occurrence,
                deck_id: slide.deck_url.as_str(),
            })
        })
        .collect()
}

/// An index together with the similarity set built from its vocabulary.
///
/// Construct once when the index becomes available, then call `search` per
/// keystroke.
#[derive(Debug, Clone)]
pub struct SlideSearcher<M = Metric> {
    index: Index,
    words: SimilaritySet<M>,
}

impl SlideSearcher<Metric> {
    /// Build with the default metric.
    pub fn new(index: Index) -> Result<Self, SearchError> {
        Self::with_metric(index, Metric::default())
    }

    /// Build with the metric named in `options`.
    pub fn from_options(index: Index, options: &SearchOptions) -> Result<Self, SearchError> {
        Self::with_metric(index, options.metric)
    }
}

impl<M: Similarity> SlideSearcher<M> {
    pub fn with_metric(index: Index, metric: M) -> Result<Self, SearchError> {
        let words = SimilaritySet::build_with(metric, index.vocabulary())?;
        Ok(Self { index, words })
    }

    pub fn search(&self, query: &str, min_score: f64) -> Result<Vec<ResultRow>, SearchError> {
        search(query, &self.index, &self.words, min_score)
    }

    /// Search with the threshold from `options`.
    pub fn search_with(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ResultRow>, SearchError> {
        self.search(query, options.min_score)
    }

    /// Search and format the rows for display.
    pub fn search_rendered(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RenderedRow>, SearchError> {
        let rows = self.search_with(query, options)?;
        Ok(render_rows(&self.index, &rows, options)?)
    }

    /// The raw similarity matches, without touching occurrences.
    pub fn matches(&self, query: &str, min_score: f64) -> Result<Vec<Match>, SearchError> {
        Ok(self.words.query(query, min_score)?)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn words(&self) -> &SimilaritySet<M> {
        &self.words
    }
}
