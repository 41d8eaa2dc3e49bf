// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning result rows into what a table shows.
//!
//! Rows carry only identifiers. Rendering looks up slide titles and deck
//! metadata and builds the deck column from the `showDeckTitles` and
//! `showDeckSubtitles` flags. Pure, so a UI can diff its output between
//! keystrokes.

use serde::{Deserialize, Serialize};

use crate::options::SearchOptions;
use crate::types::{DeckInfo, Index, ResultRow};
use crate::verify::InconsistentIndex;

/// Separator between deck title and subtitle.
pub const TITLE_SEPARATOR: &str = " \u{2014} ";

/// One formatted table line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    pub word: String,
    pub is_exact: bool,
    /// May be empty when neither title nor subtitle is shown or present.
    pub deck_label: String,
    pub deck_url: String,
    pub slide_title: String,
    pub slide_url: String,
    pub count: u32,
}

/// The deck column text for `deck`.
pub fn deck_label(deck: &DeckInfo, options: &SearchOptions) -> String {
    let mut label = String::new();
    if options.show_deck_titles {
        if let Some(title) = deck.deck_title.as_deref().filter(|t| !t.is_empty()) {
            label.push_str(title);
        }
    }
    if options.show_deck_subtitles {
        if let Some(subtitle) = deck.deck_subtitle.as_deref().filter(|s| !s.is_empty()) {
            if !label.is_empty() {
                label.push_str(TITLE_SEPARATOR);
            }
            label.push_str(subtitle);
        }
    }
    label
}

/// Render `rows` against the index they came from.
pub fn render_rows(
    index: &Index,
    rows: &[ResultRow],
    options: &SearchOptions,
) -> Result<Vec<RenderedRow>, InconsistentIndex> {
    rows.iter()
        .map(|row| {
            let slide = index.slides.get(&row.slide_id).ok_or_else(|| {
                InconsistentIndex::MissingSlide {
                    word: row.word.clone(),
                    slide_id: row.slide_id.clone(),
                }
            })?;
            let deck = index
                .decks
                .get(&row.deck_id)
                .ok_or_else(|| InconsistentIndex::MissingDeck {
                    slide_id: row.slide_id.clone(),
                    deck_id: row.deck_id.clone(),
                })?;
            Ok(RenderedRow {
                word: row.word.clone(),
                is_exact: row.is_exact,
                deck_label: deck_label(deck, options),
                deck_url: deck.deck_url.clone(),
                slide_title: slide.slide_title.clone(),
                slide_url: row.slide_id.clone(),
                count: row.count,
            })
        })
        .collect()
}
