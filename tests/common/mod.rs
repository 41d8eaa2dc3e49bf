//! Shared test utilities and fixtures.

#![allow(dead_code)]

use deckfind::{Index, ResultRow, SlideSearcher};

// Re-export canonical test utilities from deckfind::testing
pub use deckfind::testing::{make_index, IndexBuilder};

// ============================================================================
// FIXTURE PATHS
// ============================================================================

/// Three decks, six words, every reference resolves.
pub const LECTURES_INDEX: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/lectures.json"
);

/// One occurrence points at a slide that no longer exists.
pub const BROKEN_INDEX: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/broken.json"
);

const LECTURES_JSON: &str = include_str!("../fixtures/lectures.json");
const BROKEN_JSON: &str = include_str!("../fixtures/broken.json");

// ============================================================================
// LOADERS
// ============================================================================

pub fn lectures() -> Index {
    Index::from_json(LECTURES_JSON)
        .expect("lectures fixture must parse")
}

pub fn broken() -> Index {
    Index::from_json(BROKEN_JSON)
        .expect("broken fixture must parse")
}

pub fn lectures_searcher() -> SlideSearcher {
    SlideSearcher::new(lectures())
        .expect("lectures vocabulary is valid")
}

// ============================================================================
// ROW HELPERS
// ============================================================================

pub fn slide_ids(rows: &[ResultRow]) -> Vec<&str> {
    rows.iter().map(|r| r.slide_id.as_str()).collect()
}

pub fn words(rows: &[ResultRow]) -> Vec<&str> {
    rows.iter().map(|r| r.word.as_str()).collect()
}
