//! End-to-end scenarios: query in, ordered rows out.

use crate::common::{lectures_searcher, make_index, slide_ids, words, IndexBuilder};
use deckfind::{search, InconsistentIndex, Index, Metric, SearchError, SimilaritySet, SlideSearcher};

// ============================================================================
// PARTIAL AND MISSPELLED QUERIES
// ============================================================================

#[test]
fn test_partial_query_finds_both_words_closer_first() {
    let index = make_index(&[("cache", "d1", 1), ("cachet", "d2", 1)]);
    for metric in [Metric::Levenshtein, Metric::JaroWinkler, Metric::Dice] {
        let searcher = SlideSearcher::with_metric(index.clone(), metric).unwrap();
        let rows = searcher.search("cach", 0.5).unwrap();
        assert_eq!(words(&rows), vec!["cache", "cachet"], "{}", metric);
        assert!(rows.iter().all(|r| !r.is_exact));
    }
}

#[test]
fn test_equal_scores_fall_back_to_word_order() {
    // "bat" and "cot" are both one substitution from "cat"
    let index = make_index(&[("cot", "d1", 9), ("bat", "d2", 1)]);
    let searcher = SlideSearcher::new(index).unwrap();
    let matches = searcher.matches("cat", 0.5).unwrap();
    assert_eq!(matches[0].score, matches[1].score);

    let rows = searcher.search("cat", 0.5).unwrap();
    assert_eq!(words(&rows), vec!["bat", "cot"]);
}

#[test]
fn test_misspelling_still_matches() {
    let searcher = lectures_searcher();
    let rows = searcher.search("memroy", 0.5).unwrap();
    assert_eq!(words(&rows), vec!["memory", "memory"]);
    assert_eq!(
        slide_ids(&rows),
        vec!["memory.html#/title", "memory.html#/caches"]
    );
}

// ============================================================================
// FIXTURE WALKTHROUGH
// ============================================================================

#[test]
fn test_exact_query_over_lectures() {
    let rows = lectures_searcher().search("cache", 0.5).unwrap();

    // cache (1.0), cachet (5/6), Cache (4/5), caching (4/7)
    assert_eq!(
        words(&rows),
        vec!["cache", "cache", "cache", "cachet", "Cache", "caching"]
    );
    assert_eq!(
        slide_ids(&rows),
        vec![
            "memory.html#/caches",
            "systems.html#/intro",
            "memory.html#/summary",
            "history.html#/seals",
            "memory.html#/title",
            "systems.html#/intro",
        ]
    );
    let exact: Vec<bool> = rows.iter().map(|r| r.is_exact).collect();
    assert_eq!(exact, vec![true, true, true, false, false, false]);
    let counts: Vec<u32> = rows.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![3, 3, 1, 2, 1, 5]);
}

#[test]
fn test_exactness_is_case_sensitive() {
    let rows = lectures_searcher().search("Cache", 0.5).unwrap();
    assert_eq!(words(&rows)[0], "Cache");
    assert!(rows[0].is_exact);
    assert!(rows[1..].iter().all(|r| !r.is_exact));
}

#[test]
fn test_high_threshold_keeps_exact_word_only() {
    let rows = lectures_searcher().search("cache", 1.0).unwrap();
    assert!(rows.iter().all(|r| r.word == "cache" && r.is_exact));
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_unrelated_query_returns_nothing() {
    let rows = lectures_searcher().search("xylophone", 0.5).unwrap();
    assert!(rows.is_empty());
}

// ============================================================================
// EMPTY QUERIES AND DEGRADED INDEXES
// ============================================================================

#[test]
fn test_empty_query_returns_nothing() {
    assert!(lectures_searcher().search("", 0.5).unwrap().is_empty());
    let empty = SlideSearcher::new(Index::default()).unwrap();
    assert!(empty.search("", 0.0).unwrap().is_empty());
}

#[test]
fn test_matched_word_without_occurrences_contributes_no_rows() {
    let index = make_index(&[("cache", "d1", 2)]);
    let words_with_orphan = SimilaritySet::build(["cache", "cachet"]).unwrap();
    let rows = search("cachet", &index, &words_with_orphan, 0.5).unwrap();
    assert_eq!(words(&rows), vec!["cache"]);
}

#[test]
fn test_empty_occurrence_list_contributes_no_rows() {
    let json = r#"{
        "index": {"cache": [], "cachet": [{"slide": "s", "count": 1}]},
        "slides": {"s": {"deckUrl": "d", "slideTitle": "S"}},
        "decks": {"d": {"deckUrl": "d"}}
    }"#;
    let searcher = SlideSearcher::new(Index::from_json(json).unwrap()).unwrap();
    let rows = searcher.search("cache", 0.5).unwrap();
    assert_eq!(words(&rows), vec!["cachet"]);
}

#[test]
fn test_unknown_slide_fails_search() {
    let index = IndexBuilder::new()
        .deck("d1", None, None)
        .slide("s1", "d1", "One")
        .occurrence("cache", "s1", 1)
        .occurrence("cache", "S-missing", 1)
        .build();
    let err = SlideSearcher::new(index)
        .unwrap()
        .search("cache", 0.5)
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::InconsistentIndex(InconsistentIndex::MissingSlide {
            word: "cache".to_string(),
            slide_id: "S-missing".to_string(),
        })
    );
}

#[test]
fn test_broken_fixture_fails_only_for_broken_word() {
    let searcher = SlideSearcher::new(crate::common::broken()).unwrap();
    assert_eq!(searcher.search("cache", 0.9).unwrap().len(), 1);
    assert!(searcher
        .search("ghost", 0.9)
        .unwrap_err()
        .is_inconsistent_index());
}
