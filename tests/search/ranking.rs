//! Ordering of slides within one matched word, and across words.

use crate::common::{slide_ids, words, IndexBuilder};
use deckfind::{is_ranked, Index, PlacedOccurrence, SlideSearcher};

fn three_deck_index() -> Index {
    IndexBuilder::new()
        .deck("alpha.html", Some("Alpha"), None)
        .deck("beta.html", Some("Beta"), None)
        .deck("gamma.html", Some("Gamma"), None)
        .slide("gamma.html#/1", "gamma.html", "G1")
        .slide("beta.html#/1", "beta.html", "B1")
        .slide("alpha.html#/1", "alpha.html", "A1")
        .slide("alpha.html#/2", "alpha.html", "A2")
        .occurrence("cache", "gamma.html#/1", 2)
        .occurrence("cache", "beta.html#/1", 2)
        .occurrence("cache", "alpha.html#/1", 5)
        .occurrence("cache", "alpha.html#/2", 2)
        .build()
}

#[test]
fn test_higher_count_ranks_first() {
    let rows = SlideSearcher::new(three_deck_index())
        .unwrap()
        .search("cache", 0.5)
        .unwrap();
    assert_eq!(slide_ids(&rows)[0], "alpha.html#/1");
    assert_eq!(rows[0].count, 5);
}

#[test]
fn test_equal_counts_ordered_by_deck() {
    let rows = SlideSearcher::new(three_deck_index())
        .unwrap()
        .search("cache", 0.5)
        .unwrap();
    assert_eq!(
        slide_ids(&rows),
        vec!["alpha.html#/1", "alpha.html#/2", "beta.html#/1", "gamma.html#/1"]
    );
}

#[test]
fn test_same_deck_and_count_keeps_index_order() {
    let index = IndexBuilder::new()
        .deck("d", None, None)
        .slide("d#/9", "d", "Nine")
        .slide("d#/1", "d", "One")
        .occurrence("cache", "d#/9", 1)
        .occurrence("cache", "d#/1", 1)
        .build();
    let rows = SlideSearcher::new(index)
        .unwrap()
        .search("cache", 0.5)
        .unwrap();
    assert_eq!(slide_ids(&rows), vec!["d#/9", "d#/1"]);
}

#[test]
fn test_word_order_beats_count() {
    // A weaker match never outranks a stronger one, whatever its count
    let index = IndexBuilder::new()
        .deck("d", None, None)
        .slide("d#/1", "d", "One")
        .slide("d#/2", "d", "Two")
        .occurrence("cache", "d#/1", 1)
        .occurrence("cached", "d#/2", 100)
        .build();
    let rows = SlideSearcher::new(index)
        .unwrap()
        .search("cache", 0.5)
        .unwrap();
    assert_eq!(words(&rows), vec!["cache", "cached"]);
    assert_eq!(rows[0].count, 1);
}

#[test]
fn test_rows_of_each_word_are_contiguous() {
    let rows = crate::common::lectures_searcher()
        .search("cache", 0.5)
        .unwrap();
    let mut seen: Vec<&str> = Vec::new();
    for word in words(&rows) {
        if seen.last() != Some(&word) {
            assert!(!seen.contains(&word), "{} appears in two runs", word);
            seen.push(word);
        }
    }
}

#[test]
fn test_result_rows_agree_with_comparator() {
    let index = three_deck_index();
    let rows = SlideSearcher::new(index.clone())
        .unwrap()
        .search("cache", 0.5)
        .unwrap();
    let occurrences = index.occurrences_of("cache").unwrap();
    let placed: Vec<PlacedOccurrence<'_>> = rows
        .iter()
        .map(|row| PlacedOccurrence {
            occurrence: occurrences
                .iter()
                .find(|o| o.slide_id == row.slide_id)
                .unwrap(),
            deck_id: row.deck_id.as_str(),
        })
        .collect();
    assert!(is_ranked(&placed));
}
