//! Repeated searches must give identical results.

use crate::common::{lectures, lectures_searcher};
use deckfind::{Metric, SlideSearcher};

const QUERIES: &[&str] = &["cache", "Cache", "cach", "memroy", "seals", "c", "zzz"];

#[test]
fn test_repeated_searches_identical() {
    let searcher = lectures_searcher();
    for query in QUERIES {
        let first = searcher.search(query, 0.4).unwrap();
        for _ in 0..5 {
            let again = searcher.search(query, 0.4).unwrap();
            assert_eq!(again, first, "query {:?}", query);
        }
    }
}

#[test]
fn test_rebuilt_searcher_gives_same_results() {
    // HashMap iteration order differs between the two builds
    for metric in [Metric::Levenshtein, Metric::JaroWinkler, Metric::Dice] {
        let a = SlideSearcher::with_metric(lectures(), metric).unwrap();
        let b = SlideSearcher::with_metric(lectures(), metric).unwrap();
        for query in QUERIES {
            assert_eq!(
                a.search(query, 0.3).unwrap(),
                b.search(query, 0.3).unwrap(),
                "{} {:?}",
                metric,
                query
            );
        }
    }
}

#[test]
fn test_search_does_not_change_the_index() {
    let searcher = lectures_searcher();
    let before = searcher.index().clone();
    for query in QUERIES {
        let _ = searcher.search(query, 0.2).unwrap();
    }
    assert_eq!(searcher.index(), &before);
}

#[test]
fn test_concurrent_searches_agree() {
    let searcher = lectures_searcher();
    let expected = searcher.search("cache", 0.5).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| searcher.search("cache", 0.5).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
