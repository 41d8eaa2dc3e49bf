//! Rendered rows over the lectures fixture.

use crate::common::lectures_searcher;
use deckfind::{RenderedRow, SearchOptions};

fn render(options: &SearchOptions) -> Vec<RenderedRow> {
    lectures_searcher()
        .search_rendered("cache", options)
        .unwrap()
}

fn labels(rows: &[RenderedRow]) -> Vec<&str> {
    rows.iter().map(|r| r.deck_label.as_str()).collect()
}

#[test]
fn test_default_options_show_titles_only() {
    let rows = render(&SearchOptions::default());
    assert_eq!(
        labels(&rows),
        vec!["Memory", "Operating Systems", "Memory", "", "Memory", "Operating Systems"]
    );
}

#[test]
fn test_subtitles_join_titles() {
    let options = SearchOptions {
        show_deck_subtitles: true,
        ..SearchOptions::default()
    };
    let rows = render(&options);
    assert_eq!(rows[0].deck_label, "Memory \u{2014} Lecture 4");
    assert_eq!(rows[1].deck_label, "Operating Systems");
}

#[test]
fn test_subtitles_alone() {
    let options = SearchOptions {
        show_deck_titles: false,
        show_deck_subtitles: true,
        ..SearchOptions::default()
    };
    assert_eq!(
        labels(&render(&options)),
        vec!["Lecture 4", "", "Lecture 4", "", "Lecture 4", ""]
    );
}

#[test]
fn test_untitled_deck_still_has_url() {
    let rows = render(&SearchOptions::default());
    let seals = &rows[3];
    assert_eq!(seals.deck_label, "");
    assert_eq!(seals.deck_url, "history.html");
    assert_eq!(seals.slide_title, "Wax Seals");
    assert_eq!(seals.slide_url, "history.html#/seals");
}

#[test]
fn test_rendered_rows_keep_search_order() {
    let searcher = lectures_searcher();
    let options = SearchOptions::default();
    let rows = searcher.search_with("cache", &options).unwrap();
    let rendered = searcher.search_rendered("cache", &options).unwrap();
    assert_eq!(rows.len(), rendered.len());
    for (row, line) in rows.iter().zip(&rendered) {
        assert_eq!(row.slide_id, line.slide_url);
        assert_eq!(row.word, line.word);
        assert_eq!(row.count, line.count);
    }
}

#[test]
fn test_rendered_rows_serialize_camel_case() {
    let rows = render(&SearchOptions::default());
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["isExact"], true);
    assert_eq!(json["deckLabel"], "Memory");
    assert_eq!(json["slideUrl"], "memory.html#/caches");
}
