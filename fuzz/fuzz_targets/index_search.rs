// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for loading and searching untrusted index JSON.
//!
//! Parsing may fail, and searching an inconsistent index may fail, but
//! neither may panic. A successful search over an index that validates
//! must also render.

#![no_main]

use arbitrary::Arbitrary;
use deckfind::{Index, SearchOptions, SlideSearcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    json: String,
    query: String,
    threshold: u8,
}

fuzz_target!(|input: SearchInput| {
    let Ok(index) = Index::from_json(&input.json) else {
        return;
    };
    let consistent = index.validate().is_ok();

    let Ok(searcher) = SlideSearcher::new(index) else {
        // Empty words are rejected when the vocabulary is built
        return;
    };

    let options = SearchOptions {
        min_score: f64::from(input.threshold) / 255.0,
        ..SearchOptions::default()
    };
    let result = searcher.search_rendered(&input.query, &options);
    if consistent {
        assert!(result.is_ok(), "consistent index failed: {:?}", result);
    }
});
