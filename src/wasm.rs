// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search box.
//!
//! The page fetches `index.json`, hands it to `DeckSearch` once, then calls
//! `search` on every input event. Fetching and the table itself stay in JS.
//!
//! ```js
//! const index = await (await fetch(projectPath + "/index.json")).json();
//! const deckSearch = new DeckSearch(index, { minScore: 0.5, showDeckSubtitles: true });
//! input.addEventListener("input", () => render(deckSearch.search(input.value)));
//! ```

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::options::SearchOptions;
use crate::search::SlideSearcher;
use crate::types::Index;

/// WASM-accessible searcher over one loaded index.
#[wasm_bindgen]
pub struct DeckSearch {
    searcher: SlideSearcher,
    options: SearchOptions,
}

#[wasm_bindgen]
impl DeckSearch {
    /// Build from a parsed index object and optional options object.
    #[wasm_bindgen(constructor)]
    pub fn new(index: JsValue, options: Option<JsValue>) -> Result<DeckSearch, JsValue> {
        let index: Index = from_value(index).map_err(|e| e.to_string())?;
        Self::build(index, options)
    }

    /// Build from the raw text of `index.json`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(text: &str, options: Option<JsValue>) -> Result<DeckSearch, JsValue> {
        let index = Index::from_json(text)
            .map_err(|e| format!("invalid index: {}", e))?;
        Self::build(index, options)
    }

    fn build(index: Index, options: Option<JsValue>) -> Result<DeckSearch, JsValue> {
        let options: SearchOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| e.to_string())?
            }
            _ => SearchOptions::default(),
        };
        options.validate().map_err(|e| e.to_string())?;
        let searcher = SlideSearcher::from_options(index, &options)
            .map_err(|e| e.to_string())?;
        Ok(DeckSearch { searcher, options })
    }

    /// Rows formatted for the results table.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let rows = self
            .searcher
            .search_rendered(query, &self.options)
            .map_err(|e| e.to_string())?;
        to_value(&rows).map_err(|e| e.to_string().into())
    }

    /// Unformatted rows (identifiers only).
    #[wasm_bindgen(js_name = searchRows)]
    pub fn search_rows(&self, query: &str) -> Result<JsValue, JsValue> {
        let rows = self
            .searcher
            .search_with(query, &self.options)
            .map_err(|e| e.to_string())?;
        to_value(&rows).map_err(|e| e.to_string().into())
    }

    /// Matched vocabulary words with their scores.
    #[wasm_bindgen]
    pub fn matches(&self, query: &str) -> Result<JsValue, JsValue> {
        let matches = self
            .searcher
            .matches(query, self.options.min_score)
            .map_err(|e| e.to_string())?;
        to_value(&matches).map_err(|e| e.to_string().into())
    }

    /// Number of distinct indexed words.
    #[wasm_bindgen(getter, js_name = vocabularySize)]
    pub fn vocabulary_size(&self) -> usize {
        self.searcher.words().len()
    }
}
