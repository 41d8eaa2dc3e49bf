// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration shared by the CLI and the browser binding.
//!
//! Every field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::fuzzy::Metric;
use crate::verify::InvalidInput;

/// Default similarity threshold.
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Options passed once at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Similarity threshold in `[0, 1]` (default: 0.5)
    pub min_score: f64,
    /// Similarity metric for the vocabulary (default: levenshtein)
    pub metric: Metric,
    /// Include deck titles in the deck column (default: true)
    pub show_deck_titles: bool,
    /// Include deck subtitles in the deck column (default: false)
    pub show_deck_subtitles: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            metric: Metric::default(),
            show_deck_titles: true,
            show_deck_subtitles: false,
        }
    }
}

impl SearchOptions {
    /// Check the threshold once, at setup, instead of on every query.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(InvalidInput::MinScoreOutOfRange {
                min_score: self.min_score,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SearchOptions::default());
        assert_eq!(options.min_score, 0.5);
        assert!(options.show_deck_titles);
        assert!(!options.show_deck_subtitles);
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"{"minScore": 0.7, "showDeckSubtitles": true, "metric": "jaroWinkler"}"#;
        let options: SearchOptions = serde_json::from_str(raw).unwrap();
        assert_eq!(options.min_score, 0.7);
        assert_eq!(options.metric, Metric::JaroWinkler);
        assert!(options.show_deck_titles);
        assert!(options.show_deck_subtitles);
    }

    #[test]
    fn test_validate_rejects_threshold_outside_unit_range() {
        assert!(SearchOptions::default().validate().is_ok());
        for bad in [1.5, -0.2, f64::NAN] {
            let options = SearchOptions {
                min_score: bad,
                ..SearchOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(InvalidInput::MinScoreOutOfRange { .. })
            ));
        }
        let edge: SearchOptions = serde_json::from_str(r#"{"minScore": 1.0}"#).unwrap();
        assert!(edge.validate().is_ok());
    }
}
