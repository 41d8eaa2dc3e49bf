// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the deckfind command-line interface.
//!
//! Three subcommands: `search` runs the full query -> rows pipeline against an
//! `index.json`, `match` shows only the vocabulary matches with their scores,
//! and `inspect` summarizes an index and checks its references.

pub mod display;

use clap::{Parser, Subcommand};
use deckfind::{Metric, DEFAULT_MIN_SCORE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deckfind",
    about = "Fuzzy word search over slide-deck indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and list matching slides
    Search {
        /// Path to index.json
        index: PathBuf,

        /// Search query (case-sensitive)
        query: String,

        /// Minimum similarity score in [0, 1]
        #[arg(short, long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: f64,

        /// Similarity metric: levenshtein, jaro-winkler or dice
        #[arg(long, default_value_t = Metric::Levenshtein)]
        metric: Metric,

        /// Leave deck titles out of the deck column
        #[arg(long)]
        no_deck_titles: bool,

        /// Add deck subtitles to the deck column
        #[arg(long)]
        deck_subtitles: bool,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which vocabulary words match a query, with scores
    Match {
        /// Path to index.json
        index: PathBuf,

        /// Search query (case-sensitive)
        query: String,

        /// Minimum similarity score in [0, 1]
        #[arg(short, long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: f64,

        /// Similarity metric: levenshtein, jaro-winkler or dice
        #[arg(long, default_value_t = Metric::Levenshtein)]
        metric: Metric,
    },

    /// Summarize an index and check that every reference resolves
    Inspect {
        /// Path to index.json
        index: PathBuf,
    },
}
