// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how the rows for a matched word get their order.
//!
//! Words themselves are ordered by the similarity set (score, then word).
//! This module only orders the slides within one word.

pub mod ranking;

pub use ranking::{compare_occurrences, is_ranked, sort_occurrences, PlacedOccurrence};
