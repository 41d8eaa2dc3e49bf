// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use deckfind::{Index, Metric, RenderedRow, SearchOptions, SlideSearcher};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            query,
            min_score,
            metric,
            no_deck_titles,
            deck_subtitles,
            json,
        } => {
            let options = SearchOptions {
                min_score,
                metric,
                show_deck_titles: !no_deck_titles,
                show_deck_subtitles: deck_subtitles,
            };
            run_search(&index, &query, &options, json)
        }
        Commands::Match {
            index,
            query,
            min_score,
            metric,
        } => run_match(&index, &query, min_score, metric),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

/// Read and parse an index file. Load failures are reported here, never by the library.
fn load_index(path: &Path) -> Result<Index> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read index {}", path.display()))?;
    let index = Index::from_json(&raw)
        .with_context(|| format!("cannot parse index {}", path.display()))?;
    log::info!(
        "loaded {}: {} words, {} slides, {} decks",
        path.display(),
        index.occurrences.len(),
        index.slides.len(),
        index.decks.len()
    );
    Ok(index)
}

fn run_search(path: &Path, query: &str, options: &SearchOptions, json: bool) -> Result<()> {
    options.validate()?;
    let searcher = SlideSearcher::from_options(load_index(path)?, options)
        .context("cannot build vocabulary")?;
    let rows = searcher
        .search_rendered(query, options)
        .with_context(|| format!("search for {:?} failed", query))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_rows(&rows);
    Ok(())
}

const WORD_WIDTH: usize = 18;
const DECK_WIDTH: usize = 26;
const SLIDE_WIDTH: usize = 30;

fn print_rows(rows: &[RenderedRow]) {
    if rows.is_empty() {
        println!("{}", muted("no matches"));
        return;
    }

    println!(
        "{} {} {} {}",
        pad_right(&header("Word"), WORD_WIDTH),
        pad_right(&header("Deck"), DECK_WIDTH),
        pad_right(&header("Slide"), SLIDE_WIDTH),
        header("Hits")
    );

    for row in rows {
        let deck = if row.deck_label.is_empty() {
            muted(&truncate(&row.deck_url, DECK_WIDTH))
        } else {
            truncate(&row.deck_label, DECK_WIDTH)
        };
        let slide = if row.slide_title.is_empty() {
            muted(&truncate(&row.slide_url, SLIDE_WIDTH))
        } else {
            truncate(&row.slide_title, SLIDE_WIDTH)
        };
        let word = word_label(&truncate(&row.word, WORD_WIDTH), row.is_exact);
        println!(
            "{} {} {} {}",
            pad_right(&word, WORD_WIDTH),
            pad_right(&deck, DECK_WIDTH),
            pad_right(&slide, SLIDE_WIDTH),
            pad_left(&row.count.to_string(), 4)
        );
    }
}

fn run_match(path: &Path, query: &str, min_score: f64, metric: Metric) -> Result<()> {
    let searcher = SlideSearcher::with_metric(load_index(path)?, metric)
        .context("cannot build vocabulary")?;
    let matches = searcher.matches(query, min_score)?;

    if matches.is_empty() {
        println!("{}", muted("no matches"));
        return Ok(());
    }
    for m in &matches {
        println!(
            "{}  {}",
            score_value(m.score),
            word_label(&m.word, m.word == query)
        );
    }
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let index = load_index(path)?;

    let occurrences: usize = index.occurrences.values().map(Vec::len).sum();
    let hits: u64 = index
        .occurrences
        .values()
        .flatten()
        .map(|o| u64::from(o.count))
        .sum();
    let longest = index
        .vocabulary()
        .max_by_key(|word| (word.chars().count(), Reverse(*word)))
        .unwrap_or("");

    section_top(&path.display().to_string());
    row(&format!(" words        {:>10}", index.occurrences.len()));
    row(&format!(" occurrences  {:>10}", occurrences));
    row(&format!(" total hits   {:>10}", hits));
    row(&format!(" slides       {:>10}", index.slides.len()));
    row(&format!(" decks        {:>10}", index.decks.len()));
    row(&format!(" longest word {:>10}", truncate(longest, 40)));

    let validation = index.validate();
    let references = pad_left(&status(validation.is_ok()), 10);
    row(&format!(" references   {}", references));
    section_bot();

    if let Err(e) = validation {
        log::warn!("{} failed validation: {}", path.display(), e);
        bail!("index is inconsistent: {}", e);
    }
    Ok(())
}
