// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the arama command-line interface.
//!
//! Three subcommands: `search` to query a corpus the way the site widget
//! does, `inspect` to see what the engine makes of a corpus, and `index` to
//! build the corpus from rendered posts.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arama",
    about = "Client-side Turkish full-text search for static blogs",
    version
)]
pub struct Cli {
    /// Log engine internals (cache builds, ranking passes) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results with snippets
    Search {
        /// Corpus JSON file (search/index.json) or a page with an inline payload
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Unix time to score recency against (default: now)
        #[arg(long)]
        now: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Engine settings file (JSON, camelCase keys; missing keys keep defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a corpus: documents, dates, vocabulary
    Inspect {
        /// Corpus JSON file or a page with an inline payload
        corpus: PathBuf,

        /// Number of most frequent stems to list
        #[arg(short, long, default_value = "15")]
        top: usize,
    },

    /// Build the search corpus from rendered post pages
    Index {
        /// Directory containing post *.html files
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON index
        #[arg(short, long)]
        output: PathBuf,

        /// Page template with a {{SEARCH_JSON}} placeholder
        #[arg(long, requires = "page")]
        template: Option<PathBuf>,

        /// Where to write the rendered template
        #[arg(long, requires = "template")]
        page: Option<PathBuf>,
    },
}
