// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-keystroke entry point.
//!
//! The UI debounces input and calls this with whatever is in the box. Too
//! short, and we say so without ranking anything. Otherwise rank, then cut a
//! snippet for each hit.

use log::debug;

use crate::config::SearchConfig;
use crate::scoring::ranking::rank;
use crate::search::snippet::snippet;
use crate::search::utils::parse_query;
use crate::types::{Document, SearchHit, SearchOutcome};

/// Run a raw query against a corpus.
///
/// Input is trimmed first; fewer than `min_query_chars` characters left means
/// [`SearchOutcome::TooShort`] and no document is touched.
pub fn search_documents<'a>(
    docs: &'a mut [Document],
    raw_query: &str,
    now: f64,
    config: &SearchConfig,
) -> SearchOutcome<'a> {
    let trimmed = raw_query.trim();
    if trimmed.chars().count() < config.min_query_chars {
        debug!("query '{}' too short, not searching", trimmed);
        return SearchOutcome::TooShort;
    }

    let query = parse_query(trimmed);
    let hits = rank(docs, &query, now, config)
        .into_iter()
        .map(|m| SearchHit {
            document: m.document,
            score: m.score,
            snippet: snippet(m.document, &query.tokens, config),
        })
        .collect();

    SearchOutcome::Results(hits)
}
