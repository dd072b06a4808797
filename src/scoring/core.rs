// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Three additive signals. Term frequency says how much a post talks about the
//! query. The title boost says whether the post is *about* the query. Recency
//! nudges newer posts up among otherwise similar ones.
//!
//! # Magnitudes
//!
//! | Signal             | Range          | Why this size |
//! |--------------------|----------------|---------------|
//! | Title prefix boost | +1000          | Beats any realistic frequency total |
//! | Title contains     | +500           | Below prefix, still above frequency |
//! | Term frequency     | 5/title, 1/body| Title words count five times |
//! | Recency            | [0, 10]        | Tiebreaker; one title hit is already 5 |
//!
//! A document scoring exactly zero is not a match and never reaches the ranker
//! output.

use crate::config::SearchConfig;
use crate::index::TermFrequencies;
use crate::types::{Document, Query};
use crate::util::normalize::normalize;
use crate::util::time::SECONDS_PER_DAY;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight of one stem occurrence in the title.
pub const TITLE_WEIGHT: f64 = 5.0;

/// Weight of one stem occurrence in the body.
pub const BODY_WEIGHT: f64 = 1.0;

/// Boost when the normalized title starts with the normalized query.
pub const TITLE_PREFIX_BOOST: f64 = 1000.0;

/// Boost when the normalized title contains the normalized query elsewhere.
pub const TITLE_CONTAINS_BOOST: f64 = 500.0;

/// Shorter normalized queries get no title boost (every title contains "a").
pub const MIN_BOOST_QUERY_CHARS: usize = 2;

/// Recency boost for a post published right now.
pub const RECENCY_CEILING: f64 = 10.0;

/// Sum of weighted stem counts over all query terms.
///
/// Repeated query terms are counted again: "kahve kahve" doubles the signal.
pub fn term_frequency_score(freqs: &TermFrequencies, terms: &[String], config: &SearchConfig) -> f64 {
    terms
        .iter()
        .map(|term| {
            config.title_weight * f64::from(freqs.title_count(term))
                + config.body_weight * f64::from(freqs.body_count(term))
        })
        .sum()
}

/// Prefix or substring match of the whole normalized query against the title.
pub fn title_boost(title: &str, normalized_query: &str, config: &SearchConfig) -> f64 {
    if normalized_query.chars().count() < config.min_boost_query_chars {
        return 0.0;
    }

    let title = normalize(title);
    if title.starts_with(normalized_query) {
        config.title_prefix_boost
    } else if title.contains(normalized_query) {
        config.title_contains_boost
    } else {
        0.0
    }
}

/// `max(0, ceiling − ln(1 + ageDays))` for documents that carry a timestamp.
///
/// Future timestamps count as age zero. A timestamp of `0` is treated as
/// missing, since that is what exporters write when they have no date.
pub fn recency_boost(ts: Option<i64>, now: f64, config: &SearchConfig) -> f64 {
    match ts {
        Some(ts) if ts != 0 => {
            let age_days = ((now - ts as f64) / SECONDS_PER_DAY).max(0.0);
            (config.recency_ceiling - age_days.ln_1p()).max(0.0)
        }
        _ => 0.0,
    }
}

/// Score one document against a parsed query.
///
/// Builds the document's frequency cache on first call.
pub fn score(doc: &mut Document, query: &Query, now: f64, config: &SearchConfig) -> f64 {
    let frequency = term_frequency_score(doc.ensure_indexed(), &query.terms, config);
    frequency + title_boost(&doc.title, &query.normalized, config) + recency_boost(doc.ts, now, config)
}
