// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score every document, drop the zeros, sort.
//!
//! Ties keep corpus order. The corpus is usually sorted newest first by the
//! site generator, so equal scores fall back to "newer first" for free. That
//! only works with a stable sort, so no `sort_unstable_by` here.

use log::debug;
use std::cmp::Ordering;

use crate::config::SearchConfig;
use crate::scoring::core::score;
use crate::types::{Document, Query, ScoredMatch};

/// Compare two matches for ranking: higher score first.
///
/// Equal scores compare `Equal`, leaving the order to the stable sort.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Score every document, in corpus order.
///
/// With the `parallel` feature, documents are scored on the rayon pool. Each
/// worker only touches its own document's cache, and `collect` keeps order.
pub fn score_all(docs: &mut [Document], query: &Query, now: f64, config: &SearchConfig) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        return docs
            .par_iter_mut()
            .map(|doc| score(doc, query, now, config))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    {
        docs.iter_mut()
            .map(|doc| score(doc, query, now, config))
            .collect()
    }
}

/// Rank a corpus against a parsed query.
///
/// Returns only documents with a positive score, best first. An empty corpus
/// gives an empty result.
pub fn rank<'a>(
    docs: &'a mut [Document],
    query: &Query,
    now: f64,
    config: &SearchConfig,
) -> Vec<ScoredMatch<'a>> {
    let scores = score_all(docs, query, now, config);
    let docs: &'a [Document] = docs;

    let mut matches: Vec<ScoredMatch<'a>> = docs
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > 0.0)
        .map(|(document, score)| ScoredMatch { document, score })
        .collect();

    matches.sort_by(compare_matches);

    debug!(
        "ranked '{}': {} of {} documents matched",
        query.raw,
        matches.len(),
        docs.len()
    );

    matches
}
