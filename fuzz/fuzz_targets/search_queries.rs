// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary documents and queries at the pipeline to verify it never
//! panics, never returns a zero score, and always returns results sorted. If
//! the snippet window splits a multi-byte letter, this is where it shows up.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use arama::{Document, SearchIndex};

#[derive(Arbitrary, Debug)]
struct Input {
    docs: Vec<(String, String, Option<i64>)>,
    query: String,
    now: u32,
}

fuzz_target!(|input: Input| {
    let docs: Vec<Document> = input
        .docs
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, (title, content, ts))| {
            let mut doc = Document::new(format!("doc-{}", i), title, content);
            doc.ts = ts;
            doc
        })
        .collect();
    let count = docs.len();

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();

    let mut index = SearchIndex::new(docs);
    let outcome = index.search_at(&query, f64::from(input.now));

    if query.trim().chars().count() < 2 {
        assert!(outcome.is_too_short(), "short query {:?} was searched", query);
        return;
    }

    let hits = outcome.hits();
    assert!(hits.len() <= count);
    for hit in hits {
        assert!(hit.score > 0.0 && hit.score.is_finite(), "bad score {}", hit.score);
    }
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results not sorted");
    }
});
