// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus parsing.
//!
//! Whatever bytes end up in `search/index.json` or the inline payload, loading
//! either returns an error or a corpus that can be searched.

#![no_main]

use libfuzzer_sys::fuzz_target;

use arama::{load_corpus_inline, load_corpus_json, SearchIndex};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    if let Ok(docs) = load_corpus_json(&text) {
        let mut index = SearchIndex::new(docs);
        let _ = index.search_at("kahve", 1_750_000_000.0);
    }

    let _ = load_corpus_inline(&text);
});
