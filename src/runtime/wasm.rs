// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for arama search.
//!
//! This is the browser-facing API. The searcher owns the corpus and its
//! caches for the lifetime of the page; every call returns a plain object
//! the widget can render directly.
//!
//! ```js
//! const searcher = new AramaSearcher(json, { snippetAfter: 160 });
//! const out = searcher.search(input.value, 20);
//! if (out.status === "tooShort") showHint();
//! else render(out.results);
//! ```
//!
//! Build with `--no-default-features --features wasm`: the browser build is
//! single-threaded.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::build::load_corpus_json;
use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::types::SearchOutcome;
use crate::util::time::now_secs;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct AramaSearcher {
    index: SearchIndex,
}

#[wasm_bindgen]
impl AramaSearcher {
    /// Parse the corpus JSON array. `options` is a partial `SearchConfig`
    /// with camelCase keys; anything missing keeps its default.
    #[wasm_bindgen(constructor)]
    pub fn new(corpus_json: &str, options: JsValue) -> Result<AramaSearcher, JsValue> {
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };
        let docs = load_corpus_json(corpus_json).map_err(js_error)?;
        Ok(Self {
            index: SearchIndex::with_config(docs, config),
        })
    }

    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }

    /// Build every frequency cache now, e.g. while the page is idle.
    pub fn warm(&mut self) {
        self.index.warm();
    }

    /// `{ status: "tooShort" }` or `{ status: "ok", results: [...] }`.
    ///
    /// Results are already ranked; `limit` cuts the list, `undefined` keeps all.
    pub fn search(&mut self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let outcome = match self.index.search_at(query, now_secs()) {
            SearchOutcome::Results(mut hits) => {
                if let Some(limit) = limit {
                    hits.truncate(limit);
                }
                SearchOutcome::Results(hits)
            }
            too_short => too_short,
        };
        to_value(&outcome).map_err(js_error)
    }
}
