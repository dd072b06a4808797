// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: a corpus plus the caches built over it.
//!
//! There is no separate index build step. A [`SearchIndex`] is just the
//! documents and the engine config; each document grows its own
//! term-frequency cache the first time a query scores it. The caller owns the
//! index and passes it (mutably) into every search.

mod frequencies;

pub use frequencies::*;

use log::info;

use crate::config::SearchConfig;
use crate::scoring::ranking::rank;
use crate::search::pipeline::search_documents;
use crate::search::utils::parse_query;
use crate::types::{Document, ScoredMatch, SearchOutcome};
use crate::util::time::now_secs;

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    docs: Vec<Document>,
    config: SearchConfig,
}

impl SearchIndex {
    pub fn new(docs: Vec<Document>) -> Self {
        Self::with_config(docs, SearchConfig::default())
    }

    pub fn with_config(docs: Vec<Document>, config: SearchConfig) -> Self {
        info!("search index ready: {} documents", docs.len());
        Self { docs, config }
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Number of documents whose frequency cache has been built.
    pub fn indexed_count(&self) -> usize {
        self.docs.iter().filter(|doc| doc.is_indexed()).count()
    }

    /// Build every document's cache up front instead of on the first query.
    pub fn warm(&mut self) {
        self.warm_with(|_| {});
    }

    /// [`warm`](Self::warm), calling `on_doc` after each document is indexed.
    pub fn warm_with<F>(&mut self, on_doc: F)
    where
        F: Fn(&Document) + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.docs.par_iter_mut().for_each(|doc| {
                doc.ensure_indexed();
                on_doc(doc);
            });
        }

        #[cfg(not(feature = "parallel"))]
        for doc in &mut self.docs {
            doc.ensure_indexed();
            on_doc(doc);
        }
    }

    /// Rank the corpus against `query` using the current time.
    pub fn rank(&mut self, query: &str) -> Vec<ScoredMatch<'_>> {
        self.rank_at(query, now_secs())
    }

    /// Rank the corpus as if the current Unix time were `now`.
    pub fn rank_at(&mut self, query: &str, now: f64) -> Vec<ScoredMatch<'_>> {
        let query = parse_query(query.trim());
        rank(&mut self.docs, &query, now, &self.config)
    }

    /// Run the full query pipeline using the current time.
    pub fn search(&mut self, raw_query: &str) -> SearchOutcome<'_> {
        self.search_at(raw_query, now_secs())
    }

    /// Run the full query pipeline as if the current Unix time were `now`.
    pub fn search_at(&mut self, raw_query: &str, now: f64) -> SearchOutcome<'_> {
        search_documents(&mut self.docs, raw_query, now, &self.config)
    }
}

impl From<Vec<Document>> for SearchIndex {
    fn from(docs: Vec<Document>) -> Self {
        Self::new(docs)
    }
}
