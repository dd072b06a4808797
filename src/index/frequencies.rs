// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document stem counts, built on first use.
//!
//! Tokenizing a 60k-character post on every keystroke is wasteful, so the first
//! ranking pass that touches a document counts its stems once and parks the
//! result on the document. The corpus never changes during a session, so the
//! cache is never invalidated.

use log::debug;
use std::collections::HashMap;

use crate::analysis::analyze;
use crate::types::Document;

/// Stem → occurrence count for a document's title and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    pub title: HashMap<String, u32>,
    pub body: HashMap<String, u32>,
}

impl TermFrequencies {
    /// Count stems in a title and body independently.
    pub fn build(title: &str, body: &str) -> Self {
        Self {
            title: count_stems(title),
            body: count_stems(body),
        }
    }

    pub fn title_count(&self, stem: &str) -> u32 {
        self.title.get(stem).copied().unwrap_or(0)
    }

    pub fn body_count(&self, stem: &str) -> u32 {
        self.body.get(stem).copied().unwrap_or(0)
    }
}

fn count_stems(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for stem in analyze(text) {
        *counts.entry(stem).or_insert(0) += 1;
    }
    counts
}

impl Document {
    /// Build the frequency cache if it isn't built yet, then return it.
    ///
    /// Idempotent: the second call returns the maps built by the first.
    pub fn ensure_indexed(&mut self) -> &TermFrequencies {
        let Self {
            slug,
            title,
            content,
            index,
            ..
        } = self;

        index.get_or_insert_with(|| {
            debug!("indexing '{}' ({} body chars)", slug, content.len());
            TermFrequencies::build(title, content)
        })
    }

    /// The cached frequencies, or `None` if this document was never scored.
    pub fn frequencies(&self) -> Option<&TermFrequencies> {
        self.index.as_ref()
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }
}
