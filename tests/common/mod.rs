//! Shared test utilities and fixtures.

#![allow(dead_code)]

use arama::{Document, SearchIndex, SearchOutcome};

// Re-export canonical test utilities from arama::testing
pub use arama::testing::{make_dated_doc, make_doc, sample_corpus, synthetic_corpus, TEST_NOW};

/// Index over [`sample_corpus`] with default settings.
pub fn sample_index() -> SearchIndex {
    SearchIndex::new(sample_corpus())
}

/// Slugs of the hits, in rank order.
pub fn slugs(outcome: &SearchOutcome<'_>) -> Vec<String> {
    outcome.hits().iter().map(|hit| hit.document.slug.clone()).collect()
}

/// Run a query at [`TEST_NOW`] and return the ranked slugs.
pub fn ranked_slugs(docs: Vec<Document>, query: &str) -> Vec<String> {
    let mut index = SearchIndex::new(docs);
    let outcome = index.search_at(query, TEST_NOW);
    slugs(&outcome)
}
