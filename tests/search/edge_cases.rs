//! Inputs at the edges: empty corpora, blank and odd queries, sparse records.

use super::common::{make_dated_doc, make_doc, TEST_NOW};
use arama::{hints, load_corpus_json, Document, SearchIndex};

#[test]
fn test_empty_corpus_returns_empty_results() {
    let mut index = SearchIndex::new(vec![]);
    let outcome = index.search_at("kahve", TEST_NOW);
    assert!(!outcome.is_too_short());
    assert!(outcome.hits().is_empty());
    assert_eq!(outcome.hint(), Some(hints::NO_RESULTS));
}

#[test]
fn test_whitespace_query_is_too_short() {
    let mut index = SearchIndex::new(vec![make_doc(0, "Kahve", "kahve")]);
    assert!(index.search_at("   ", TEST_NOW).is_too_short());
    assert!(index.search_at(" a\t", TEST_NOW).is_too_short());
}

#[test]
fn test_two_multibyte_chars_are_long_enough() {
    let mut index = SearchIndex::new(vec![make_doc(0, "Üç Adım", "adım adım")]);
    let outcome = index.search_at("üç", TEST_NOW);
    assert!(!outcome.is_too_short());
    assert_eq!(outcome.hits().len(), 1);
}

#[test]
fn test_punctuation_only_query_matches_nothing() {
    let mut index = SearchIndex::new(vec![make_doc(0, "Kahve", "kahve")]);
    let outcome = index.search_at("?!", TEST_NOW);
    assert!(!outcome.is_too_short());
    assert!(outcome.hits().is_empty());
}

#[test]
fn test_recency_alone_is_enough_to_match() {
    // A dated post scores its recency boost even with no term hit.
    let mut index = SearchIndex::new(vec![
        make_dated_doc(0, "Bahçe", "domates", 1.0),
        make_doc(1, "Kitaplar", "roman"),
    ]);
    let outcome = index.search_at("zeytin", TEST_NOW);
    let hits = outcome.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.slug, "post-0");
    assert!(hits[0].score < 10.0);
}

#[test]
fn test_zero_timestamp_gets_no_recency() {
    let mut index = SearchIndex::new(vec![make_doc(0, "Bahçe", "domates").with_ts(0)]);
    assert!(index.search_at("zeytin", TEST_NOW).hits().is_empty());
}

#[test]
fn test_sparse_records_are_searchable() {
    let docs = load_corpus_json(
        r#"[
            {"slug": "a", "title": "Kahve"},
            {"slug": "b", "content": "kahve demlemek", "ts": "oops"},
            {"slug": "c", "title": 2024, "content": null}
        ]"#,
    )
    .unwrap();
    let mut index = SearchIndex::new(docs);
    let outcome = index.search_at("kahve", TEST_NOW);
    let slugs: Vec<&str> = outcome.hits().iter().map(|h| h.document.slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[test]
fn test_future_timestamp_counts_as_today() {
    let future = make_doc(0, "Bahçe", "domates").with_ts(TEST_NOW as i64 + 86_400 * 30);
    let today = make_dated_doc(1, "Bahçe", "domates", 0.0);
    let mut index = SearchIndex::new(vec![future, today]);
    let matches = index.rank_at("domates", TEST_NOW);
    assert_eq!(matches[0].score, matches[1].score);
}

#[test]
fn test_long_body_is_searched_to_the_end() {
    let mut content = "dolgu ".repeat(10_000);
    content.push_str("hazine");
    let mut index = SearchIndex::new(vec![Document::new("uzun", "Uzun Yazı", content)]);
    let outcome = index.search_at("hazine", TEST_NOW);
    assert_eq!(outcome.hits().len(), 1);
    assert!(outcome.hits()[0].snippet.ends_with("<mark>hazine</mark>"));
}
