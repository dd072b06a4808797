//! End-to-end scenarios against the small sample corpus.

use super::common::{make_dated_doc, ranked_slugs, sample_corpus, sample_index, slugs, TEST_NOW};
use arama::{hints, stem, SearchIndex};

#[test]
fn test_kahve_ranks_coffee_post_above_tea() {
    let ranked = ranked_slugs(sample_corpus(), "kahve");
    // "Kahve Tarifleri" has the title prefix boost, "Sabah Rutinleri" only a body hit
    assert_eq!(ranked, vec!["post-0", "post-3"]);
    assert!(!ranked.contains(&"post-1".to_string()));
}

#[test]
fn test_kahve_in_body_only_still_matches_below_title_hit() {
    let mut index = SearchIndex::new(vec![
        make_dated_doc(0, "Kahve Tarifleri", "Kahve nasıl demlenir", 0.0),
        make_dated_doc(1, "Çay", "Kahve hakkında bilgi yok burada", 10.0),
    ]);
    let outcome = index.search_at("kahve", TEST_NOW);
    assert_eq!(slugs(&outcome), vec!["post-0", "post-1"]);

    let hits = outcome.hits();
    // 5 title + 1 body + 1000 prefix + 10 recency
    assert!((hits[0].score - 1016.0).abs() < 1e-9, "{}", hits[0].score);
    // 1 body + 10 - ln(11) recency
    let expected = 1.0 + 10.0 - 11f64.ln();
    assert!((hits[1].score - expected).abs() < 1e-9, "{}", hits[1].score);
}

#[test]
fn test_single_char_is_too_short() {
    let mut index = sample_index();
    let outcome = index.search_at("k", TEST_NOW);
    assert!(outcome.is_too_short());
    assert_eq!(outcome.hint(), Some(hints::TOO_SHORT));
    assert_eq!(index.indexed_count(), 0);
}

#[test]
fn test_diacritic_query_matches_plain_title() {
    let mut index = sample_index();
    let outcome = index.search_at("çay", TEST_NOW);
    let hit = outcome
        .hits()
        .iter()
        .find(|hit| hit.document.slug == "post-2")
        .expect("'Cay Nasil Demlenir' should match 'çay'");
    assert!(hit.score >= 1000.0, "title prefix boost missing: {}", hit.score);
}

#[test]
fn test_plural_and_singular_stems() {
    assert_eq!(stem("kahveler"), "kahve");
    assert_eq!(stem("kahve"), "kahv");
}

#[test]
fn test_tea_query_ranks_both_tea_posts() {
    let mut index = sample_index();
    let outcome = index.search_at("çay", TEST_NOW);
    let ranked = slugs(&outcome);
    assert_eq!(&ranked[..2], ["post-1", "post-2"]);
    assert!(!ranked.contains(&"post-0".to_string()));
}

#[test]
fn test_search_builds_caches_lazily_once() {
    let mut index = sample_index();
    index.search_at("kahve", TEST_NOW);
    assert_eq!(index.indexed_count(), index.len());

    let before: Vec<_> = index.docs().iter().map(|d| d.frequencies().cloned()).collect();
    index.search_at("demleme", TEST_NOW);
    let after: Vec<_> = index.docs().iter().map(|d| d.frequencies().cloned()).collect();
    assert_eq!(before, after);
}
