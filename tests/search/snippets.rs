//! Snippet windows and highlighting as seen through a search.

use super::common::{make_doc, TEST_NOW};
use arama::{make_snippet, SearchConfig, SearchIndex};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_window_around_first_hit() {
    let content = format!("{} kahve {}", "a".repeat(100), "b".repeat(200));
    let snippet = make_snippet(&content, &tokens(&["kahve"]), &SearchConfig::default());
    let expected = format!(
        "...{} <mark>kahve</mark> {}...",
        "a".repeat(59),
        "b".repeat(114)
    );
    assert_eq!(snippet, expected);
}

#[test]
fn test_no_body_hit_falls_back_to_head() {
    let mut index = SearchIndex::new(vec![make_doc(0, "Kahve", &"y".repeat(200))]);
    let outcome = index.search_at("kahve", TEST_NOW);
    let hit = &outcome.hits()[0];
    assert_eq!(hit.snippet, format!("{}...", "y".repeat(160)));
}

#[test]
fn test_short_body_fallback_has_no_ellipsis() {
    let snippet = make_snippet("kısa metin", &tokens(&["zeytin"]), &SearchConfig::default());
    assert_eq!(snippet, "kısa metin");
}

#[test]
fn test_highlight_is_ascii_case_insensitive() {
    let snippet = make_snippet("KAHVE zamanı", &tokens(&["kahve"]), &SearchConfig::default());
    assert_eq!(snippet, "<mark>KAHVE</mark> zamanı");
}

#[test]
fn test_diacritic_variant_found_but_not_marked() {
    let snippet = make_snippet("Sabah Çay keyfi", &tokens(&["cay"]), &SearchConfig::default());
    assert_eq!(snippet, "Sabah Çay keyfi");
}

#[test]
fn test_every_token_is_marked() {
    let snippet = make_snippet("cay ve kahve", &tokens(&["kahve", "cay"]), &SearchConfig::default());
    assert_eq!(snippet, "<mark>cay</mark> ve <mark>kahve</mark>");
}

#[test]
fn test_query_order_picks_window() {
    let content = format!("zeytin {} kahve", "x".repeat(100));
    let snippet = make_snippet(&content, &tokens(&["kahve", "zeytin"]), &SearchConfig::default());
    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("<mark>kahve</mark>"));
    assert!(!snippet.contains("zeytin"));
}

#[test]
fn test_window_counts_characters_not_bytes() {
    let content = format!("{} kahve", "ş".repeat(100));
    let snippet = make_snippet(&content, &tokens(&["kahve"]), &SearchConfig::default());
    assert_eq!(snippet, format!("...{} <mark>kahve</mark>", "ş".repeat(59)));
}

#[test]
fn test_custom_markers_and_window() {
    let config = SearchConfig {
        snippet_before: 3,
        snippet_after: 8,
        highlight_open: "[".to_string(),
        highlight_close: "]".to_string(),
        ellipsis: "…".to_string(),
        ..SearchConfig::default()
    };
    let snippet = make_snippet("bir iki kahve üç dört", &tokens(&["kahve"]), &config);
    assert_eq!(snippet, "…ki [kahve] üç…");
}
