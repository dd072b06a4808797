//! Snippet shape over random bodies and queries.

use arama::{make_snippet, tokenize, SearchConfig};
use proptest::prelude::*;

fn body() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zçğıöşüA-ZÇĞİÖŞÜ ,]{0,400}").unwrap()
}

fn strip_markup(snippet: &str) -> String {
    snippet.replace("<mark>", "").replace("</mark>", "")
}

proptest! {
    #[test]
    fn prop_snippet_is_a_slice_of_the_body(content in body(), q in "[a-zçş ]{1,12}") {
        let config = SearchConfig::default();
        let tokens = tokenize(&q);
        let snippet = make_snippet(&content, &tokens, &config);

        let plain = strip_markup(&snippet);
        let plain = plain.strip_prefix("...").unwrap_or(&plain);
        let plain = plain.strip_suffix("...").unwrap_or(plain);
        prop_assert!(content.contains(plain), "{:?} not in {:?}", plain, content);
    }

    #[test]
    fn prop_snippet_length_is_bounded(content in body(), q in "[a-z ]{1,12}") {
        let config = SearchConfig::default();
        let snippet = strip_markup(&make_snippet(&content, &tokenize(&q), &config));
        let max = config.snippet_before + config.snippet_after + 2 * config.ellipsis.len();
        prop_assert!(snippet.chars().count() <= max.max(config.snippet_fallback + config.ellipsis.len()));
    }

    #[test]
    fn prop_marks_are_balanced(content in body(), q in "[a-z ]{1,12}") {
        let snippet = make_snippet(&content, &tokenize(&q), &SearchConfig::default());
        prop_assert_eq!(snippet.matches("<mark>").count(), snippet.matches("</mark>").count());
        prop_assert!(!snippet.contains("<mark><mark>"));
    }
}
