//! Normalizer, tokenizer and stemmer properties.

use arama::analysis::{is_token_char, MIN_STEM_CHARS, SUFFIXES};
use arama::{normalize, stem, tokenize};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Turkish-flavored text: letters of both cases, digits, spaces, punctuation.
fn turkish_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-ZçğıöşüÇĞİÖŞÜ0-9 .,;:!?'\"()-]{0,80}").unwrap()
}

/// Already-normalized tokens, the only input the stemmer ever sees.
fn token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,14}").unwrap()
}

/// Reference stemmer: first suffix in list order that leaves enough behind.
fn stem_oracle(token: &str) -> String {
    let len = token.chars().count();
    if len <= MIN_STEM_CHARS {
        return token.to_string();
    }
    for suffix in SUFFIXES {
        if token.ends_with(suffix) && len - suffix.chars().count() >= MIN_STEM_CHARS {
            return token[..token.len() - suffix.len()].to_string();
        }
    }
    token.to_string()
}

// ============================================================================
// NORMALIZER
// ============================================================================

proptest! {
    #[test]
    fn prop_normalize_removes_turkish_letters(text in turkish_text()) {
        let normalized = normalize(&text);
        for c in ['ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü'] {
            prop_assert!(!normalized.contains(c), "{:?} kept {:?}", normalized, c);
        }
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_normalize_is_idempotent(text in turkish_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_keeps_char_count(text in turkish_text()) {
        prop_assert_eq!(normalize(&text).chars().count(), text.chars().count());
    }
}

// ============================================================================
// TOKENIZER
// ============================================================================

proptest! {
    #[test]
    fn prop_tokens_are_non_empty_and_clean(text in turkish_text()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(is_token_char));
        }
    }

    #[test]
    fn prop_tokens_rebuild_normalized_text(text in turkish_text()) {
        // Walk the normalized text: every token-char run must be the next token.
        let normalized = normalize(&text);
        let mut tokens = tokenize(&text).into_iter();
        let mut run = String::new();
        for c in normalized.chars().chain(std::iter::once(' ')) {
            if is_token_char(c) {
                run.push(c);
            } else if !run.is_empty() {
                prop_assert_eq!(tokens.next(), Some(run.clone()));
                run.clear();
            }
        }
        prop_assert_eq!(tokens.next(), None);
    }
}

// ============================================================================
// STEMMER
// ============================================================================

proptest! {
    #[test]
    fn prop_stem_matches_oracle(token in token()) {
        prop_assert_eq!(stem(&token), stem_oracle(&token));
    }

    #[test]
    fn prop_short_tokens_unchanged(token in "[a-z0-9]{1,3}") {
        prop_assert_eq!(stem(&token), token);
    }

    #[test]
    fn prop_stem_strips_at_most_one_suffix(token in token()) {
        let stemmed = stem(&token);
        prop_assert!(token.starts_with(&stemmed));
        let removed = &token[stemmed.len()..];
        prop_assert!(removed.is_empty() || SUFFIXES.contains(&removed));
        if token.chars().count() > MIN_STEM_CHARS {
            prop_assert!(stemmed.chars().count() >= MIN_STEM_CHARS);
        }
    }
}
