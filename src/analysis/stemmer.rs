// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heuristic Turkish suffix stripping.
//!
//! Turkish is agglutinative: "kahve" becomes "kahveler", "kahveleri",
//! "kahveden", "kahvenin" and so on. A real morphological analyzer needs a
//! dictionary. We don't ship one. Instead we strip one known ending and hope
//! the query and the document land on the same stem, which they usually do.
//!
//! # Rules
//!
//! - Tokens of 3 characters or fewer are returned as-is.
//! - Suffixes are tried in [`SUFFIXES`] order; the first one that matches and
//!   leaves at least [`MIN_STEM_CHARS`] characters is removed.
//! - At most one suffix is removed. "kahveleri" loses "leri", not "i" then "ler".
//!
//! The list order is load-bearing: `leri` is tried before `i`, so "tarifleri"
//! becomes "tarif" rather than "tarifler". Changing the order changes which
//! documents match, so treat the list as frozen.
//!
//! Stemming runs on normalized tokens, so the dotless/umlaut variants in the
//! list (`dır`, `lü`, `ı` ...) never fire in practice. They stay in the list
//! so the suffix set is identical wherever the stemmer is used.

/// Stems shorter than this are considered over-stemmed.
pub const MIN_STEM_CHARS: usize = 3;

/// Known plural, case and derivational endings, in priority order.
pub const SUFFIXES: &[&str] = &[
    "lar", "ler", "lari", "leri", "dan", "den", "ten", "tan", "dir", "dır", "dur", "dür", "tir",
    "tır", "tur", "tür", "li", "lı", "lu", "lü", "in", "ın", "un", "ün", "e", "a", "i", "ı", "u",
    "ü",
];

/// Strip the first matching suffix from a token.
///
/// ```
/// use arama::stem;
///
/// assert_eq!(stem("kahveler"), "kahve");
/// assert_eq!(stem("kahve"), "kahv");
/// assert_eq!(stem("cay"), "cay");
/// ```
pub fn stem(token: &str) -> String {
    let len = token.chars().count();
    if len <= MIN_STEM_CHARS {
        return token.to_string();
    }

    SUFFIXES
        .iter()
        .find(|suffix| token.ends_with(*suffix) && len - suffix.chars().count() >= MIN_STEM_CHARS)
        .map(|suffix| token[..token.len() - suffix.len()].to_string())
        .unwrap_or_else(|| token.to_string())
}
