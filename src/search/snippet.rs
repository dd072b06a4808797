// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: show the user *why* a post matched.
//!
//! Find the first query token in the body, cut a window around it, and wrap
//! every token occurrence in the window with highlight markers.
//!
//! # Two different notions of "match"
//!
//! Locating the window uses normalized text, so the token "cay" finds "Çay".
//! Highlighting compares tokens against the *raw* window, ASCII
//! case-insensitively, so that same "Çay" is not wrapped. The window lands in
//! the right place but the diacritic variant stays unmarked. This is a known
//! limitation, kept so snippets look the same as the rest of the site's.
//!
//! All offsets are in characters, never bytes, so a window can't split a
//! multi-byte letter.

use crate::config::SearchConfig;
use crate::types::Document;
use crate::util::normalize::NormalizedText;

/// Highlighted excerpt of a document's body.
pub fn snippet(doc: &Document, tokens: &[String], config: &SearchConfig) -> String {
    make_snippet(&doc.content, tokens, config)
}

/// Highlighted excerpt of raw text.
///
/// The first token (in query order) that occurs anywhere in the text picks the
/// window, even if a later token occurs earlier. No token found: the first
/// `snippet_fallback` characters, unhighlighted.
pub fn make_snippet(raw: &str, tokens: &[String], config: &SearchConfig) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let normalized = NormalizedText::new(raw);

    let hit = tokens
        .iter()
        .filter(|token| !token.is_empty())
        .find_map(|token| normalized.find(token));

    let Some(hit) = hit else {
        let head: String = chars.iter().take(config.snippet_fallback).collect();
        return if chars.len() > config.snippet_fallback {
            head + &config.ellipsis
        } else {
            head
        };
    };

    let pos = normalized.raw_index(hit);
    let start = pos.saturating_sub(config.snippet_before);
    let end = pos.saturating_add(config.snippet_after).min(chars.len());
    let window: String = chars[start..end].iter().collect();

    let mut out = String::with_capacity(window.len() + 32);
    if start > 0 {
        out.push_str(&config.ellipsis);
    }
    out.push_str(&highlight(&window, tokens, config));
    if end < chars.len() {
        out.push_str(&config.ellipsis);
    }
    out
}

/// Wrap every ASCII-case-insensitive occurrence of every token in markers.
///
/// Occurrences of different tokens that overlap are merged into one marked
/// span, so markers never nest and a token like "mark" can't match inside
/// markup added for an earlier token.
pub fn highlight(text: &str, tokens: &[String], config: &SearchConfig) -> String {
    let chars: Vec<char> = text.chars().collect();
    let ranges = highlight_ranges(&chars, tokens);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * 13);
    let mut cursor = 0;
    for (start, end) in ranges {
        out.extend(&chars[cursor..start]);
        out.push_str(&config.highlight_open);
        out.extend(&chars[start..end]);
        out.push_str(&config.highlight_close);
        cursor = end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Sorted, non-overlapping char ranges to highlight.
///
/// Each token is scanned left to right, non-overlapping with itself. Ranges
/// from different tokens that overlap are merged; touching ranges are kept
/// apart.
pub fn highlight_ranges(text: &[char], tokens: &[String]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();

    for token in tokens {
        let needle: Vec<char> = token.chars().collect();
        if needle.is_empty() || needle.len() > text.len() {
            continue;
        }

        let mut i = 0;
        while i + needle.len() <= text.len() {
            if matches_at(text, i, &needle) {
                ranges.push((i, i + needle.len()));
                i += needle.len();
            } else {
                i += 1;
            }
        }
    }

    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[inline]
fn matches_at(text: &[char], at: usize, needle: &[char]) -> bool {
    needle
        .iter()
        .zip(&text[at..])
        .all(|(n, t)| t.to_ascii_lowercase() == n.to_ascii_lowercase())
}
