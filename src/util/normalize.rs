// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for accent-insensitive Turkish search.
//!
//! Turkish has six letters with diacritics (ç, ğ, ı, ö, ş, ü) plus the dotted
//! capital İ. People type queries on phones and English keyboards, so "cay" has
//! to find "Çay" and "Istanbul" has to find "İstanbul". We fold each of these to
//! its closest ASCII letter, then lowercase.
//!
//! The fold is a fixed table, not NFD decomposition: `ı` (dotless i) has no
//! decomposition at all, and `İ` lowercases to `i̇` (two chars) under Unicode
//! rules. Folding before lowercasing keeps both one-to-one.
//!
//! Folding is per character, so every normalized character can be traced back
//! to the raw character it came from. [`NormalizedText`] keeps that mapping for
//! snippet extraction, which searches normalized text but slices raw text.

/// Fold a single Turkish diacritic to its base Latin letter.
///
/// Characters outside the table pass through untouched.
#[inline]
pub fn fold_char(c: char) -> char {
    match c {
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ı' | 'İ' => 'i',
        'ö' | 'Ö' => 'o',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' => 'u',
        other => other,
    }
}

/// Normalize a string for search: fold Turkish diacritics, then lowercase.
///
/// - "Çay" → "cay"
/// - "KAHVELERİ" → "kahveleri"
/// - "Işık" → "isik"
///
/// Lowercasing is ordinary Unicode case mapping, never locale-sensitive. Total:
/// the empty string maps to the empty string.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(fold_char)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized text that remembers where each character came from.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    /// `origins[i]` is the raw char index that produced normalized char `i`.
    origins: Vec<usize>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut origins = Vec::with_capacity(raw.len());

        for (raw_idx, c) in raw.chars().enumerate() {
            for lower in fold_char(c).to_lowercase() {
                text.push(lower);
                origins.push(raw_idx);
            }
        }

        Self { text, origins }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Char index (not byte index) of the first occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.text
            .find(needle)
            .map(|byte| self.text[..byte].chars().count())
    }

    /// Map a normalized char index back to a raw char index.
    ///
    /// Indices past the end clamp to one past the last raw character.
    pub fn raw_index(&self, normalized_idx: usize) -> usize {
        match self.origins.get(normalized_idx) {
            Some(&raw) => raw,
            None => self.origins.last().map_or(0, |&last| last + 1),
        }
    }
}
