// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenization over normalized text.

use crate::util::normalize::normalize;

/// Split text into `[a-z0-9]+` tokens after normalization.
///
/// Anything else is a separator: spaces, punctuation, apostrophes, and any
/// non-Turkish accented letter that survived normalization ("café" → "caf").
/// Empty fragments are dropped and document order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Token alphabet: ASCII lowercase letters and digits.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
