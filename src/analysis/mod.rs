// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: from raw strings to the stems the index counts.
//!
//! Normalize, split into tokens, strip one suffix per token. Documents and
//! queries go through exactly the same chain, which is the whole trick: as
//! long as both sides are mangled identically, matching works.

mod stemmer;
mod tokenizer;

pub use stemmer::*;
pub use tokenizer::*;

/// Tokenize and stem in one pass. The chain documents and queries share.
pub fn analyze(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|token| stem(token)).collect()
}
