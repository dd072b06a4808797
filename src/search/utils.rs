// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the ranker and the pipeline.

use crate::analysis::{stem, tokenize};
use crate::types::Query;
use crate::util::normalize::normalize;

/// Parse a query string into normalized tokens and their stems.
///
/// The caller trims; this keeps inner whitespace as typed so the title boost
/// sees "kahve tarifleri", not "kahve" and "tarifleri" separately.
///
/// # Example
///
/// ```
/// use arama::parse_query;
///
/// let query = parse_query("Kahve Tarifleri");
/// assert_eq!(query.tokens, vec!["kahve", "tarifleri"]);
/// assert_eq!(query.terms, vec!["kahv", "tarif"]);
/// ```
pub fn parse_query(raw: &str) -> Query {
    let tokens = tokenize(raw);
    let terms = tokens.iter().map(|token| stem(token)).collect();
    Query {
        raw: raw.to_string(),
        normalized: normalize(raw),
        tokens,
        terms,
    }
}
