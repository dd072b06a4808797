// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every number the scorer and snippet extractor use lives here, defaulting to
//! the constants in [`crate::scoring`]. Config files and the browser options
//! object are partial: anything left out keeps its default.
//!
//! ```json
//! { "titleWeight": 8, "snippetAfter": 200 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scoring::{
    BODY_WEIGHT, MIN_BOOST_QUERY_CHARS, RECENCY_CEILING, TITLE_CONTAINS_BOOST, TITLE_PREFIX_BOOST,
    TITLE_WEIGHT,
};

/// Queries shorter than this (after trimming) are not searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// Characters of context kept before the first hit.
pub const SNIPPET_BEFORE: usize = 60;

/// Characters kept from the first hit onward.
pub const SNIPPET_AFTER: usize = 120;

/// Characters shown when no query term occurs in the body.
pub const SNIPPET_FALLBACK: usize = 160;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub min_query_chars: usize,
    pub title_weight: f64,
    pub body_weight: f64,
    pub title_prefix_boost: f64,
    pub title_contains_boost: f64,
    /// The title boost only applies to normalized queries at least this long.
    pub min_boost_query_chars: usize,
    /// Recency boost for a post published right now; decays with ln(1 + days).
    pub recency_ceiling: f64,
    pub snippet_before: usize,
    pub snippet_after: usize,
    pub snippet_fallback: usize,
    pub highlight_open: String,
    pub highlight_close: String,
    pub ellipsis: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            title_weight: TITLE_WEIGHT,
            body_weight: BODY_WEIGHT,
            title_prefix_boost: TITLE_PREFIX_BOOST,
            title_contains_boost: TITLE_CONTAINS_BOOST,
            min_boost_query_chars: MIN_BOOST_QUERY_CHARS,
            recency_ceiling: RECENCY_CEILING,
            snippet_before: SNIPPET_BEFORE,
            snippet_after: SNIPPET_AFTER,
            snippet_fallback: SNIPPET_FALLBACK,
            highlight_open: "<mark>".to_string(),
            highlight_close: "</mark>".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::json("search config", e))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| Error::json(path.display().to_string(), e))
    }
}
