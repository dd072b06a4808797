// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus that a site build already produced.
//!
//! Two sources, same JSON array: `search/index.json`, and a copy inlined into
//! the blog index page inside `<script id="vm-search-data">` so search works
//! from `file://` where fetching isn't allowed. [`load_corpus`] prefers the
//! inline copy and falls back to the file, which is the order the widget uses.

use log::{info, warn};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::document::parse_records;
use crate::error::{Error, Result};
use crate::types::Document;

/// `id` of the `<script>` element holding the inline corpus.
pub const INLINE_PAYLOAD_ID: &str = "vm-search-data";

static INLINE_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?is)<script\b[^>]*\bid\s*=\s*["']{}["'][^>]*>(.*?)</script\s*>"#,
        INLINE_PAYLOAD_ID
    ))
    .expect("valid regex")
});

/// Parse a JSON array of document records.
///
/// The top level must be an array. Records inside it are parsed leniently;
/// see [`parse_records`].
pub fn load_corpus_json(json: &str) -> Result<Vec<Document>> {
    let value: Value = serde_json::from_str(json).map_err(|e| Error::json("corpus", e))?;
    match value {
        Value::Array(records) => Ok(parse_records(records)),
        other => Err(Error::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Read and parse a corpus index file.
pub fn load_corpus_file(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let docs = load_corpus_json(&raw).map_err(|e| match e {
        Error::Json { source, .. } => Error::json(path.display().to_string(), source),
        other => other,
    })?;
    info!("loaded {} documents from {}", docs.len(), path.display());
    Ok(docs)
}

/// The inline payload inside a page, trimmed. Missing or blank is an error.
pub fn extract_inline_payload(html: &str) -> Result<&str> {
    INLINE_PAYLOAD
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|payload| !payload.is_empty())
        .ok_or(Error::MissingInlinePayload(INLINE_PAYLOAD_ID))
}

/// Parse the corpus inlined in a page.
pub fn load_corpus_inline(html: &str) -> Result<Vec<Document>> {
    load_corpus_json(extract_inline_payload(html)?)
}

/// Inline payload from `page` if it has one, else the index file at `fallback`.
pub fn load_corpus(page: Option<&Path>, fallback: &Path) -> Result<Vec<Document>> {
    if let Some(page) = page {
        let inline = fs::read_to_string(page)
            .map_err(|e| Error::io(page, e))
            .and_then(|html| load_corpus_inline(&html));
        match inline {
            Ok(docs) => {
                info!("loaded {} documents inline from {}", docs.len(), page.display());
                return Ok(docs);
            }
            Err(e) => warn!("inline corpus unavailable ({}), falling back to {}", e, fallback.display()),
        }
    }
    load_corpus_file(fallback)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
