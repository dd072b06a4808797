// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! A [`Document`] is one post in the corpus. It comes from a JSON payload that a
//! static site generator wrote, so every field is optional in practice: missing
//! or garbage titles become empty strings, garbage timestamps become `None`.
//! One bad record never takes down the rest of the corpus.
//!
//! The only mutable part of a document is its term-frequency cache, an explicit
//! `Option<TermFrequencies>` that goes from `None` to `Some` exactly once.
//!
//! # Lifetimes
//!
//! | Type           | Lives for                 |
//! |----------------|---------------------------|
//! | `Document`     | The whole session         |
//! | `Query`        | One search call           |
//! | `ScoredMatch`  | One ranking pass          |
//! | `SearchHit`    | One search call           |

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::build::document::{lenient_optional_string, lenient_string, lenient_timestamp};
use crate::index::TermFrequencies;

/// One searchable post.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Document {
    /// Unique identifier; result links point at `<slug>.html`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Plain-text body.
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    /// Display-only date string, passed through untouched.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Unix seconds, used for the recency boost only.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub ts: Option<i64>,
    /// Opaque cover asset reference.
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover: Option<String>,
    #[serde(skip)]
    pub(crate) index: Option<TermFrequencies>,
}

impl Document {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_ts(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

/// A parsed query. Built fresh for every search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Trimmed user input.
    pub raw: String,
    /// `raw` after diacritic folding and lowercasing; drives the title boost.
    pub normalized: String,
    /// Normalized, unstemmed tokens; drive snippet lookup and highlighting.
    pub tokens: Vec<String>,
    /// Stemmed tokens, one per entry in `tokens`; drive term-frequency scoring.
    pub terms: Vec<String>,
}

/// A document that scored above zero in one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// A ranked document plus its highlighted excerpt.
///
/// Serializes as the flat result card the UI renders; the body text is left
/// out since the snippet already carries the relevant part.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub document: &'a Document,
    pub score: f64,
    pub snippet: String,
}

impl Serialize for SearchHit<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut card = serializer.serialize_struct("SearchHit", 6)?;
        card.serialize_field("slug", &self.document.slug)?;
        card.serialize_field("title", &self.document.title)?;
        card.serialize_field("date", &self.document.date)?;
        card.serialize_field("cover", &self.document.cover)?;
        card.serialize_field("score", &self.score)?;
        card.serialize_field("snippet", &self.snippet)?;
        card.end()
    }
}

/// What one search call produced.
///
/// `TooShort` is not the same as `Results(vec![])`: the first means "keep
/// showing the hint", the second means "we looked and found nothing".
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "results", rename_all = "camelCase")]
pub enum SearchOutcome<'a> {
    TooShort,
    #[serde(rename = "ok")]
    Results(Vec<SearchHit<'a>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_too_short(&self) -> bool {
        matches!(self, SearchOutcome::TooShort)
    }

    /// Ranked hits, empty when the query was too short.
    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchOutcome::TooShort => &[],
            SearchOutcome::Results(hits) => hits,
        }
    }

    /// The hint line to show instead of results, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::TooShort => Some(hints::TOO_SHORT),
            SearchOutcome::Results(hits) if hits.is_empty() => Some(hints::NO_RESULTS),
            SearchOutcome::Results(_) => None,
        }
    }
}

/// User-facing status lines, in the site's language.
pub mod hints {
    pub const TOO_SHORT: &str = "Aramak için en az 2 karakter yazın.";
    pub const NO_RESULTS: &str = "Sonuç bulunamadı.";
    pub const READY: &str = "Aramak için yazmaya başlayın…";
    pub const LOAD_FAILED: &str = "Arama dizini yüklenemedi.";
}
