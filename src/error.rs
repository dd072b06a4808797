// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the I/O edges: loading corpora, building them, reading config.
//!
//! The engine itself (normalize through search) has no error type. It is a
//! pure computation over in-memory data and always produces an answer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("corpus must be a JSON array of documents, found {found}")]
    NotAnArray { found: &'static str },

    #[error("page has no inline search payload (<script id=\"{0}\">)")]
    MissingInlinePayload(&'static str),

    #[error("template has no {0} placeholder")]
    MissingPlaceholder(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            context: context.into(),
            source,
        }
    }
}
