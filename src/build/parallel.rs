// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel post loading.
//!
//! Reading and stripping a few hundred HTML pages is embarrassingly parallel,
//! so with the `parallel` feature it's a `par_iter()` over paths. Posts that
//! can't be read are skipped with a warning; one broken file shouldn't take the
//! whole search index down with it.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::html::{extract_cover, extract_title, strip_html};
use crate::error::{Error, Result};
use crate::types::Document;
use crate::util::time::format_date;

/// `*.html` files directly under `input_dir`, sorted by path.
///
/// The blog's own `index.html` is a listing page, not a post.
pub fn list_posts(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir).map_err(|e| Error::io(input_dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(input_dir, e))?.path();
        let is_html = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        let is_listing = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case("index.html"));
        if path.is_file() && is_html && !is_listing {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Build a document from a rendered post page.
///
/// Title falls back to the slug when the page has no `<title>`.
pub fn document_from_html(slug: &str, html: &str, ts: Option<i64>) -> Document {
    let title = extract_title(html).unwrap_or_else(|| slug.to_string());
    let mut doc = Document::new(slug, title, strip_html(html));
    doc.cover = extract_cover(html);
    if let Some(ts) = ts {
        doc = doc.with_ts(ts).with_date(format_date(ts));
    }
    doc
}

/// Read one post. Slug is the file stem, timestamp the modification time.
pub fn load_post(path: &Path) -> Result<Document> {
    let html = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    Ok(document_from_html(slug, &html, modified_secs(path)))
}

fn modified_secs(path: &Path) -> Option<i64> {
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok()?;
    let secs = modified.duration_since(UNIX_EPOCH).ok()?.as_secs();
    i64::try_from(secs).ok()
}

fn keep_loaded(path: &Path, loaded: Result<Document>) -> Option<Document> {
    match loaded {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("skipping post {}: {}", path.display(), e);
            None
        }
    }
}

/// Load all posts, newest first. Ties keep path order.
pub fn load_posts(paths: &[PathBuf]) -> Vec<Document> {
    #[cfg(feature = "parallel")]
    let docs: Vec<Document> = paths
        .par_iter()
        .filter_map(|path| keep_loaded(path, load_post(path)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let docs: Vec<Document> = paths
        .iter()
        .filter_map(|path| keep_loaded(path, load_post(path)))
        .collect();

    newest_first(docs)
}

/// Load all posts, newest first, ticking `progress` per file.
#[cfg(feature = "parallel")]
pub fn load_posts_with_progress(paths: &[PathBuf], progress: &ProgressBar) -> Vec<Document> {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    let docs: Vec<Document> = paths
        .par_iter()
        .filter_map(|path| {
            let doc = keep_loaded(path, load_post(path));

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(10) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            doc
        })
        .collect();

    newest_first(docs)
}

/// Stable sort by timestamp descending; undated posts go last.
pub(crate) fn newest_first(mut docs: Vec<Document>) -> Vec<Document> {
    docs.sort_by(|a, b| b.ts.unwrap_or(0).cmp(&a.ts.unwrap_or(0)));
    docs
}
