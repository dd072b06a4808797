// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion and building.
//!
//! Two directions. Reading: a JSON array of documents, either from
//! `search/index.json` or inlined into the blog page ([`load_corpus`]).
//! Writing: strip rendered post pages down to text and emit that same array,
//! optionally substituted into the blog page template ([`run_build`]).

mod corpus;
pub mod document;
pub mod html;
pub mod parallel;

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Error, Result};
use crate::types::Document;

pub use corpus::*;
pub use parallel::{document_from_html, list_posts, load_post, load_posts};

/// Placeholder in the blog page template that receives the inline corpus.
pub const SEARCH_JSON_PLACEHOLDER: &str = "{{SEARCH_JSON}}";

/// What [`run_build`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub documents: usize,
    pub index_path: PathBuf,
    pub page_path: Option<PathBuf>,
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Read every post under `input_dir`, newest first.
pub fn build_corpus(input_dir: &Path) -> Result<Vec<Document>> {
    let paths = list_posts(input_dir)?;

    #[cfg(feature = "parallel")]
    let docs = {
        let progress = ProgressBar::new(paths.len() as u64);
        progress.set_style(create_progress_style());
        progress.set_prefix("Loading");
        progress.set_message("posts...");
        let docs = parallel::load_posts_with_progress(&paths, &progress);
        progress.finish_with_message(format!("loaded {} posts", docs.len()));
        docs
    };

    #[cfg(not(feature = "parallel"))]
    let docs = load_posts(&paths);

    info!("built {} documents from {}", docs.len(), input_dir.display());
    Ok(docs)
}

/// Serialize documents as the JSON index array.
pub fn corpus_to_json(docs: &[Document]) -> Result<String> {
    serde_json::to_string(docs).map_err(|e| Error::json("corpus", e))
}

/// Write the JSON index, creating parent directories as needed.
pub fn write_index(docs: &[Document], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(output, corpus_to_json(docs)?).map_err(|e| Error::io(output, e))
}

/// Substitute the corpus into a page template at [`SEARCH_JSON_PLACEHOLDER`].
///
/// `</` is written as `<\/` so a post containing `</script>` can't end the
/// payload element early. Both spell the same JSON string.
pub fn render_template(template: &str, docs: &[Document]) -> Result<String> {
    if !template.contains(SEARCH_JSON_PLACEHOLDER) {
        return Err(Error::MissingPlaceholder(SEARCH_JSON_PLACEHOLDER));
    }
    let payload = corpus_to_json(docs)?.replace("</", "<\\/");
    Ok(template.replace(SEARCH_JSON_PLACEHOLDER, &payload))
}

/// Build the index from posts and optionally render the blog page.
///
/// `page` is `(template, output)`.
pub fn run_build(input_dir: &Path, output: &Path, page: Option<(&Path, &Path)>) -> Result<BuildReport> {
    let docs = build_corpus(input_dir)?;
    write_index(&docs, output)?;
    info!("wrote {}", output.display());

    let page_path = match page {
        Some((template_path, page_path)) => {
            let template =
                fs::read_to_string(template_path).map_err(|e| Error::io(template_path, e))?;
            let rendered = render_template(&template, &docs)?;
            fs::write(page_path, rendered).map_err(|e| Error::io(page_path, e))?;
            info!("wrote {}", page_path.display());
            Some(page_path.to_path_buf())
        }
        None => None,
    };

    Ok(BuildReport {
        documents: docs.len(),
        index_path: output.to_path_buf(),
        page_path,
    })
}
