//! Tests for corpus loading from files and pages.

use arama::{load_corpus, load_corpus_file, load_corpus_inline, Error};
use std::fs;
use tempfile::TempDir;

const INDEX_JSON: &str = r#"[
  {"title": "Kahve Tarifleri", "slug": "kahve-tarifleri", "date": "05 Mar 2025",
   "cover": "assets/img/kahve.jpg", "ts": 1741132800, "content": "Türk kahvesi"},
  {"title": "Çay", "slug": "cay", "date": "", "content": "Rize çayı"}
]"#;

fn page_with(payload: &str) -> String {
    format!(
        r#"<html><body><input id="vm-search-input">
<script type="application/json" id="vm-search-data">{}</script>
</body></html>"#,
        payload
    )
}

#[test]
fn test_load_index_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, INDEX_JSON).unwrap();

    let docs = load_corpus_file(&path).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].ts, Some(1_741_132_800));
    assert_eq!(docs[1].cover, None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_corpus_file(&dir.path().join("yok.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_json_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    fs::write(&path, "[{").unwrap();
    let err = load_corpus_file(&path).unwrap_err();
    assert!(err.to_string().contains("index.json"), "{}", err);
}

#[test]
fn test_load_inline_payload() {
    let docs = load_corpus_inline(&page_with(INDEX_JSON)).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].slug, "cay");
}

#[test]
fn test_inline_preferred_over_file() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("index.html");
    let fallback = dir.path().join("index.json");
    fs::write(&page, page_with(r#"[{"slug": "inline"}]"#)).unwrap();
    fs::write(&fallback, r#"[{"slug": "file"}]"#).unwrap();

    let docs = load_corpus(Some(&page), &fallback).unwrap();
    assert_eq!(docs[0].slug, "inline");
}

#[test]
fn test_falls_back_when_payload_missing() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("index.html");
    let fallback = dir.path().join("index.json");
    fs::write(&page, "<html><body>{{SEARCH_JSON}}</body></html>").unwrap();
    fs::write(&fallback, r#"[{"slug": "file"}]"#).unwrap();

    let docs = load_corpus(Some(&page), &fallback).unwrap();
    assert_eq!(docs[0].slug, "file");
}

#[test]
fn test_falls_back_when_payload_broken() {
    let dir = TempDir::new().unwrap();
    let page = dir.path().join("index.html");
    let fallback = dir.path().join("index.json");
    fs::write(&page, page_with("{not json")).unwrap();
    fs::write(&fallback, r#"[{"slug": "file"}]"#).unwrap();

    let docs = load_corpus(Some(&page), &fallback).unwrap();
    assert_eq!(docs[0].slug, "file");
}

#[test]
fn test_both_sources_failing_reports_fallback() {
    let dir = TempDir::new().unwrap();
    let err = load_corpus(Some(&dir.path().join("yok.html")), &dir.path().join("yok.json"))
        .unwrap_err();
    assert!(err.to_string().contains("yok.json"), "{}", err);
}
