// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning rendered post pages into searchable plain text.
//!
//! Not an HTML parser. Posts come out of our own templates, so a handful of
//! regexes is enough: drop `<script>`/`<style>` blocks, drop tags, collapse
//! whitespace, decode the entities editors actually produce.

use regex::Regex;
use std::sync::LazyLock;

/// Bodies longer than this are cut; nobody needs match #4000 in one post.
pub const MAX_CONTENT_CHARS: usize = 60_000;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("valid regex"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*\bsrc\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});
static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid regex"));

/// Plain text of a page: no scripts, styles or tags, single-spaced, trimmed,
/// at most [`MAX_CONTENT_CHARS`] characters.
pub fn strip_html(raw: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(raw, " ");
    let text = STYLE_BLOCK.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = unescape_entities(&text);
    text.trim().chars().take(MAX_CONTENT_CHARS).collect()
}

/// Contents of `<title>`, decoded and single-spaced. `None` if missing or blank.
pub fn extract_title(html: &str) -> Option<String> {
    let captured = TITLE.captures(html)?.get(1)?.as_str();
    let title = unescape_entities(&WHITESPACE.replace_all(captured, " "));
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// `src` of the first `<img>` on the page.
pub fn extract_cover(html: &str) -> Option<String> {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode numeric entities and the named ones Turkish posts actually contain.
///
/// Unknown named entities are left as written.
pub fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let text = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures<'_>| {
        let code = &caps[1];
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        parsed
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    const NAMED: &[(&str, &str)] = &[
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&rsquo;", "\u{2019}"),
        ("&lsquo;", "\u{2018}"),
        ("&rdquo;", "\u{201D}"),
        ("&ldquo;", "\u{201C}"),
        ("&hellip;", "\u{2026}"),
        ("&ndash;", "\u{2013}"),
        ("&mdash;", "\u{2014}"),
        ("&ccedil;", "ç"),
        ("&Ccedil;", "Ç"),
        ("&ouml;", "ö"),
        ("&Ouml;", "Ö"),
        ("&uuml;", "ü"),
        ("&Uuml;", "Ü"),
    ];

    let mut out = text.into_owned();
    for (entity, replacement) in NAMED {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    // Last, so "&amp;lt;" decodes to "&lt;" and not "<"
    out.replace("&amp;", "&")
}
