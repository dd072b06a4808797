// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the arama CLI.
//!
//! Colors follow OneDark on dark terminals and One Light on light ones.
//! `ARAMA_THEME` ("dark" or "light") wins; otherwise the background is
//! guessed from `COLORFGBG`, and dark is assumed when neither says anything.
//!
//! Snippets arrive with `<mark>` tags for the browser. On a terminal those
//! become bold yellow; in a pipe, or with `NO_COLOR`, the tags are dropped.

use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use arama::SearchConfig;

/// Visible width between the box borders.
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

type Rgb = (u8, u8, u8);

struct Palette {
    green: Rgb,
    yellow: Rgb,
    blue: Rgb,
    cyan: Rgb,
    gray: Rgb,
}

const ONE_DARK: Palette = Palette {
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
};

const ONE_LIGHT: Palette = Palette {
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
};

static THEME: OnceLock<Theme> = OnceLock::new();

/// The terminal theme, detected once per process.
pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        let explicit = std::env::var("ARAMA_THEME").ok().and_then(|v| parse_theme(&v));
        explicit
            .or_else(|| std::env::var("COLORFGBG").ok().and_then(|v| theme_from_colorfgbg(&v)))
            .unwrap_or(Theme::Dark)
    })
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;x;bg"). Background 7 and up is
/// light, except 8, which is dark gray.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
}

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &ONE_DARK,
        Theme::Light => &ONE_LIGHT,
    }
}

fn truecolor((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

#[allow(non_snake_case)]
pub fn GREEN() -> String {
    truecolor(palette().green)
}

#[allow(non_snake_case)]
pub fn YELLOW() -> String {
    truecolor(palette().yellow)
}

#[allow(non_snake_case)]
pub fn BLUE() -> String {
    truecolor(palette().blue)
}

#[allow(non_snake_case)]
pub fn CYAN() -> String {
    truecolor(palette().cyan)
}

#[allow(non_snake_case)]
pub fn GRAY() -> String {
    truecolor(palette().gray)
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a theme color plus modifiers, or return it unchanged.
pub fn themed(color: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let mut out = modifiers.concat();
    out.push_str(&color());
    out.push_str(text);
    out.push_str(RESET);
    out
}

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ANSI pattern"));

/// Width in chars once color escapes are removed.
pub fn visible_len(s: &str) -> usize {
    ANSI_ESCAPE.replace_all(s, "").chars().count()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(padding))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// One horizontal rule of a box, optionally carrying a label.
fn rule(left: char, label: Option<&str>, right: char) -> String {
    let label = label
        .map(|text| format!("─ {} ", themed(CYAN, &[BOLD], text)))
        .unwrap_or_default();
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    format!(
        "{}{}{}",
        themed(GRAY, &[], &left.to_string()),
        label,
        themed(GRAY, &[], &format!("{}{}", fill, right))
    )
}

/// `┌─ LABEL ───┐`
pub fn header(label: &str) {
    println!("{}", rule('┌', Some(label), '┐'));
}

/// `├─ LABEL ───┤`
pub fn divider(label: &str) {
    println!("{}", rule('├', Some(label), '┤'));
}

/// `└───────────┘`
pub fn footer() {
    println!("{}", rule('└', None, '┘'));
}

/// `│ content   │`
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Turn highlight markers into terminal styling, or strip them.
pub fn render_snippet(snippet: &str, config: &SearchConfig) -> String {
    render_marks(snippet, &config.highlight_open, &config.highlight_close, use_colors())
}

fn render_marks(snippet: &str, open: &str, close: &str, colors: bool) -> String {
    if open.is_empty() || close.is_empty() {
        return snippet.to_string();
    }
    let (on, off) = if colors {
        (format!("{}{}", BOLD, YELLOW()), RESET.to_string())
    } else {
        (String::new(), String::new())
    };
    snippet.replace(open, &on).replace(close, &off)
}

/// Score column. Title-prefix hits are bold green, title-substring hits
/// green, term hits yellow, recency-only matches gray.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.1}", score);
    match score {
        s if s >= 1000.0 => themed(GREEN, &[BOLD], &text),
        s if s >= 500.0 => themed(GREEN, &[], &text),
        s if s >= 20.0 => themed(YELLOW, &[], &text),
        _ => themed(GRAY, &[], &text),
    }
}

/// Hint line for the states where there is nothing to list.
pub fn hint(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}
