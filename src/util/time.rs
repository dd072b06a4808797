// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wall-clock access for the recency boost.
//!
//! Native builds read the system clock through chrono. The browser build reads
//! `Date.now()`, since wasm32-unknown-unknown has no system clock of its own.

/// Seconds in a day, for converting timestamp deltas to age in days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Current Unix time in (fractional) seconds.
#[cfg(not(all(target_arch = "wasm32", feature = "wasm")))]
pub fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Current Unix time in (fractional) seconds.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Format a Unix timestamp the way post cards show dates ("05 Mar 2025").
pub fn format_date(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_default()
}
