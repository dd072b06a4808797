//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;
use crate::util::time::SECONDS_PER_DAY;

/// Fixed "now" for tests: 2025-06-15T15:06:40Z.
pub const TEST_NOW: f64 = 1_750_000_000.0;

/// Create a simple test document. The slug is derived from the position.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, title: &str, content: &str) -> Document {
    Document::new(format!("post-{}", id), title, content)
}

/// Create a test document published `days_ago` days before [`TEST_NOW`].
pub fn make_dated_doc(id: usize, title: &str, content: &str, days_ago: f64) -> Document {
    let ts = (TEST_NOW - days_ago * SECONDS_PER_DAY) as i64;
    make_doc(id, title, content).with_ts(ts)
}

/// The small Turkish corpus most scenario tests run against.
pub fn sample_corpus() -> Vec<Document> {
    vec![
        make_doc(
            0,
            "Kahve Tarifleri",
            "Türk kahvesi, bol köpüklü ve orta şekerli olarak cezvede pişirilir. \
             Kahve çekirdekleri taze öğütülmelidir.",
        ),
        make_doc(
            1,
            "Çay",
            "Rize çayı demliklerde demlenir. Çay bardakları ince belli olur.",
        ),
        make_doc(
            2,
            "Cay Nasil Demlenir",
            "Suyu kaynatın, demliğe iki kaşık çay koyun ve on beş dakika bekleyin.",
        ),
        make_doc(
            3,
            "Sabah Rutinleri",
            "Güne bir fincan kahve ile başlamak, kahvaltıyı atlamamak ve yürüyüş yapmak.",
        ),
    ]
}

/// `count` synthetic posts for benchmarks and fuzzing.
///
/// Deterministic: the same `count` always yields the same corpus.
pub fn synthetic_corpus(count: usize) -> Vec<Document> {
    const TOPICS: &[&str] = &[
        "kahve", "çay", "kitap", "yazılım", "müzik", "seyahat", "bahçe", "yemek",
        "öğrenme", "şehir", "ışık", "güneş",
    ];
    const FILLER: &[&str] = &[
        "bugün", "üzerine", "notlar", "deneyimler", "tarifleri", "yolculuğu",
        "günlükleri", "hakkında", "düşünceler", "ve", "ile", "için",
    ];

    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let other = TOPICS[(i * 7 + 3) % TOPICS.len()];
            let title = format!("{} {}", topic, FILLER[i % FILLER.len()]);
            let content = (0..60)
                .map(|j| match j % 5 {
                    0 => topic,
                    3 => other,
                    _ => FILLER[(i + j) % FILLER.len()],
                })
                .collect::<Vec<_>>()
                .join(" ");
            make_dated_doc(i, &title, &content, (i % 400) as f64)
        })
        .collect()
}
