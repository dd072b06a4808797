// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lenient field parsing for corpus records.
//!
//! Corpus JSON is written by site scripts and occasionally edited by hand, so
//! fields show up as `null`, numbers where strings belong, or timestamps as
//! strings. None of that should drop a post from search. These deserializers
//! accept whatever JSON value is there and fall back to the empty default.

use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::Document;

/// Strings as-is, numbers and booleans stringified, anything else empty.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Non-empty strings only.
pub fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Integers, floats (truncated) and numeric strings; anything else absent.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(timestamp_from_value(&Value::deserialize(deserializer)?))
}

fn timestamp_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

/// Turn raw JSON records into documents, skipping records that aren't objects.
///
/// Object records always parse: every field is lenient.
pub fn parse_records(records: Vec<Value>) -> Vec<Document> {
    let total = records.len();
    let docs: Vec<Document> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            if !record.is_object() {
                warn!("skipping corpus record {}: not an object", position);
                return None;
            }
            match Document::deserialize(record) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    warn!("skipping corpus record {}: {}", position, e);
                    None
                }
            }
        })
        .collect();

    if docs.len() < total {
        warn!("{} of {} corpus records skipped", total - docs.len(), total);
    }
    docs
}
