//! Attribute value types with key-driven typing.
//!
//! The key decides the type, never the value's shape: keys containing
//! `anchors` hold pairs of floats, everything else holds text. Integers only
//! appear as injected per-type defaults.

use serde::Serialize;

use crate::error::AnchorsError;

/// Key substring that selects the anchor-pair encoding.
pub const ANCHORS_KEY: &str = "anchors";

/// Attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Text as written, surrounding whitespace removed.
    Text(String),

    /// Integer default injected at block creation, e.g. `batch_normalize`.
    Integer(i64),

    /// Anchor pairs: `10,13, 16,30` → `[[10, 13], [16, 30]]`
    Anchors(Vec<[f64; 2]>),
}

impl Value {
    /// Build the value for `key` from the raw text after `=`.
    pub fn for_key(key: &str, raw: &str) -> Result<Value, AnchorsError> {
        if is_anchors_key(key) {
            parse_anchors(raw).map(Value::Anchors)
        } else {
            Ok(Value::Text(raw.trim().to_string()))
        }
    }

    /// Try to get as text.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as integer. Text is parsed, so `"1"` and an injected `1`
    /// read the same.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Text(s) => s.parse().ok(),
            Value::Anchors(_) => None,
        }
    }

    /// Try to get as float. Text is parsed.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Text(s) => s.parse().ok(),
            Value::Anchors(_) => None,
        }
    }

    /// Try to get as anchor pairs.
    #[inline]
    pub fn as_anchors(&self) -> Option<&[[f64; 2]]> {
        match self {
            Value::Anchors(pairs) => Some(pairs),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

/// Whether `key` selects the anchor-pair encoding.
#[inline]
pub fn is_anchors_key(key: &str) -> bool {
    key.contains(ANCHORS_KEY)
}

/// Parse a comma-separated list of floats into row-major pairs.
///
/// Whitespace around each number is ignored. Empty items (`1,,2`, a trailing
/// comma, or an empty value) are rejected.
pub fn parse_anchors(raw: &str) -> Result<Vec<[f64; 2]>, AnchorsError> {
    let numbers = raw
        .split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>()
                .map_err(|_| AnchorsError::InvalidNumber(item.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if numbers.len() % 2 != 0 {
        return Err(AnchorsError::OddCount(numbers.len()));
    }

    Ok(numbers.chunks_exact(2).map(|p| [p[0], p[1]]).collect())
}
