//! Flat `key = value` config parser, used for dataset files:
//!
//! ```text
//! classes=80
//! train=data/train.txt
//! # comment
//! names=data/coco.names
//! ```
//!
//! No blocks and no typed values; every value is text.

use std::collections::btree_map::{self, BTreeMap};
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::line::split_attribute;
use crate::source::LineParser;

/// Flat key/value mapping. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatConfig {
    entries: BTreeMap<String, String>,
}

impl FlatConfig {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get a value parsed into `T`, e.g. `config.parse::<usize>("classes")`.
    ///
    /// `None` when the key is missing or the value does not parse.
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FlatConfig {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Incremental flat config parser.
#[derive(Debug, Default)]
pub struct FlatConfigParser {
    config: FlatConfig,
    line: usize,
}

impl FlatConfigParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineParser for FlatConfigParser {
    type Output = FlatConfig;

    fn feed_line(&mut self, raw: &str) -> std::result::Result<(), ParseError> {
        self.line += 1;

        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(());
        }

        let (key, value) = split_attribute(text).map_err(|reason| ParseError::MalformedAttribute {
            line: self.line,
            text: text.to_string(),
            reason,
        })?;
        if let Some(old) = self.config.insert(key, value.trim()) {
            tracing::trace!(line = self.line, key, old = %old, "overwrote duplicate key");
        }
        Ok(())
    }

    fn finish(self) -> FlatConfig {
        tracing::debug!(lines = self.line, keys = self.config.len(), "parsed flat config");
        self.config
    }
}

/// Parse flat config text.
pub fn parse_flat_config(text: &str) -> std::result::Result<FlatConfig, ParseError> {
    FlatConfigParser::new().parse_str(text)
}

/// Parse flat config text from a reader.
pub fn parse_flat_config_reader<R: BufRead>(reader: R) -> Result<FlatConfig> {
    FlatConfigParser::new().parse_reader(reader)
}

/// Read and parse the flat config file at `path`.
pub fn load_flat_config(path: impl AsRef<Path>) -> Result<FlatConfig> {
    FlatConfigParser::new().load(path)
}
