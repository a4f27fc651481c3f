//! Architecture file parser.
//!
//! Turns a block-structured file into an [`ArchitectureDocument`]:
//!
//! ```text
//! [net]
//! batch=16
//!
//! [convolutional]
//! filters=32
//! ```
//!
//! A block runs from its `[header]` to the next header or end of input.
//! Lines whose very first character is `#` are comments; blank lines are
//! ignored; everything else is trimmed and read as either a header or a
//! `key = value` attribute of the current block.

use std::io::BufRead;
use std::path::Path;

use crate::block::defaults_for;
use crate::document::{ArchitectureDocument, ModuleDefinition, TYPE_KEY};
use crate::error::{AttributeError, ParseError, Result};
use crate::line::split_attribute;
use crate::source::LineParser;
use crate::value::Value;

/// Incremental architecture parser.
///
/// Feed raw lines in order with [`LineParser::feed_line`], then call
/// [`LineParser::finish`].
#[derive(Debug, Default)]
pub struct ArchitectureParser {
    doc: ArchitectureDocument,
    /// 1-based number of the last line fed.
    line: usize,
}

impl ArchitectureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a block is open, i.e. attribute lines are accepted.
    pub fn in_block(&self) -> bool {
        !self.doc.is_empty()
    }

    fn open_block(&mut self, text: &str) -> std::result::Result<(), ParseError> {
        let kind = header_name(text).ok_or_else(|| ParseError::MalformedHeader {
            line: self.line,
            text: text.to_string(),
        })?;

        let mut module = ModuleDefinition::new(kind);
        for &(key, value) in defaults_for(kind) {
            tracing::trace!(kind, key, value, "injecting block default");
            module.set(key, Value::Integer(value));
        }
        tracing::trace!(line = self.line, kind, "opened block");
        self.doc.push(module);
        Ok(())
    }

    fn add_attribute(&mut self, text: &str) -> std::result::Result<(), ParseError> {
        let line = self.line;
        let malformed = |reason: AttributeError| ParseError::MalformedAttribute {
            line,
            text: text.to_string(),
            reason,
        };

        let (key, raw) = split_attribute(text).map_err(malformed)?;
        if key == TYPE_KEY {
            return Err(malformed(AttributeError::ReservedKey));
        }

        let module = self.doc.last_mut().ok_or_else(|| ParseError::OrphanAttribute {
            line,
            key: key.to_string(),
        })?;

        let value = Value::for_key(key, raw).map_err(|reason| ParseError::MalformedAnchors {
            line,
            key: key.to_string(),
            reason,
        })?;
        module.set(key, value);
        Ok(())
    }
}

impl LineParser for ArchitectureParser {
    type Output = ArchitectureDocument;

    fn feed_line(&mut self, raw: &str) -> std::result::Result<(), ParseError> {
        self.line += 1;

        // Comments only count at the very first raw character.
        if raw.starts_with('#') {
            return Ok(());
        }
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }

        if text.starts_with('[') {
            self.open_block(text)
        } else {
            self.add_attribute(text)
        }
    }

    fn finish(self) -> ArchitectureDocument {
        tracing::debug!(
            lines = self.line,
            modules = self.doc.len(),
            "parsed architecture"
        );
        self.doc
    }
}

/// Extract the block name from a trimmed `[name]` line.
fn header_name(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() || inner.contains(['[', ']']) {
        return None;
    }
    Some(inner)
}

/// Parse architecture text.
pub fn parse_architecture(text: &str) -> std::result::Result<ArchitectureDocument, ParseError> {
    ArchitectureParser::new().parse_str(text)
}

/// Parse architecture text from a reader.
pub fn parse_architecture_reader<R: BufRead>(reader: R) -> Result<ArchitectureDocument> {
    ArchitectureParser::new().parse_reader(reader)
}

/// Read and parse the architecture file at `path`.
pub fn load_architecture(path: impl AsRef<Path>) -> Result<ArchitectureDocument> {
    ArchitectureParser::new().load(path)
}
