//! Feeding text sources into the line parsers.
//!
//! Both parsers consume one raw line at a time and produce their record on
//! [`LineParser::finish`]. The provided methods drive a parser from a
//! string, a reader, or a file.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, ParseError, Result};

/// A single-pass parser fed one raw source line at a time.
pub trait LineParser: Sized {
    type Output;

    /// Feed the next raw line, without its trailing `\n`.
    ///
    /// The first error aborts the parse; the parser should be dropped.
    fn feed_line(&mut self, line: &str) -> std::result::Result<(), ParseError>;

    /// Finish the parse and take the accumulated record.
    fn finish(self) -> Self::Output;

    /// Parse a complete text.
    fn parse_str(mut self, text: &str) -> std::result::Result<Self::Output, ParseError> {
        for line in text.split('\n') {
            self.feed_line(line)?;
        }
        Ok(self.finish())
    }

    /// Parse everything from `reader`.
    fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<Self::Output> {
        for line in reader.lines() {
            self.feed_line(&line?)?;
        }
        Ok(self.finish())
    }

    /// Read the file at `path` fully, then parse it.
    fn load(self, path: impl AsRef<Path>) -> Result<Self::Output> {
        let path = path.as_ref();
        let text = read_source(path)?;
        self.parse_str(&text)
            .map_err(|e| Error::from(e).with_path(path))
    }
}

fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::from(e).with_path(path))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read config source");
    Ok(text)
}
