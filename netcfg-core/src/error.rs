//! Error types.
//!
//! Grammar failures ([`ParseError`]) and source failures ([`Error::Io`]) are
//! kept apart so callers can tell a bad file from a missing one.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A grammar error, reported at the first offending line.
///
/// Line numbers are 1-based and count every raw line of the source,
/// including blank and comment lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// `[` without a matching `]`, stray brackets inside, or an empty name.
    #[error("line {line}: malformed block header `{text}`")]
    MalformedHeader { line: usize, text: String },

    /// An attribute line must contain exactly one `=` and a usable key.
    #[error("line {line}: malformed attribute `{text}` ({reason})")]
    MalformedAttribute {
        line: usize,
        text: String,
        reason: AttributeError,
    },

    /// Attribute line seen before any `[header]`.
    #[error("line {line}: attribute `{key}` appears before any block header")]
    OrphanAttribute { line: usize, key: String },

    /// Anchors value that is not an even-length list of numbers.
    #[error("line {line}: malformed anchors in `{key}`: {reason}")]
    MalformedAnchors {
        line: usize,
        key: String,
        reason: AnchorsError,
    },
}

impl ParseError {
    /// The 1-based source line the error was reported at.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedHeader { line, .. }
            | Self::MalformedAttribute { line, .. }
            | Self::OrphanAttribute { line, .. }
            | Self::MalformedAnchors { line, .. } => *line,
        }
    }
}

/// Why an attribute line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("expected exactly one `=`, found {0}")]
    SeparatorCount(usize),
    #[error("empty key")]
    EmptyKey,
    #[error("`type` is set by the block header")]
    ReservedKey,
}

/// Why an anchors value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorsError {
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("expected an even number of values, found {0}")]
    OddCount(usize),
}

/// Top-level error for loading configs from a source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}read failed: {source}", path_prefix(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("{}{source}", path_prefix(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// The grammar error, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }

    /// The source path, when the error came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path.as_deref(),
        }
    }

    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = Some(path.into());
        match self {
            Self::Io { source, .. } => Self::Io { path, source },
            Self::Parse { source, .. } => Self::Parse { path, source },
        }
    }
}

fn path_prefix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!("{}: ", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl From<ParseError> for Error {
    fn from(source: ParseError) -> Self {
        Self::Parse { path: None, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
