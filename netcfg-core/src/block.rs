//! Block kinds and per-kind attribute defaults.

use phf::phf_map;

/// Kind of a `[header]` block.
///
/// The parser accepts any name; the known ones get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Global hyperparameters, conventionally the first block.
    Net,
    Convolutional,
    Route,
    Shortcut,
    Upsample,
    Yolo,
    /// Any other block name, kept verbatim.
    Other(String),
}

static KNOWN_KINDS: phf::Map<&'static str, BlockKind> = phf_map! {
    "net" => BlockKind::Net,
    "convolutional" => BlockKind::Convolutional,
    "route" => BlockKind::Route,
    "shortcut" => BlockKind::Shortcut,
    "upsample" => BlockKind::Upsample,
    "yolo" => BlockKind::Yolo,
};

/// Attributes injected when a block of the given kind is opened.
///
/// Explicit attribute lines in the block overwrite these.
static BLOCK_DEFAULTS: phf::Map<&'static str, &'static [(&'static str, i64)]> = phf_map! {
    "convolutional" => &[("batch_normalize", 0)],
};

impl BlockKind {
    /// Look up a block name. Unknown names become [`BlockKind::Other`].
    pub fn from_name(name: &str) -> BlockKind {
        KNOWN_KINDS
            .get(name)
            .cloned()
            .unwrap_or_else(|| BlockKind::Other(name.to_string()))
    }

    /// The name as written in a header.
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Net => "net",
            BlockKind::Convolutional => "convolutional",
            BlockKind::Route => "route",
            BlockKind::Shortcut => "shortcut",
            BlockKind::Upsample => "upsample",
            BlockKind::Yolo => "yolo",
            BlockKind::Other(name) => name,
        }
    }

    /// Whether this is one of the built-in kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Other(_))
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defaults for a block named `name`; empty for kinds without any.
pub fn defaults_for(name: &str) -> &'static [(&'static str, i64)] {
    BLOCK_DEFAULTS.get(name).copied().unwrap_or(&[])
}
