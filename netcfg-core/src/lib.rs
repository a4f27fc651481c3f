//! netcfg core parsers
//!
//! Single-pass parsers for darknet-style config files: block-structured
//! architecture files (`yolov3.cfg`) and flat dataset files (`coco.data`).
//!
//! # Architecture
//!
//! - **architecture.rs** - `[block]` parser producing an ArchitectureDocument
//! - **flat.rs** - flat `key=value` parser producing a FlatConfig
//! - **document.rs** - ModuleDefinition / ArchitectureDocument records
//! - **block.rs** - Block kinds and the per-kind default table
//! - **value.rs** - Attribute values (text, injected integers, anchor pairs)
//! - **source.rs** - LineParser trait: feeding strings, readers, files
//! - **error.rs** - Grammar and I/O error types
//!
//! # Example
//!
//! ```
//! use netcfg_core::parse_architecture;
//!
//! let doc = parse_architecture("[net]\nbatch=16\n[convolutional]\nfilters=32\n").unwrap();
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.modules()[1].integer("batch_normalize"), Some(0));
//! ```

pub mod architecture;
pub mod block;
pub mod document;
pub mod error;
pub mod flat;
mod line;
pub mod source;
pub mod value;

pub use architecture::{load_architecture, parse_architecture, parse_architecture_reader, ArchitectureParser};
pub use block::BlockKind;
pub use document::{ArchitectureDocument, Attribute, ModuleDefinition};
pub use error::{AnchorsError, AttributeError, Error, ParseError, Result};
pub use flat::{load_flat_config, parse_flat_config, parse_flat_config_reader, FlatConfig, FlatConfigParser};
pub use source::LineParser;
pub use value::Value;
