//! Test infrastructure for netcfg parsers
//!
//! Provides fixture loading and seeded generators for random documents.

#![allow(dead_code)]

mod generators;
mod loader;

pub use generators::{Gen, GeneratedBlock, GeneratedDoc};
pub use loader::{fixture_path, load_fixture};
