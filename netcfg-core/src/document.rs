//! Parsed architecture records.
//!
//! An [`ArchitectureDocument`] is the ordered list of [`ModuleDefinition`]s,
//! one per `[header]` block. Order is layer order; nothing is merged.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::block::BlockKind;
use crate::value::Value;

/// Attribute name holding the block kind.
pub const TYPE_KEY: &str = "type";

/// One `key = value` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

/// Attributes of one block, in first-seen key order.
///
/// The first attribute is always `type`, taken from the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDefinition {
    attrs: Vec<Attribute>,
}

impl ModuleDefinition {
    pub(crate) fn new(kind: &str) -> Self {
        ModuleDefinition {
            attrs: vec![Attribute {
                name: TYPE_KEY.to_string(),
                value: Value::Text(kind.to_string()),
            }],
        }
    }

    /// Set `name`, overwriting in place if already present.
    pub(crate) fn set(&mut self, name: &str, value: Value) {
        debug_assert_ne!(name, TYPE_KEY);
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// The block name from the header, e.g. `convolutional`.
    pub fn kind(&self) -> &str {
        match &self.attrs[0].value {
            Value::Text(kind) => kind,
            _ => unreachable!("type attribute is always text"),
        }
    }

    /// The block name as a [`BlockKind`].
    pub fn block_kind(&self) -> BlockKind {
        BlockKind::from_name(self.kind())
    }

    /// Get an attribute value by name. `type` is included.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.iter().find(|a| a.name == name).map(|a| &a.value)
    }

    /// Get a text attribute.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Get an attribute as an integer, parsing text values.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    /// Get an attribute as a float, parsing text values.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// Get anchor pairs stored under `name`.
    pub fn anchors(&self, name: &str) -> Option<&[[f64; 2]]> {
        self.get(name).and_then(Value::as_anchors)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all attributes, `type` first.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|a| (a.name.as_str(), &a.value))
    }

    /// Number of attributes, counting `type`.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Always false: `type` is always present.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Serialize for ModuleDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attrs.len()))?;
        for attr in &self.attrs {
            map.serialize_entry(&attr.name, &attr.value)?;
        }
        map.end()
    }
}

/// Ordered module definitions of an architecture file.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ArchitectureDocument {
    modules: Vec<ModuleDefinition>,
}

impl ArchitectureDocument {
    pub(crate) fn push(&mut self, module: ModuleDefinition) {
        self.modules.push(module);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ModuleDefinition> {
        self.modules.last_mut()
    }

    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn into_modules(self) -> Vec<ModuleDefinition> {
        self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ModuleDefinition> {
        self.modules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleDefinition> {
        self.modules.iter()
    }

    /// The leading `[net]` block holding global hyperparameters, if any.
    pub fn hyperparameters(&self) -> Option<&ModuleDefinition> {
        self.modules
            .first()
            .filter(|m| m.block_kind() == BlockKind::Net)
    }

    /// Layer blocks: everything after a leading `[net]` block.
    ///
    /// Without a leading `[net]`, all modules are layers.
    pub fn layers(&self) -> &[ModuleDefinition] {
        match self.hyperparameters() {
            Some(_) => &self.modules[1..],
            None => &self.modules,
        }
    }
}

impl<'a> IntoIterator for &'a ArchitectureDocument {
    type Item = &'a ModuleDefinition;
    type IntoIter = std::slice::Iter<'a, ModuleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

impl IntoIterator for ArchitectureDocument {
    type Item = ModuleDefinition;
    type IntoIter = std::vec::IntoIter<ModuleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.into_iter()
    }
}
