//! Reference mapping - the nested key → value tree docs are checked against
//!
//! Internal nodes are string-keyed mappings, leaves are scalars or null.
//! The root is checked once at construction; everything downstream can
//! rely on it being a mapping.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BabbleonError, Result};

/// Kind of node a reference path resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Mapping,
    /// Explicit null leaf (`key: ~` in YAML)
    #[serde(rename = "null")]
    NullLeaf,
    /// Array leaf. Only reachable from decoded files, never walked through.
    Sequence,
}

impl ValueKind {
    /// Classify a node by its shape
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Object(_) => ValueKind::Mapping,
            Value::Null => ValueKind::NullLeaf,
            Value::Array(_) => ValueKind::Sequence,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Mapping => "mapping",
            ValueKind::NullLeaf => "null",
            ValueKind::Sequence => "sequence",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of a reference tree
///
/// Immutable once built. Validation only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceMapping {
    root: Map<String, Value>,
}

impl ReferenceMapping {
    /// Wrap a decoded value, failing fast if the root is not a mapping
    pub fn new(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(BabbleonError::NotAMapping {
                found: ValueKind::of(&other).as_str(),
            }),
        }
    }

    /// Empty mapping: every path is invalid against it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl From<Map<String, Value>> for ReferenceMapping {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

impl TryFrom<Value> for ReferenceMapping {
    type Error = BabbleonError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}
