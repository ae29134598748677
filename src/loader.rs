//! Reading reference files and documentation from disk
//!
//! Decoding is delegated to serde: YAML, JSON and TOML all land in a
//! `serde_json::Value` before being checked into a [`ReferenceMapping`].

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{BabbleonError, Result};
use crate::mapping::ReferenceMapping;

/// Reference file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFormat {
    Yaml,
    Json,
    Toml,
}

impl ReferenceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(BabbleonError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Decode reference data from a string
///
/// `origin` only labels parse errors.
pub fn parse_reference(
    content: &str,
    format: ReferenceFormat,
    origin: &str,
) -> Result<ReferenceMapping> {
    // An empty YAML/TOML document has no root at all; treat it as `{}`.
    if content.trim().is_empty() && format != ReferenceFormat::Json {
        return Ok(ReferenceMapping::empty());
    }

    let parse_error = |details: String| BabbleonError::ReferenceParse {
        path: origin.to_string(),
        details,
    };

    let value: Value = match format {
        ReferenceFormat::Yaml => {
            let mut yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            yaml.apply_merge().map_err(|e| parse_error(e.to_string()))?;
            yaml_to_json(yaml)
        }
        ReferenceFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        ReferenceFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            toml_to_json(toml::Value::Table(table))
        }
    };

    ReferenceMapping::new(value)
}

/// Convert a YAML node, stringifying non-string mapping keys
fn yaml_to_json(yaml: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (yaml_key(key), yaml_to_json(value)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Convert a TOML node; datetimes become their RFC 3339 string
fn toml_to_json(node: toml::Value) -> Value {
    use toml::Value as Toml;

    match node {
        Toml::String(s) => Value::String(s),
        Toml::Integer(i) => Value::from(i),
        Toml::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        Toml::Boolean(b) => Value::Bool(b),
        Toml::Datetime(dt) => Value::String(dt.to_string()),
        Toml::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        Toml::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Number(n) => n.to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Load a reference file, choosing the decoder by extension
pub fn load_reference(path: &Path) -> Result<ReferenceMapping> {
    let format = ReferenceFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let mapping = parse_reference(&content, format, &path.display().to_string())?;

    info!(
        path = %path.display(),
        keys = mapping.root().len(),
        "loaded reference data"
    );
    Ok(mapping)
}

/// A documentation file and its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub text: String,
}

/// Expand glob patterns and read every matched file
///
/// Results are sorted by path and deduplicated. A pattern matching nothing
/// is only a warning; no match at all across every pattern is an error.
pub fn read_docs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Document>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries = glob::glob(pattern).map_err(|e| BabbleonError::InvalidDocsPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
        })?;

        let before = paths.len();
        for entry in entries {
            let path = entry.map_err(|e| BabbleonError::Io(e.into_error()))?;
            if path.is_file() {
                paths.push(path);
            }
        }

        if paths.len() == before {
            warn!(pattern, "docs pattern matched no files");
        }
    }

    if paths.is_empty() {
        return Err(BabbleonError::NoDocs {
            patterns: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    paths.sort();
    paths.dedup();

    paths
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path)?;
            Ok(Document { path, text })
        })
        .collect()
}
