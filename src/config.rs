//! Project configuration
//!
//! Stored as `babbleon.json` at the project root.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags (`--reference`, `--docs`)
//! 2. Config file (`babbleon.json`)
//! 3. Defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BabbleonError, Result};

/// Default config file name, relative to the working directory
pub const CONFIG_FILE: &str = "babbleon.json";

/// Default reference data location
pub const DEFAULT_REFERENCE_FILE: &str = ".babbleon/reference.yaml";

/// Default documentation pattern
pub const DEFAULT_DOCS: &str = ".babbleon/docs.md";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BabbleonConfig {
    /// Reference data file (.yaml, .yml, .json or .toml)
    #[serde(default = "default_reference_file")]
    pub reference_file: PathBuf,

    /// Glob patterns for documentation files
    #[serde(default = "default_docs")]
    pub docs: Vec<String>,
}

fn default_reference_file() -> PathBuf {
    PathBuf::from(DEFAULT_REFERENCE_FILE)
}

fn default_docs() -> Vec<String> {
    vec![DEFAULT_DOCS.to_string()]
}

impl Default for BabbleonConfig {
    fn default() -> Self {
        Self {
            reference_file: default_reference_file(),
            docs: default_docs(),
        }
    }
}

impl BabbleonConfig {
    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| BabbleonError::Config {
            reason: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config = Self::from_json(&content).map_err(|e| BabbleonError::Config {
            reason: format!("Failed to parse {}: {}", path.display(), e),
        })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Apply CLI overrides; empty `docs` keeps the configured patterns
    pub fn with_overrides(mut self, reference_file: Option<PathBuf>, docs: Vec<String>) -> Self {
        if let Some(reference_file) = reference_file {
            self.reference_file = reference_file;
        }
        if !docs.is_empty() {
            self.docs = docs;
        }
        self
    }

    pub fn reference_file(&self) -> &Path {
        &self.reference_file
    }
}
