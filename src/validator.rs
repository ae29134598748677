//! Reference validator
//!
//! Runs extraction and resolution over one document and partitions the
//! extracted paths into valid and invalid. Holds no state beyond borrowed
//! inputs, so every call is reproducible from the mapping and the text.

use std::collections::HashSet;

use tracing::debug;

use crate::extract;
use crate::mapping::ReferenceMapping;
use crate::report::{Report, ValidationResult};
use crate::resolve;

/// Checks the references of one document against one mapping
#[derive(Debug, Clone, Copy)]
pub struct ReferenceValidator<'a> {
    mapping: &'a ReferenceMapping,
    text: &'a str,
}

impl<'a> ReferenceValidator<'a> {
    pub fn new(mapping: &'a ReferenceMapping, text: &'a str) -> Self {
        Self { mapping, text }
    }

    /// Set of reference paths mentioned in the document
    pub fn extract_references(&self) -> HashSet<String> {
        extract::extract_references(self.text)
    }

    /// Check a single path against the mapping
    pub fn validate_reference(&self, path: &str) -> ValidationResult {
        match resolve::resolve(self.mapping, path) {
            Some(value) => ValidationResult::resolved(path, value.clone()),
            None => {
                debug!(path, "reference does not resolve");
                ValidationResult::unresolved(path)
            }
        }
    }

    /// Validate every reference in the document
    pub fn validate_docs(&self) -> Report {
        let references = self.extract_references();
        debug!(count = references.len(), "extracted references");

        references
            .iter()
            .map(|path| self.validate_reference(path))
            .collect()
    }
}

/// Validate one document in a single call
pub fn validate_docs(mapping: &ReferenceMapping, text: &str) -> Report {
    ReferenceValidator::new(mapping, text).validate_docs()
}
