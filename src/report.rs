//! Validation results and the valid/invalid partition of a document

use serde::Serialize;
use serde_json::Value;

use crate::mapping::ValueKind;

/// Outcome of checking one reference path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub path: String,
    pub valid: bool,
    /// Resolved node, `None` when invalid
    pub value: Option<Value>,
    /// Kind of the resolved node, `None` exactly when invalid
    pub value_type: Option<ValueKind>,
}

impl ValidationResult {
    pub fn resolved(path: impl Into<String>, value: Value) -> Self {
        let value_type = Some(ValueKind::of(&value));
        Self {
            path: path.into(),
            valid: true,
            value: Some(value),
            value_type,
        }
    }

    pub fn unresolved(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            valid: false,
            value: None,
            value_type: None,
        }
    }
}

/// Every extracted path, in exactly one of the two lists
///
/// Order inside each list carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub valid: Vec<ValidationResult>,
    pub invalid: Vec<ValidationResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a result under `valid` or `invalid` by its flag
    pub fn push(&mut self, result: ValidationResult) {
        if result.valid {
            self.valid.push(result);
        } else {
            self.invalid.push(result);
        }
    }

    /// No invalid references
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Valid paths, sorted for display
    pub fn valid_paths(&self) -> Vec<&str> {
        sorted_paths(&self.valid)
    }

    /// Invalid paths, sorted for display
    pub fn invalid_paths(&self) -> Vec<&str> {
        sorted_paths(&self.invalid)
    }
}

impl FromIterator<ValidationResult> for Report {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        let mut report = Report::new();
        for result in iter {
            report.push(result);
        }
        report
    }
}

fn sorted_paths(results: &[ValidationResult]) -> Vec<&str> {
    let mut paths: Vec<&str> = results.iter().map(|r| r.path.as_str()).collect();
    paths.sort_unstable();
    paths
}
