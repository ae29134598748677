//! Babbleon - checks that dotted references in docs exist in reference data

pub mod config;
pub mod error;
pub mod extract;
pub mod init;
pub mod loader;
pub mod mapping;
pub mod report;
pub mod resolve;
pub mod validator;

pub use config::BabbleonConfig;
pub use error::{BabbleonError, FixSuggestion};
pub use extract::{extract_references, is_reference_path, locate_references};
pub use mapping::{ReferenceMapping, ValueKind};
pub use report::{Report, ValidationResult};
pub use validator::{validate_docs, ReferenceValidator};
