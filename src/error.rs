//! Error types with fix suggestions
//!
//! Error code ranges:
//! - BAB-001-009: Reference mapping errors
//! - BAB-010-019: Reference file loading errors
//! - BAB-020-029: Project configuration errors
//! - BAB-030-039: Documentation input errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BabbleonError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// An unresolvable reference is never an error: it is reported as an invalid
/// entry in a [`Report`](crate::report::Report).
#[derive(Error, Debug)]
pub enum BabbleonError {
    // ─────────────────────────────────────────────────────────────
    // Reference mapping errors (BAB-001 to BAB-009)
    // ─────────────────────────────────────────────────────────────
    #[error("BAB-001: Reference data root must be a mapping, got {found}")]
    NotAMapping { found: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Reference file errors (BAB-010 to BAB-019)
    // ─────────────────────────────────────────────────────────────
    #[error("BAB-010: Unsupported reference file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("BAB-011: Failed to parse reference file '{path}': {details}")]
    ReferenceParse { path: String, details: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration errors (BAB-020 to BAB-029)
    // ─────────────────────────────────────────────────────────────
    #[error("BAB-020: Config error: {reason}")]
    Config { reason: String },

    #[error("BAB-021: Project already initialized: {path} exists")]
    AlreadyInitialized { path: String },

    // ─────────────────────────────────────────────────────────────
    // Documentation errors (BAB-030 to BAB-039)
    // ─────────────────────────────────────────────────────────────
    #[error("BAB-030: Invalid docs pattern '{pattern}': {details}")]
    InvalidDocsPattern { pattern: String, details: String },

    #[error("BAB-031: No documentation files matched: {patterns}")]
    NoDocs { patterns: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for BabbleonError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            BabbleonError::NotAMapping { .. } => {
                Some("The reference file must contain key: value pairs at the top level")
            }
            BabbleonError::UnsupportedFormat { .. } => {
                Some("Use a .yaml, .yml, .json or .toml reference file")
            }
            BabbleonError::ReferenceParse { .. } => {
                Some("Check the reference file syntax: indentation and quoting")
            }
            BabbleonError::Config { .. } => Some("Check babbleon.json is valid JSON"),
            BabbleonError::AlreadyInitialized { .. } => {
                Some("Pass --force to overwrite the existing configuration")
            }
            BabbleonError::InvalidDocsPattern { .. } => {
                Some("Use glob syntax like docs/**/*.md")
            }
            BabbleonError::NoDocs { .. } => {
                Some("Set \"docs\" in babbleon.json or pass --docs <pattern>")
            }
            BabbleonError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
