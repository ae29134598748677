//! Reference extraction from documentation text
//!
//! A candidate token is whatever sits between two backticks. Backticks pair
//! strictly left to right: every backtick closes the one before it, and
//! escaped or nested backticks are not supported. A trailing unpaired
//! backtick is ignored.
//!
//! A token is accepted only if its *entire* content is a dotted path:
//!
//! ```text
//! path    := segment ("." segment)*
//! segment := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! So `` `tabs.index` `` is a reference, while `` `123.invalid` ``,
//! `` `invalid.123` ``, `` ` space.path ` `` and ``` `` ``` are not.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Backtick-delimited candidate token
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]*)`").unwrap());

/// Full dotted reference path (anchored)
static REFERENCE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Check whether a string is a well-formed reference path
pub fn is_reference_path(candidate: &str) -> bool {
    REFERENCE_PATH.is_match(candidate)
}

/// Iterate accepted tokens with their byte offset, in source order
fn accepted_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    TOKEN_PATTERN.captures_iter(text).filter_map(|caps| {
        let token = caps.get(1)?;
        is_reference_path(token.as_str()).then(|| (token.start(), token.as_str()))
    })
}

/// Extract the set of reference paths mentioned in `text`
///
/// Deduplicated, no ordering guarantee.
pub fn extract_references(text: &str) -> HashSet<String> {
    accepted_tokens(text)
        .map(|(_, token)| token.to_string())
        .collect()
}

/// Same token set as [`extract_references`], each with the 1-based line
/// numbers it appears on
pub fn locate_references(text: &str) -> BTreeMap<String, Vec<usize>> {
    let mut located: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut line = 1;
    let mut scanned = 0;

    for (offset, token) in accepted_tokens(text) {
        line += text[scanned..offset].matches('\n').count();
        scanned = offset;

        let lines = located.entry(token.to_string()).or_default();
        if lines.last() != Some(&line) {
            lines.push(line);
        }
    }

    located
}
