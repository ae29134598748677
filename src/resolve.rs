//! Dotted path resolution against a reference mapping
//!
//! - `tabs.index` → `root["tabs"]["index"]`
//! - every step must land on a mapping that has the next segment as a key
//! - the terminal node may be a scalar, null, or a whole sub-mapping
//!
//! Does NOT support:
//! - Array indices: `items.0`, `items[0]`
//! - Wildcards: `tabs.*`

use serde_json::{Map, Value};

use crate::mapping::ReferenceMapping;

/// Split a dotted path into its ordered segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.')
}

/// Walk `segments` from `root`, returning the node reached
///
/// Fails as soon as a segment is missing or the current node is not a
/// mapping. No partial value is returned.
pub fn apply<'a, 'p>(
    root: &'a Map<String, Value>,
    mut segments: impl Iterator<Item = &'p str>,
) -> Option<&'a Value> {
    let mut current = root.get(segments.next()?)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Resolve a dotted path in one step
///
/// `None` means the path does not exist in the mapping.
pub fn resolve<'a>(mapping: &'a ReferenceMapping, path: &str) -> Option<&'a Value> {
    apply(mapping.root(), segments(path))
}
