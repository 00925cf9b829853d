//! Patch logic for applying taxonomy diffs.
//!
//! Operations target a fixed-shape structure, so a path resolves to one of
//! three things: the root, a whole section, or one entry of a section.

use std::collections::BTreeMap;

use flood_api_rs::sync::{PatchOperation, Taxonomy, TaxonomySection};
use serde::de::DeserializeOwned;

use super::error::{PatchError, PatchResult};

/// Where a JSON Pointer lands inside a [`Taxonomy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Root,
    Section(TaxonomySection),
    Entry(TaxonomySection, String),
}

/// Resolves a JSON Pointer (RFC 6901) against the taxonomy shape.
pub(crate) fn resolve_path(path: &str) -> PatchResult<Target> {
    if path.is_empty() {
        return Ok(Target::Root);
    }

    let Some(rest) = path.strip_prefix('/') else {
        return Err(PatchError::invalid_path(path, "must be empty or start with '/'"));
    };

    let segments = rest
        .split('/')
        .map(|segment| unescape_segment(path, segment))
        .collect::<PatchResult<Vec<_>>>()?;

    let section = TaxonomySection::from_field(&segments[0]).ok_or_else(|| {
        PatchError::UnknownSection {
            path: path.to_string(),
            section: segments[0].clone(),
        }
    })?;

    match segments.len() {
        1 => Ok(Target::Section(section)),
        2 => Ok(Target::Entry(section, segments[1].clone())),
        _ => Err(PatchError::invalid_path(path, "taxonomy entries have no children")),
    }
}

/// Decodes `~1` to `/` and `~0` to `~`, in that order.
fn unescape_segment(path: &str, segment: &str) -> PatchResult<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(PatchError::invalid_path(path, "'~' must be followed by 0 or 1")),
        }
    }
    Ok(out)
}

fn decode<T: DeserializeOwned>(path: &str, value: &serde_json::Value) -> PatchResult<T> {
    serde_json::from_value(value.clone()).map_err(|e| PatchError::invalid_value(path, e))
}

/// Applies a batch of operations in order.
///
/// Each operation sees the state left by the previous one. On error the
/// taxonomy may be partially modified; callers that need atomicity apply the
/// batch to a copy.
pub(crate) fn apply_operations(
    taxonomy: &mut Taxonomy,
    operations: &[PatchOperation],
) -> PatchResult<()> {
    for operation in operations {
        apply_operation(taxonomy, operation)?;
    }
    Ok(())
}

/// Applies a single operation.
pub(crate) fn apply_operation(taxonomy: &mut Taxonomy, operation: &PatchOperation) -> PatchResult<()> {
    let path = operation.path();
    let target = resolve_path(path)?;

    match (operation, target) {
        // Root: the whole document is swapped.
        (PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. }, Target::Root) => {
            *taxonomy = decode(path, value)?;
        }
        (PatchOperation::Remove { .. }, Target::Root) => {
            return Err(PatchError::RootOperation { op: "remove" });
        }

        // Section: the whole map is swapped, never removed.
        (
            PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. },
            Target::Section(section),
        ) => {
            let map: BTreeMap<String, u64> = decode(path, value)?;
            *taxonomy.section_mut(section) = map;
        }
        (PatchOperation::Remove { .. }, Target::Section(section)) => {
            return Err(PatchError::SectionRemoval { section });
        }

        // Entry
        (PatchOperation::Add { value, .. }, Target::Entry(section, key)) => {
            let number: u64 = decode(path, value)?;
            taxonomy.section_mut(section).insert(key, number);
        }
        (PatchOperation::Replace { value, .. }, Target::Entry(section, key)) => {
            let number: u64 = decode(path, value)?;
            match taxonomy.section_mut(section).get_mut(&key) {
                Some(slot) => *slot = number,
                None => return Err(PatchError::missing_key(path, section, key)),
            }
        }
        (PatchOperation::Remove { .. }, Target::Entry(section, key)) => {
            if taxonomy.section_mut(section).remove(&key).is_none() {
                return Err(PatchError::missing_key(path, section, key));
            }
        }
    }

    Ok(())
}
