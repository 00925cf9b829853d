//! Taxonomy feed messages and patch operations.

use serde::{Deserialize, Serialize};

use super::Taxonomy;

/// A message on the taxonomy feed.
///
/// # Examples
///
/// ```
/// use flood_api_rs::sync::{PatchOperation, TaxonomyEvent};
///
/// let json = r#"{
///     "type": "diff",
///     "operations": [
///         {"op": "add", "path": "/tagCounts/movies", "value": 1},
///         {"op": "replace", "path": "/tagCounts/movies", "value": 2}
///     ]
/// }"#;
///
/// let event: TaxonomyEvent = serde_json::from_str(json).unwrap();
/// let TaxonomyEvent::Diff { operations } = event else {
///     panic!("expected a diff");
/// };
/// assert_eq!(operations[1], PatchOperation::replace("/tagCounts/movies", 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaxonomyEvent {
    /// Complete snapshot; replaces whatever the client holds.
    Full {
        /// The new taxonomy.
        taxonomy: Taxonomy,
    },

    /// Ordered delta against the previous state.
    Diff {
        /// Operations to apply in order.
        operations: Vec<PatchOperation>,
    },
}

/// One JSON Patch (RFC 6902) operation against a [`Taxonomy`].
///
/// Only the operations the server emits for the taxonomy are supported.
/// `path` is a JSON Pointer such as `/tagCounts/movies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Insert a value, overwriting any existing entry.
    Add {
        path: String,
        value: serde_json::Value,
    },

    /// Delete an existing entry.
    Remove { path: String },

    /// Overwrite an existing entry.
    Replace {
        path: String,
        value: serde_json::Value,
    },
}

impl PatchOperation {
    /// Creates an `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        PatchOperation::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Creates a `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        PatchOperation::Remove { path: path.into() }
    }

    /// Creates a `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        PatchOperation::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Returns the target path.
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. } => path,
        }
    }

    /// Returns the operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            PatchOperation::Add { .. } => "add",
            PatchOperation::Remove { .. } => "remove",
            PatchOperation::Replace { .. } => "replace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_operation_wire_format() {
        let op = PatchOperation::add("/trackerCounts/tracker.example", 3);
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(
            value,
            json!({"op": "add", "path": "/trackerCounts/tracker.example", "value": 3})
        );

        let remove = serde_json::to_value(PatchOperation::remove("/tagCounts/x")).unwrap();
        assert_eq!(remove, json!({"op": "remove", "path": "/tagCounts/x"}));
    }

    #[test]
    fn test_patch_operation_rejects_unsupported_op() {
        let result: Result<PatchOperation, _> =
            serde_json::from_value(json!({"op": "move", "from": "/a", "path": "/b"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_accessors() {
        let op = PatchOperation::replace("/tagSizes/hd", 10);
        assert_eq!(op.path(), "/tagSizes/hd");
        assert_eq!(op.name(), "replace");
    }

    #[test]
    fn test_full_event_deserializes() {
        let event: TaxonomyEvent = serde_json::from_value(json!({
            "type": "full",
            "taxonomy": {"tagCounts": {"": 1, "untagged": 1}}
        }))
        .unwrap();
        match event {
            TaxonomyEvent::Full { taxonomy } => {
                assert_eq!(taxonomy.tag_counts.get("untagged"), Some(&1));
            }
            other => panic!("expected full event, got {other:?}"),
        }
    }
}
