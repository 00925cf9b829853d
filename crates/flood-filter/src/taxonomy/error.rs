//! Error types for taxonomy patching.

use flood_api_rs::sync::TaxonomySection;
use thiserror::Error;

/// A specialized Result type for taxonomy patch operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while applying a taxonomy patch.
///
/// Every variant means the sender and the local taxonomy disagree. None of
/// them is recoverable locally: the caller must install a full snapshot with
/// [`TaxonomySynchronizer::replace`](super::TaxonomySynchronizer::replace)
/// and must not retry the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatchError {
    /// The path is not a well-formed JSON Pointer into the taxonomy.
    #[error("invalid patch path '{path}': {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The first path segment names no taxonomy section.
    #[error("unknown taxonomy section '{section}' in path '{path}'")]
    UnknownSection {
        /// The offending path.
        path: String,
        /// The unrecognized section name.
        section: String,
    },

    /// A `remove` or `replace` targets a key that does not exist.
    #[error("patch path '{path}' does not resolve: {section} has no key '{key}'")]
    MissingKey {
        /// The offending path.
        path: String,
        /// The section that was searched.
        section: TaxonomySection,
        /// The missing key.
        key: String,
    },

    /// An operation that the fixed root does not support.
    #[error("cannot {op} the taxonomy root")]
    RootOperation {
        /// The operation name.
        op: &'static str,
    },

    /// A `remove` of a whole section; the taxonomy shape is fixed.
    #[error("cannot remove taxonomy section {section}")]
    SectionRemoval {
        /// The section the operation tried to remove.
        section: TaxonomySection,
    },

    /// The value does not have the shape the target expects.
    #[error("invalid value for '{path}': {reason}")]
    InvalidValue {
        /// The target path.
        path: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An earlier batch failed and no full snapshot has been installed since.
    #[error("taxonomy is out of sync; a full replace is required")]
    Desynced,
}

impl PatchError {
    /// Creates an invalid path error.
    pub fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        PatchError::InvalidPath {
            path: path.into(),
            reason,
        }
    }

    /// Creates a missing key error.
    pub fn missing_key(
        path: impl Into<String>,
        section: TaxonomySection,
        key: impl Into<String>,
    ) -> Self {
        PatchError::MissingKey {
            path: path.into(),
            section,
            key: key.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(path: impl Into<String>, reason: impl ToString) -> Self {
        PatchError::InvalidValue {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the caller has to fall back to a full replace.
    ///
    /// This holds for every variant; the method exists so call sites read as
    /// a decision rather than a blanket catch.
    pub fn requires_resync(&self) -> bool {
        true
    }
}
