//! Taxonomy synchronization.
//!
//! The [`TaxonomySynchronizer`] owns the client's copy of the server taxonomy
//! and keeps it in step with the feed:
//! - a full snapshot replaces everything
//! - a diff is applied as one atomic, ordered batch
//!
//! A diff that does not resolve against the local copy leaves the
//! synchronizer desynced. Diffs are refused from then on until a full
//! snapshot arrives.
//!
//! # Example
//!
//! ```
//! use flood_api_rs::sync::{PatchOperation, Taxonomy};
//! use flood_filter_rs::taxonomy::TaxonomySynchronizer;
//!
//! let mut sync = TaxonomySynchronizer::new();
//! sync.replace(Taxonomy::new());
//! sync.apply_patch(&[
//!     PatchOperation::add("/tagCounts/movies", 1),
//!     PatchOperation::replace("/tagCounts/movies", 2),
//! ])
//! .unwrap();
//! assert_eq!(sync.taxonomy().tag_counts.get("movies"), Some(&2));
//! ```

mod domain;
mod error;
mod lookups;
mod patch;

use flood_api_rs::models::{Dimension, TorrentStatus};
use flood_api_rs::sync::{PatchOperation, Taxonomy, TaxonomyEvent};

pub use domain::{compare_keys, ordered_keys};
pub use error::{PatchError, PatchResult};
pub use lookups::find_similar_key;

/// Holds the taxonomy and applies feed messages to it.
///
/// Feed messages must be applied from a single task, in the order they were
/// received. Reordering diffs corrupts the taxonomy.
#[derive(Debug, Clone, Default)]
pub struct TaxonomySynchronizer {
    /// The current taxonomy.
    taxonomy: Taxonomy,

    /// Set when a diff failed to apply; cleared by `replace`.
    desynced: bool,
}

impl TaxonomySynchronizer {
    /// Creates a synchronizer holding an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a synchronizer seeded with a snapshot.
    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            desynced: false,
        }
    }

    /// Returns a read-only view of the current taxonomy.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Returns true if a diff failed and a full snapshot is needed.
    pub fn is_desynced(&self) -> bool {
        self.desynced
    }

    /// Discards the current taxonomy and installs `taxonomy` verbatim.
    pub fn replace(&mut self, taxonomy: Taxonomy) {
        tracing::debug!(
            tags = taxonomy.tag_counts.len(),
            trackers = taxonomy.tracker_counts.len(),
            was_desynced = self.desynced,
            "installing full taxonomy snapshot"
        );
        self.taxonomy = taxonomy;
        self.desynced = false;
    }

    /// Applies an ordered batch of patch operations.
    ///
    /// The batch is all-or-nothing: it is applied to a working copy that is
    /// committed only if every operation succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Desynced`] if an earlier batch failed, or the
    /// error of the first operation that does not resolve. In both cases the
    /// taxonomy is left unchanged and the synchronizer is (or stays)
    /// desynced until [`replace`](Self::replace) is called.
    pub fn apply_patch(&mut self, operations: &[PatchOperation]) -> PatchResult<()> {
        if self.desynced {
            return Err(PatchError::Desynced);
        }

        let mut working = self.taxonomy.clone();
        if let Err(e) = patch::apply_operations(&mut working, operations) {
            tracing::warn!(
                error = %e,
                operations = operations.len(),
                "taxonomy patch rejected, full resync required"
            );
            self.desynced = true;
            return Err(e);
        }

        self.taxonomy = working;
        Ok(())
    }

    /// Applies one feed message.
    ///
    /// # Errors
    ///
    /// Returns the patch error of a failed [`TaxonomyEvent::Diff`]. A
    /// [`TaxonomyEvent::Full`] always succeeds.
    pub fn apply(&mut self, event: TaxonomyEvent) -> PatchResult<()> {
        match event {
            TaxonomyEvent::Full { taxonomy } => {
                self.replace(taxonomy);
                Ok(())
            }
            TaxonomyEvent::Diff { operations } => self.apply_patch(&operations),
        }
    }

    /// Returns the ordered domain of a dimension under the current taxonomy.
    pub fn domain(&self, dimension: Dimension) -> Vec<String> {
        ordered_keys(&self.taxonomy, dimension)
    }

    /// Returns true if `key` is a known key of `dimension`.
    pub fn contains_key(&self, dimension: Dimension, key: &str) -> bool {
        match dimension {
            Dimension::Status => key.parse::<TorrentStatus>().is_ok(),
            _ => self.taxonomy.counts(dimension).contains_key(key),
        }
    }

    /// Suggests a known key close to an unknown one.
    pub fn suggest_key(&self, dimension: Dimension, key: &str) -> Option<String> {
        let domain = self.domain(dimension);
        find_similar_key(key, domain.iter().map(String::as_str))
    }
}
