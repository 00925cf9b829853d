//! Record matching against the current filter state.
//!
//! This module provides the [`FilterEvaluator`] for testing torrents (or any
//! [`FilterableRecord`]) against the selection pairs and the search text.
//!
//! # Example
//!
//! ```
//! use flood_api_rs::models::Torrent;
//! use flood_api_rs::sync::Taxonomy;
//! use flood_filter_rs::evaluator::FilterEvaluator;
//! use flood_filter_rs::selection::{FilterEngine, Modifiers};
//!
//! let mut hd = Torrent::new("h1", "Big Buck Bunny");
//! hd.tags = vec!["hd".to_string()];
//! let plain = Torrent::new("h2", "Sintel");
//!
//! let mut engine = FilterEngine::new();
//! engine.select_tag(Some("hd"), Modifiers::NONE, &Taxonomy::new());
//!
//! let torrents = vec![hd, plain];
//! let visible = engine.evaluator().filter_records(&torrents);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].hash, "h1");
//! ```

use std::borrow::Borrow;

use flood_api_rs::models::{Torrent, TorrentStatus, UNTAGGED_TAG};

use crate::selection::{FilterEngine, FilterSnapshot, SelectionPair};

/// A record that can be filtered by status, tag, tracker and name.
pub trait FilterableRecord {
    /// Text the search filter is matched against.
    fn display_name(&self) -> &str;

    /// Status values of the record.
    fn statuses(&self) -> &[TorrentStatus];

    /// Tags of the record. Empty means untagged.
    fn tags(&self) -> &[String];

    /// Tracker keys of the record.
    fn trackers(&self) -> &[String];
}

impl FilterableRecord for Torrent {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn statuses(&self) -> &[TorrentStatus] {
        &self.status
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn trackers(&self) -> &[String] {
        &self.tracker_uris
    }
}

/// Evaluates the filter state against records.
///
/// Borrows the selection pairs; the search text is lowercased once up front.
#[derive(Debug, Clone)]
pub struct FilterEvaluator<'a> {
    status: &'a SelectionPair<TorrentStatus>,
    tags: &'a SelectionPair<String>,
    trackers: &'a SelectionPair<String>,
    search: Option<String>,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates an evaluator over a snapshot.
    pub fn new(snapshot: &'a FilterSnapshot) -> Self {
        Self::from_parts(
            &snapshot.status_filter,
            &snapshot.tag_filter,
            &snapshot.tracker_filter,
            &snapshot.search_filter,
        )
    }

    /// Creates an evaluator borrowing the engine's live state.
    pub fn from_engine(engine: &'a FilterEngine) -> Self {
        Self::from_parts(
            engine.status_filter(),
            engine.tag_filter(),
            engine.tracker_filter(),
            engine.search_filter(),
        )
    }

    fn from_parts(
        status: &'a SelectionPair<TorrentStatus>,
        tags: &'a SelectionPair<String>,
        trackers: &'a SelectionPair<String>,
        search: &str,
    ) -> Self {
        Self {
            status,
            tags,
            trackers,
            search: (!search.is_empty()).then(|| search.to_lowercase()),
        }
    }

    /// Returns true if the record passes every active constraint.
    pub fn matches<R: FilterableRecord + ?Sized>(&self, record: &R) -> bool {
        self.matches_search(record.display_name())
            && pair_admits(self.status, record.statuses().iter())
            && self.matches_tags(record.tags())
            && pair_admits(self.trackers, record.trackers().iter().map(String::as_str))
    }

    /// Filters a slice of records, returning only those that match.
    pub fn filter_records<'r, R: FilterableRecord>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    fn matches_search(&self, name: &str) -> bool {
        match &self.search {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// An untagged record is matched as if it carried [`UNTAGGED_TAG`].
    fn matches_tags(&self, tags: &[String]) -> bool {
        if tags.is_empty() {
            pair_admits(self.tags, std::iter::once(UNTAGGED_TAG))
        } else {
            pair_admits(self.tags, tags.iter().map(String::as_str))
        }
    }
}

/// Tests one record against a snapshot.
///
/// Builds a throwaway [`FilterEvaluator`]; prefer
/// [`FilterEvaluator::filter_records`] for whole lists.
pub fn matches<R: FilterableRecord + ?Sized>(record: &R, snapshot: &FilterSnapshot) -> bool {
    FilterEvaluator::new(snapshot).matches(record)
}

/// At least one value included (when `included` is non-empty) and no value
/// excluded.
fn pair_admits<'v, K, Q, I>(pair: &SelectionPair<K>, values: I) -> bool
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized + 'v,
    I: Iterator<Item = &'v Q> + Clone,
{
    let included = pair.included();
    let excluded = pair.excluded();

    if !included.is_empty() && !values.clone().any(|value| included.contains(value)) {
        return false;
    }

    excluded.is_empty() || !values.into_iter().any(|value| excluded.contains(value))
}
