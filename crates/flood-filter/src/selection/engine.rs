//! The filter engine: selection state for every dimension plus search.

use flood_api_rs::models::{Dimension, TorrentStatus};
use flood_api_rs::sync::Taxonomy;
use serde::Serialize;

use super::error::SelectionResult;
use super::gesture::{Gesture, Modifiers};
use super::pair::{DimensionSelection, SelectOutcome, SelectionPair};
use crate::evaluator::FilterEvaluator;
use crate::taxonomy::ordered_keys;

/// Owns the filter state of the torrent list.
///
/// The engine is an ordinary value: construct one per list, hand out
/// references, and drive it from a single event loop. Selection and
/// evaluation are separate phases; see [`FilterEngine::evaluator`].
///
/// # Example
///
/// ```
/// use flood_api_rs::sync::Taxonomy;
/// use flood_filter_rs::selection::{FilterEngine, Modifiers};
///
/// let mut taxonomy = Taxonomy::new();
/// for tag in ["a", "b", "c"] {
///     taxonomy.tag_counts.insert(tag.to_string(), 1);
/// }
///
/// let mut engine = FilterEngine::new();
/// engine.select_tag(Some("a"), Modifiers::NONE, &taxonomy);
/// engine.select_tag(Some("c"), Modifiers::NONE.with_shift(), &taxonomy);
///
/// let included: Vec<&str> = engine.tag_filter().included().iter().map(String::as_str).collect();
/// assert_eq!(included, vec!["a", "b", "c"]);
/// assert!(engine.is_filter_active());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    status: DimensionSelection<TorrentStatus>,
    tags: DimensionSelection<String>,
    trackers: DimensionSelection<String>,
    search: String,
}

impl FilterEngine {
    /// Creates an engine with no active filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a gesture on the status list.
    pub fn select_status(
        &mut self,
        status: Option<TorrentStatus>,
        modifiers: Modifiers,
    ) -> SelectOutcome {
        let outcome = self
            .status
            .select(status.as_ref(), modifiers, &TorrentStatus::ALL);
        log_outcome(Dimension::Status, outcome);
        outcome
    }

    /// Applies a gesture on the tag list.
    ///
    /// `taxonomy` supplies the domain order for range gestures.
    pub fn select_tag(
        &mut self,
        tag: Option<&str>,
        modifiers: Modifiers,
        taxonomy: &Taxonomy,
    ) -> SelectOutcome {
        let domain = range_domain(taxonomy, Dimension::Tag, modifiers);
        let tag = tag.map(str::to_string);
        let outcome = self.tags.select(tag.as_ref(), modifiers, &domain);
        log_outcome(Dimension::Tag, outcome);
        outcome
    }

    /// Applies a gesture on the tracker list.
    ///
    /// `taxonomy` supplies the domain order for range gestures.
    pub fn select_tracker(
        &mut self,
        tracker: Option<&str>,
        modifiers: Modifiers,
        taxonomy: &Taxonomy,
    ) -> SelectOutcome {
        let domain = range_domain(taxonomy, Dimension::Tracker, modifiers);
        let tracker = tracker.map(str::to_string);
        let outcome = self.trackers.select(tracker.as_ref(), modifiers, &domain);
        log_outcome(Dimension::Tracker, outcome);
        outcome
    }

    /// Applies a gesture on whichever dimension it names.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownStatus`](super::SelectionError::UnknownStatus)
    /// if a status gesture carries a key that is not a torrent status. Tag and
    /// tracker keys are accepted as-is.
    pub fn select(&mut self, gesture: &Gesture, taxonomy: &Taxonomy) -> SelectionResult<SelectOutcome> {
        let key = gesture.key.as_deref().filter(|key| !key.is_empty());
        let outcome = match gesture.dimension {
            Dimension::Status => {
                let status = key.map(str::parse::<TorrentStatus>).transpose()?;
                self.select_status(status, gesture.modifiers)
            }
            Dimension::Tag => self.select_tag(key, gesture.modifiers, taxonomy),
            Dimension::Tracker => self.select_tracker(key, gesture.modifiers, taxonomy),
        };
        Ok(outcome)
    }

    /// Replaces the search text. Any string is accepted, including empty.
    pub fn set_search_filter(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Resets every dimension, every anchor and the search text.
    pub fn clear_all_filters(&mut self) {
        self.status.clear();
        self.tags.clear();
        self.trackers.clear();
        self.search.clear();
        tracing::debug!("all filters cleared");
    }

    /// Returns true if the search text or any dimension constrains the list.
    pub fn is_filter_active(&self) -> bool {
        !self.search.is_empty()
            || !self.status.pair().is_empty()
            || !self.tags.pair().is_empty()
            || !self.trackers.pair().is_empty()
    }

    /// Current search text.
    pub fn search_filter(&self) -> &str {
        &self.search
    }

    /// Status selection pair.
    pub fn status_filter(&self) -> &SelectionPair<TorrentStatus> {
        self.status.pair()
    }

    /// Tag selection pair.
    pub fn tag_filter(&self) -> &SelectionPair<String> {
        self.tags.pair()
    }

    /// Tracker selection pair.
    pub fn tracker_filter(&self) -> &SelectionPair<String> {
        self.trackers.pair()
    }

    /// Status selection, including its anchor.
    pub fn status(&self) -> &DimensionSelection<TorrentStatus> {
        &self.status
    }

    /// Tag selection, including its anchor.
    pub fn tags(&self) -> &DimensionSelection<String> {
        &self.tags
    }

    /// Tracker selection, including its anchor.
    pub fn trackers(&self) -> &DimensionSelection<String> {
        &self.trackers
    }

    /// Anchor of a dimension, rendered as a string.
    pub fn anchor(&self, dimension: Dimension) -> Option<String> {
        match dimension {
            Dimension::Status => self.status.anchor().map(|s| s.as_str().to_string()),
            Dimension::Tag => self.tags.anchor().cloned(),
            Dimension::Tracker => self.trackers.anchor().cloned(),
        }
    }

    /// Returns an owned copy of the observable state.
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            search_filter: self.search.clone(),
            status_filter: self.status.pair().clone(),
            tag_filter: self.tags.pair().clone(),
            tracker_filter: self.trackers.pair().clone(),
        }
    }

    /// Returns an evaluator borrowing the current state.
    pub fn evaluator(&self) -> FilterEvaluator<'_> {
        FilterEvaluator::from_engine(self)
    }
}

/// Observable filter state, detached from the engine.
///
/// Serializes as
/// `{searchFilter, statusFilter: {included, excluded}, tagFilter, trackerFilter}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    pub search_filter: String,
    pub status_filter: SelectionPair<TorrentStatus>,
    pub tag_filter: SelectionPair<String>,
    pub tracker_filter: SelectionPair<String>,
}

impl FilterSnapshot {
    /// Same as [`FilterEngine::is_filter_active`] at the time of the snapshot.
    pub fn is_active(&self) -> bool {
        !self.search_filter.is_empty()
            || !self.status_filter.is_empty()
            || !self.tag_filter.is_empty()
            || !self.tracker_filter.is_empty()
    }
}

/// Domain for a gesture; only range gestures need one.
fn range_domain(taxonomy: &Taxonomy, dimension: Dimension, modifiers: Modifiers) -> Vec<String> {
    if modifiers.shift {
        ordered_keys(taxonomy, dimension)
    } else {
        Vec::new()
    }
}

fn log_outcome(dimension: Dimension, outcome: SelectOutcome) {
    match outcome {
        SelectOutcome::Ignored => tracing::debug!(
            %dimension,
            "range selection ignored: key or anchor not in domain"
        ),
        _ => tracing::debug!(%dimension, ?outcome, "filter selection updated"),
    }
}
