//! Taxonomy structure reported by the server.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Aggregate, Dimension};

/// Aggregate counts and sizes per key, per dimension.
///
/// The shape is fixed: five maps, each from key to a number. Every map may
/// contain the empty key `""`, which the server uses for the total across all
/// torrents.
///
/// # Examples
///
/// ```
/// use flood_api_rs::models::Dimension;
/// use flood_api_rs::sync::Taxonomy;
///
/// let json = r#"{
///     "statusCounts": {"": 3, "seeding": 2},
///     "tagCounts": {"": 3, "untagged": 1, "movies": 2},
///     "tagSizes": {"movies": 4096},
///     "trackerCounts": {},
///     "trackerSizes": {}
/// }"#;
///
/// let taxonomy: Taxonomy = serde_json::from_str(json).unwrap();
/// let movies = taxonomy.aggregate(Dimension::Tag, "movies");
/// assert_eq!(movies.count, 2);
/// assert_eq!(movies.size, 4096);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    /// Torrent count per status.
    #[serde(default)]
    pub status_counts: BTreeMap<String, u64>,

    /// Torrent count per tag.
    #[serde(default)]
    pub tag_counts: BTreeMap<String, u64>,

    /// Total bytes per tag.
    #[serde(default)]
    pub tag_sizes: BTreeMap<String, u64>,

    /// Torrent count per tracker.
    #[serde(default)]
    pub tracker_counts: BTreeMap<String, u64>,

    /// Total bytes per tracker.
    #[serde(default)]
    pub tracker_sizes: BTreeMap<String, u64>,
}

impl Taxonomy {
    /// Creates an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map holding the given section.
    pub fn section(&self, section: TaxonomySection) -> &BTreeMap<String, u64> {
        match section {
            TaxonomySection::StatusCounts => &self.status_counts,
            TaxonomySection::TagCounts => &self.tag_counts,
            TaxonomySection::TagSizes => &self.tag_sizes,
            TaxonomySection::TrackerCounts => &self.tracker_counts,
            TaxonomySection::TrackerSizes => &self.tracker_sizes,
        }
    }

    /// Returns the map holding the given section, mutably.
    pub fn section_mut(&mut self, section: TaxonomySection) -> &mut BTreeMap<String, u64> {
        match section {
            TaxonomySection::StatusCounts => &mut self.status_counts,
            TaxonomySection::TagCounts => &mut self.tag_counts,
            TaxonomySection::TagSizes => &mut self.tag_sizes,
            TaxonomySection::TrackerCounts => &mut self.tracker_counts,
            TaxonomySection::TrackerSizes => &mut self.tracker_sizes,
        }
    }

    /// Returns the count map that defines the keys of a dimension.
    pub fn counts(&self, dimension: Dimension) -> &BTreeMap<String, u64> {
        self.section(TaxonomySection::counts_for(dimension))
    }

    /// Folds the count and size maps into one aggregate for a key.
    ///
    /// Missing entries read as zero.
    pub fn aggregate(&self, dimension: Dimension, key: &str) -> Aggregate {
        let count = self.counts(dimension).get(key).copied().unwrap_or(0);
        let size = TaxonomySection::sizes_for(dimension)
            .and_then(|section| self.section(section).get(key).copied())
            .unwrap_or(0);
        Aggregate { count, size }
    }
}

/// One of the fixed maps inside a [`Taxonomy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomySection {
    StatusCounts,
    TagCounts,
    TagSizes,
    TrackerCounts,
    TrackerSizes,
}

impl TaxonomySection {
    /// All sections, in wire order.
    pub const ALL: [TaxonomySection; 5] = [
        TaxonomySection::StatusCounts,
        TaxonomySection::TagCounts,
        TaxonomySection::TagSizes,
        TaxonomySection::TrackerCounts,
        TaxonomySection::TrackerSizes,
    ];

    /// Returns the JSON field name of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomySection::StatusCounts => "statusCounts",
            TaxonomySection::TagCounts => "tagCounts",
            TaxonomySection::TagSizes => "tagSizes",
            TaxonomySection::TrackerCounts => "trackerCounts",
            TaxonomySection::TrackerSizes => "trackerSizes",
        }
    }

    /// Looks up a section by its JSON field name (exact match).
    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == name)
    }

    /// The count section for a dimension.
    pub fn counts_for(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Status => TaxonomySection::StatusCounts,
            Dimension::Tag => TaxonomySection::TagCounts,
            Dimension::Tracker => TaxonomySection::TrackerCounts,
        }
    }

    /// The size section for a dimension, if the server reports one.
    pub fn sizes_for(dimension: Dimension) -> Option<Self> {
        match dimension {
            Dimension::Status => None,
            Dimension::Tag => Some(TaxonomySection::TagSizes),
            Dimension::Tracker => Some(TaxonomySection::TrackerSizes),
        }
    }
}

impl fmt::Display for TaxonomySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
