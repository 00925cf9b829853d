//! Common model types shared across the taxonomy and the filter engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag key the server reports for torrents that carry no tags at all.
///
/// It appears in `tagCounts` like any other tag and can be selected, which is
/// how a user asks for "torrents without tags".
pub const UNTAGGED_TAG: &str = "untagged";

/// One independently filterable taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Torrent status (closed enumeration).
    Status,
    /// User-assigned tags.
    Tag,
    /// Tracker hostnames.
    Tracker,
}

impl Dimension {
    /// All dimensions, in display order.
    pub const ALL: [Dimension; 3] = [Dimension::Status, Dimension::Tag, Dimension::Tracker];

    /// Returns the lowercase name of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Status => "status",
            Dimension::Tag => "tag",
            Dimension::Tracker => "tracker",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Dimension`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dimension: {name} (expected status, tag or tracker)")]
pub struct ParseDimensionError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" | "statuses" => Ok(Dimension::Status),
            "tag" | "tags" => Ok(Dimension::Tag),
            "tracker" | "trackers" => Ok(Dimension::Tracker),
            _ => Err(ParseDimensionError {
                name: s.to_string(),
            }),
        }
    }
}

/// Aggregate metadata the server reports for one key of one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Number of torrents carrying the key.
    pub count: u64,
    /// Total size in bytes of those torrents (always 0 for statuses).
    pub size: u64,
}
