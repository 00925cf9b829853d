//! Torrent record model.

use serde::{Deserialize, Serialize};

use super::TorrentStatus;

/// A torrent as reported by the server's torrent list.
///
/// Only the fields the filter engine reads are modelled; unknown fields in
/// the server payload are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Torrent {
    /// Info hash, unique per torrent.
    pub hash: String,

    /// Display name.
    pub name: String,

    /// Current statuses.
    #[serde(default)]
    pub status: Vec<TorrentStatus>,

    /// Tags assigned by the user. Empty for untagged torrents.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Tracker hostnames the torrent announces to.
    #[serde(default, rename = "trackerURIs")]
    pub tracker_uris: Vec<String>,

    /// Total size of the torrent payload in bytes.
    #[serde(default)]
    pub size_bytes: u64,
}

impl Torrent {
    /// Creates a torrent with the given hash and name and no other data.
    pub fn new(hash: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            name: name.into(),
            status: Vec::new(),
            tags: Vec::new(),
            tracker_uris: Vec::new(),
            size_bytes: 0,
        }
    }

    /// Returns true if the torrent carries no tags.
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}
