//! Torrent status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status a torrent can report.
///
/// A torrent usually carries several statuses at once (for example
/// `seeding`, `complete` and `active`). The declaration order is the
/// canonical order used by the status filter list, and the derived [`Ord`]
/// follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorrentStatus {
    Checking,
    Seeding,
    Complete,
    Downloading,
    Stopped,
    Error,
    Inactive,
    Active,
}

impl TorrentStatus {
    /// Every status, in canonical order.
    pub const ALL: [TorrentStatus; 8] = [
        TorrentStatus::Checking,
        TorrentStatus::Seeding,
        TorrentStatus::Complete,
        TorrentStatus::Downloading,
        TorrentStatus::Stopped,
        TorrentStatus::Error,
        TorrentStatus::Inactive,
        TorrentStatus::Active,
    ];

    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TorrentStatus::Checking => "checking",
            TorrentStatus::Seeding => "seeding",
            TorrentStatus::Complete => "complete",
            TorrentStatus::Downloading => "downloading",
            TorrentStatus::Stopped => "stopped",
            TorrentStatus::Error => "error",
            TorrentStatus::Inactive => "inactive",
            TorrentStatus::Active => "active",
        }
    }
}

impl fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`TorrentStatus`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown torrent status: {name}")]
pub struct ParseStatusError {
    /// The unrecognized status name.
    pub name: String,
}

impl FromStr for TorrentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        TorrentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| ParseStatusError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_canonical_order() {
        let names: Vec<&str> = TorrentStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "checking",
                "seeding",
                "complete",
                "downloading",
                "stopped",
                "error",
                "inactive",
                "active"
            ]
        );
    }

    #[test]
    fn test_ord_follows_canonical_order() {
        let mut shuffled = vec![
            TorrentStatus::Active,
            TorrentStatus::Checking,
            TorrentStatus::Error,
            TorrentStatus::Seeding,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                TorrentStatus::Checking,
                TorrentStatus::Seeding,
                TorrentStatus::Error,
                TorrentStatus::Active
            ]
        );
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("SEEDING".parse::<TorrentStatus>().unwrap(), TorrentStatus::Seeding);
        assert_eq!("Stopped".parse::<TorrentStatus>().unwrap(), TorrentStatus::Stopped);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "paused".parse::<TorrentStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError { name: "paused".to_string() });
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&TorrentStatus::Downloading).unwrap();
        assert_eq!(json, "\"downloading\"");
        let parsed: TorrentStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, TorrentStatus::Inactive);
    }
}
