//! Input file loading for torrent lists and taxonomy feed messages.

use std::fs;
use std::path::{Path, PathBuf};

use flood_api_rs::models::{Torrent, UNTAGGED_TAG};
use flood_api_rs::sync::{PatchOperation, Taxonomy, TaxonomyEvent};
use flood_filter_rs::taxonomy::TaxonomySynchronizer;
use serde_json::Value;

use super::{CommandContext, CommandError, Result};

/// Reads and parses a JSON file.
fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| CommandError::input(path, format!("cannot read file: {e}")))?;
    serde_json::from_str(&content).map_err(|e| CommandError::input(path, e))
}

/// Loads a torrent list.
///
/// Accepts an array of torrents, or an object keyed by hash as the server's
/// torrent list endpoint returns it. In the keyed form a missing `hash`
/// field is filled from the key. Torrents are sorted by name.
pub fn load_records(path: &Path) -> Result<Vec<Torrent>> {
    let mut records = match read_json(path)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Torrent>, _>>()
            .map_err(|e| CommandError::input(path, e))?,
        Value::Object(map) => map
            .into_iter()
            .map(|(hash, mut value)| {
                if let Value::Object(fields) = &mut value {
                    fields.entry("hash").or_insert(Value::String(hash));
                }
                serde_json::from_value(value)
            })
            .collect::<std::result::Result<Vec<Torrent>, _>>()
            .map_err(|e| CommandError::input(path, e))?,
        _ => {
            return Err(CommandError::input(
                path,
                "expected an array of torrents or an object keyed by hash",
            ))
        }
    };

    records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tracing::debug!(path = %path.display(), count = records.len(), "loaded torrents");
    Ok(records)
}

/// Loads one taxonomy feed message.
///
/// - an object with a `type` field is a [`TaxonomyEvent`]
/// - an array is a bare list of patch operations (a diff)
/// - any other object is a bare taxonomy (a full snapshot)
pub fn load_feed(path: &Path) -> Result<TaxonomyEvent> {
    let value = read_json(path)?;

    let event = if value.is_array() {
        TaxonomyEvent::Diff {
            operations: serde_json::from_value::<Vec<PatchOperation>>(value)
                .map_err(|e| CommandError::input(path, e))?,
        }
    } else if value.get("type").is_some() {
        serde_json::from_value(value).map_err(|e| CommandError::input(path, e))?
    } else if value.is_object() {
        TaxonomyEvent::Full {
            taxonomy: serde_json::from_value(value).map_err(|e| CommandError::input(path, e))?,
        }
    } else {
        return Err(CommandError::input(
            path,
            "expected a feed message, a patch array or a taxonomy object",
        ));
    };

    Ok(event)
}

/// Builds a taxonomy from a torrent list the way the server aggregates it.
///
/// The empty key holds the totals; torrents without tags are counted under
/// `untagged`.
pub fn taxonomy_from_records(records: &[Torrent]) -> Taxonomy {
    let mut taxonomy = Taxonomy::new();
    let total_size: u64 = records.iter().map(|t| t.size_bytes).sum();
    let total = records.len() as u64;

    taxonomy.status_counts.insert(String::new(), total);
    taxonomy.tag_counts.insert(String::new(), total);
    taxonomy.tag_sizes.insert(String::new(), total_size);
    taxonomy.tracker_counts.insert(String::new(), total);
    taxonomy.tracker_sizes.insert(String::new(), total_size);

    for torrent in records {
        for status in &torrent.status {
            *taxonomy
                .status_counts
                .entry(status.as_str().to_string())
                .or_default() += 1;
        }

        let untagged = [UNTAGGED_TAG.to_string()];
        let tags = if torrent.tags.is_empty() {
            &untagged[..]
        } else {
            &torrent.tags[..]
        };
        for tag in tags {
            *taxonomy.tag_counts.entry(tag.clone()).or_default() += 1;
            *taxonomy.tag_sizes.entry(tag.clone()).or_default() += torrent.size_bytes;
        }

        for tracker in &torrent.tracker_uris {
            *taxonomy.tracker_counts.entry(tracker.clone()).or_default() += 1;
            *taxonomy.tracker_sizes.entry(tracker.clone()).or_default() += torrent.size_bytes;
        }
    }

    taxonomy
}

/// Where the starting taxonomy comes from.
pub enum TaxonomySource<'a> {
    /// A taxonomy or full feed message on disk.
    File(PathBuf),
    /// Derived from an already loaded torrent list.
    Records(&'a [Torrent]),
}

/// Builds a synchronizer from `source` and applies each patch file in order.
///
/// # Errors
///
/// Returns an input error for unreadable files and the [`PatchError`] of
/// the first feed message that does not apply.
///
/// [`PatchError`]: flood_filter_rs::taxonomy::PatchError
pub fn build_synchronizer(
    ctx: &CommandContext,
    source: TaxonomySource<'_>,
    patches: &[PathBuf],
) -> Result<TaxonomySynchronizer> {
    let mut sync = TaxonomySynchronizer::new();

    match source {
        TaxonomySource::File(path) => match load_feed(&path)? {
            TaxonomyEvent::Full { taxonomy } => sync.replace(taxonomy),
            TaxonomyEvent::Diff { .. } => {
                return Err(CommandError::input(
                    path,
                    "expected a full taxonomy, found a diff",
                ))
            }
        },
        TaxonomySource::Records(records) => sync.replace(taxonomy_from_records(records)),
    }

    for path in patches {
        if ctx.verbose {
            eprintln!("Applying {}", path.display());
        }
        sync.apply(load_feed(path)?)?;
    }

    Ok(sync)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_api_rs::models::TorrentStatus;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_records_array() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "torrents.json",
            r#"[
                {"hash": "b", "name": "zeta", "status": ["seeding"], "tags": ["hd"]},
                {"hash": "a", "name": "Alpha", "trackerURIs": ["t.example"], "sizeBytes": 10}
            ]"#,
        );

        let records = load_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hash, "a");
        assert_eq!(records[0].tracker_uris, vec!["t.example"]);
        assert_eq!(records[0].size_bytes, 10);
        assert_eq!(records[1].status, vec![TorrentStatus::Seeding]);
    }

    #[test]
    fn test_load_records_keyed_by_hash() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "torrents.json",
            r#"{"abc": {"name": "Sintel"}, "def": {"hash": "def", "name": "Tears"}}"#,
        );

        let records = load_records(&path).unwrap();

        assert_eq!(records[0].hash, "abc");
        assert_eq!(records[1].hash, "def");
    }

    #[test]
    fn test_load_records_rejects_scalar() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "torrents.json", "42");
        assert!(matches!(
            load_records(&path),
            Err(CommandError::Input { .. })
        ));
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/torrents.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }

    #[test]
    fn test_load_feed_shapes() {
        let dir = TempDir::new().unwrap();

        let diff = write(
            &dir,
            "diff.json",
            r#"[{"op": "add", "path": "/tagCounts/movies", "value": 1}]"#,
        );
        assert!(matches!(
            load_feed(&diff).unwrap(),
            TaxonomyEvent::Diff { operations } if operations.len() == 1
        ));

        let event = write(
            &dir,
            "event.json",
            r#"{"type": "diff", "operations": [{"op": "remove", "path": "/tagCounts/x"}]}"#,
        );
        assert!(matches!(load_feed(&event).unwrap(), TaxonomyEvent::Diff { .. }));

        let plain = write(&dir, "taxonomy.json", r#"{"tagCounts": {"movies": 2}}"#);
        let TaxonomyEvent::Full { taxonomy } = load_feed(&plain).unwrap() else {
            panic!("expected a full snapshot");
        };
        assert_eq!(taxonomy.tag_counts.get("movies"), Some(&2));
    }

    #[test]
    fn test_load_feed_rejects_malformed_event() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "event.json", r#"{"type": "merge"}"#);
        assert!(matches!(load_feed(&path), Err(CommandError::Input { .. })));
    }

    #[test]
    fn test_taxonomy_from_records_counts_untagged() {
        let mut a = Torrent::new("a", "A");
        a.size_bytes = 100;
        a.status = vec![TorrentStatus::Seeding];
        let mut b = Torrent::new("b", "B");
        b.size_bytes = 50;
        b.tags = vec!["hd".to_string()];
        b.tracker_uris = vec!["t.example".to_string()];

        let taxonomy = taxonomy_from_records(&[a, b]);

        assert_eq!(taxonomy.tag_counts.get(""), Some(&2));
        assert_eq!(taxonomy.tag_sizes.get(""), Some(&150));
        assert_eq!(taxonomy.tag_counts.get("untagged"), Some(&1));
        assert_eq!(taxonomy.tag_sizes.get("untagged"), Some(&100));
        assert_eq!(taxonomy.tag_counts.get("hd"), Some(&1));
        assert_eq!(taxonomy.tracker_sizes.get("t.example"), Some(&50));
        assert_eq!(taxonomy.status_counts.get("seeding"), Some(&1));
    }
}
