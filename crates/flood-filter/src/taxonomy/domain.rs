//! Domain ordering for the key-based dimensions.
//!
//! The filter lists show tag and tracker keys sorted by name with the
//! aggregate row (the empty key) on top. The tag list additionally pins
//! `untagged` directly below the aggregate row. Range selection walks keys in
//! this same order.

use std::cmp::Ordering;

use flood_api_rs::models::{Dimension, TorrentStatus, UNTAGGED_TAG};
use flood_api_rs::sync::Taxonomy;

/// Position `untagged` is pinned to in the tag domain.
const UNTAGGED_POSITION: usize = 1;

/// Compares two keys the way the filter lists sort them.
///
/// Case-insensitive first; keys equal under case folding are ordered by raw
/// bytes so the order is total.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns the ordered domain of a key-based dimension.
///
/// For [`Dimension::Status`] this is the canonical status order, independent
/// of the taxonomy.
pub fn ordered_keys(taxonomy: &Taxonomy, dimension: Dimension) -> Vec<String> {
    if dimension == Dimension::Status {
        return TorrentStatus::ALL
            .iter()
            .map(|status| status.as_str().to_string())
            .collect();
    }

    let mut keys: Vec<String> = taxonomy.counts(dimension).keys().cloned().collect();
    keys.sort_by(|a, b| compare_keys(a, b));

    if dimension == Dimension::Tag {
        pin_untagged(&mut keys);
    }

    keys
}

fn pin_untagged(keys: &mut Vec<String>) {
    let Some(index) = keys.iter().position(|key| key == UNTAGGED_TAG) else {
        return;
    };
    let untagged = keys.remove(index);
    let position = UNTAGGED_POSITION.min(keys.len());
    keys.insert(position, untagged);
}
