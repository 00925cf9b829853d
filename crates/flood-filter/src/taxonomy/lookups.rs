//! Key lookups with fuzzy matching suggestions.

use strsim::levenshtein;

/// Maximum Levenshtein distance to consider a key as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the closest known key to `query`.
///
/// Returns `None` for an exact (case-insensitive) match, when nothing is
/// within the distance threshold, or when there are no candidates. The empty
/// aggregate key is never suggested.
pub fn find_similar_key<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|key| !key.is_empty())
        .map(|key| (key, levenshtein(&query_lower, &key.to_lowercase())))
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}
