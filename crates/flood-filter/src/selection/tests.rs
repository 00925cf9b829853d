//! Tests for the selection algorithm and the filter engine.

use super::*;
use flood_api_rs::models::{Dimension, TorrentStatus};
use flood_api_rs::sync::Taxonomy;

// ==================== Test Helpers ====================

fn domain(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn key(k: &str) -> String {
    k.to_string()
}

fn included(selection: &DimensionSelection<String>) -> Vec<&str> {
    selection
        .pair()
        .included()
        .iter()
        .map(String::as_str)
        .collect()
}

fn excluded(selection: &DimensionSelection<String>) -> Vec<&str> {
    selection
        .pair()
        .excluded()
        .iter()
        .map(String::as_str)
        .collect()
}

fn taxonomy_with_tags(tags: &[&str]) -> Taxonomy {
    let mut taxonomy = Taxonomy::new();
    for tag in tags {
        taxonomy.tag_counts.insert(tag.to_string(), 1);
    }
    taxonomy
}

fn assert_disjoint(selection: &DimensionSelection<String>) {
    let pair = selection.pair();
    assert!(
        pair.included().is_disjoint(pair.excluded()),
        "included {:?} overlaps excluded {:?}",
        pair.included(),
        pair.excluded()
    );
}

const NONE: Modifiers = Modifiers::NONE;

// ==================== All Sentinel ====================

#[test]
fn test_all_clears_both_sets_regardless_of_modifiers() {
    let d = domain(&["a", "b"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE, &d);
    selection.select(Some(&key("b")), NONE.with_toggle().with_exclude(), &d);

    let outcome = selection.select(None, NONE.with_shift().with_toggle().with_exclude(), &d);

    assert_eq!(outcome, SelectOutcome::Cleared);
    assert!(selection.pair().is_empty());
}

#[test]
fn test_empty_string_key_is_all() {
    let d = domain(&["", "a"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE, &d);

    assert_eq!(selection.select(Some(&key("")), NONE, &d), SelectOutcome::Cleared);
    assert!(selection.pair().is_empty());
}

// ==================== Plain Select ====================

#[test]
fn test_plain_select_replaces_selection() {
    let d = domain(&["a", "b", "c"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE.with_toggle(), &d);
    selection.select(Some(&key("b")), NONE.with_toggle().with_exclude(), &d);

    let outcome = selection.select(Some(&key("c")), NONE, &d);

    assert_eq!(outcome, SelectOutcome::Replaced);
    assert_eq!(included(&selection), vec!["c"]);
    assert!(excluded(&selection).is_empty());
    assert_eq!(selection.anchor(), Some(&key("c")));
}

#[test]
fn test_plain_select_with_exclude() {
    let d = domain(&["a"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE.with_exclude(), &d);

    assert!(included(&selection).is_empty());
    assert_eq!(excluded(&selection), vec!["a"]);
}

#[test]
fn test_plain_select_is_idempotent() {
    let d = domain(&["a", "b"]);
    let mut once = DimensionSelection::new();
    once.select(Some(&key("b")), NONE, &d);

    let mut twice = once.clone();
    twice.select(Some(&key("b")), NONE, &d);

    assert_eq!(once, twice);
}

#[test]
fn test_plain_select_accepts_key_outside_domain() {
    let d = domain(&["a"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("stale")), NONE, &d);

    assert_eq!(included(&selection), vec!["stale"]);
    assert_eq!(selection.anchor(), Some(&key("stale")));
}

// ==================== Toggle Select ====================

#[test]
fn test_toggle_adds_without_touching_others() {
    let d = domain(&["a", "b"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE, &d);

    let outcome = selection.select(Some(&key("b")), NONE.with_toggle(), &d);

    assert_eq!(outcome, SelectOutcome::Toggled { selected: true });
    assert_eq!(included(&selection), vec!["a", "b"]);
    assert_eq!(selection.anchor(), Some(&key("b")));
}

#[test]
fn test_toggle_twice_returns_to_unselected() {
    let d = domain(&["a"]);
    let mut selection = DimensionSelection::new();

    selection.select(Some(&key("a")), NONE.with_toggle(), &d);
    let outcome = selection.select(Some(&key("a")), NONE.with_toggle(), &d);

    assert_eq!(outcome, SelectOutcome::Toggled { selected: false });
    assert_eq!(selection.pair().state_of("a"), KeyState::Unselected);
}

#[test]
fn test_toggle_unselects_from_either_set() {
    let d = domain(&["a"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE.with_exclude(), &d);

    // Toggling without exclude still removes an excluded key.
    selection.select(Some(&key("a")), NONE.with_toggle(), &d);

    assert!(selection.pair().is_empty());
}

#[test]
fn test_toggle_with_exclude_adds_to_excluded() {
    let d = domain(&["a", "b"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("a")), NONE, &d);
    selection.select(Some(&key("b")), NONE.with_toggle().with_exclude(), &d);

    assert_eq!(included(&selection), vec!["a"]);
    assert_eq!(excluded(&selection), vec!["b"]);
}

// ==================== Range Select ====================

#[test]
fn test_range_is_inclusive_and_clears_unrelated_keys() {
    let d = domain(&["A", "B", "C", "D", "E"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("E")), NONE.with_toggle(), &d);
    selection.select(Some(&key("B")), NONE.with_toggle(), &d);

    let outcome = selection.select(Some(&key("D")), NONE.with_shift(), &d);

    assert_eq!(outcome, SelectOutcome::Ranged { visited: 3 });
    assert_eq!(included(&selection), vec!["B", "C", "D"]);
    assert!(excluded(&selection).is_empty());
}

#[test]
fn test_range_backwards() {
    let d = domain(&["A", "B", "C", "D", "E"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("D")), NONE, &d);
    selection.select(Some(&key("B")), NONE.with_shift(), &d);

    assert_eq!(included(&selection), vec!["B", "C", "D"]);
}

#[test]
fn test_range_does_not_move_anchor() {
    let d = domain(&["A", "B", "C", "D", "E"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("B")), NONE, &d);
    selection.select(Some(&key("E")), NONE.with_shift(), &d);
    selection.select(Some(&key("C")), NONE.with_shift(), &d);

    assert_eq!(selection.anchor(), Some(&key("B")));
    assert_eq!(included(&selection), vec!["B", "C"]);
}

#[test]
fn test_range_without_anchor_starts_at_first_position() {
    let d = domain(&["A", "B", "C"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("B")), NONE.with_shift(), &d);

    assert_eq!(included(&selection), vec!["A", "B"]);
    assert_eq!(selection.anchor(), None);
}

#[test]
fn test_range_skips_all_row() {
    let d = domain(&["", "untagged", "movies"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("movies")), NONE.with_shift(), &d);

    assert_eq!(included(&selection), vec!["movies", "untagged"]);
}

#[test]
fn test_range_with_exclude() {
    let d = domain(&["A", "B", "C"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("A")), NONE, &d);
    selection.select(Some(&key("C")), NONE.with_shift().with_exclude(), &d);

    assert!(included(&selection).is_empty());
    assert_eq!(excluded(&selection), vec!["A", "B", "C"]);
}

#[test]
fn test_range_with_stale_key_is_no_op() {
    let d = domain(&["A", "B"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("A")), NONE, &d);
    let before = selection.clone();

    let outcome = selection.select(Some(&key("Z")), NONE.with_shift(), &d);

    assert_eq!(outcome, SelectOutcome::Ignored);
    assert_eq!(selection, before);
}

#[test]
fn test_range_with_stale_anchor_is_no_op() {
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("Z")), NONE, &domain(&["Z", "A", "B"]));
    let before = selection.clone();

    // Z disappeared from the taxonomy.
    let outcome = selection.select(Some(&key("B")), NONE.with_shift(), &domain(&["A", "B"]));

    assert_eq!(outcome, SelectOutcome::Ignored);
    assert_eq!(selection, before);
}

#[test]
fn test_range_on_empty_domain_is_no_op() {
    let mut selection: DimensionSelection<String> = DimensionSelection::new();
    let outcome = selection.select(Some(&key("A")), NONE.with_shift(), &[]);
    assert_eq!(outcome, SelectOutcome::Ignored);
    assert!(selection.pair().is_empty());
}

#[test]
fn test_stale_anchor_recovers_after_reanchor() {
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("Z")), NONE, &[]);
    let d = domain(&["A", "B", "C"]);

    assert_eq!(
        selection.select(Some(&key("C")), NONE.with_shift(), &d),
        SelectOutcome::Ignored
    );

    selection.select(Some(&key("A")), NONE.with_toggle(), &d);
    selection.select(Some(&key("C")), NONE.with_shift(), &d);
    assert_eq!(included(&selection), vec!["A", "B", "C"]);
}

// ==================== Range Toggle (paint) ====================

#[test]
fn test_range_toggle_paints_included_anchor() {
    let d = domain(&["A", "B", "C", "D"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("D")), NONE.with_toggle().with_exclude(), &d);
    selection.select(Some(&key("A")), NONE.with_toggle(), &d);

    selection.select(Some(&key("C")), NONE.with_shift().with_toggle(), &d);

    // D is outside the range and keeps its state.
    assert_eq!(included(&selection), vec!["A", "B", "C"]);
    assert_eq!(excluded(&selection), vec!["D"]);
}

#[test]
fn test_range_toggle_paints_unselected_anchor() {
    let d = domain(&["A", "B", "C", "D"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("B")), NONE, &d);
    selection.select(Some(&key("C")), NONE.with_toggle(), &d);
    selection.select(Some(&key("D")), NONE.with_toggle(), &d);
    // Toggle A on and off again: A is the anchor and is unselected.
    selection.select(Some(&key("A")), NONE.with_toggle(), &d);
    selection.select(Some(&key("A")), NONE.with_toggle(), &d);

    selection.select(Some(&key("C")), NONE.with_shift().with_toggle(), &d);

    assert_eq!(included(&selection), vec!["D"]);
}

#[test]
fn test_range_toggle_paints_excluded_anchor() {
    let d = domain(&["A", "B", "C"]);
    let mut selection = DimensionSelection::new();
    selection.select(Some(&key("C")), NONE.with_toggle(), &d);
    selection.select(Some(&key("A")), NONE.with_toggle().with_exclude(), &d);

    selection.select(Some(&key("C")), NONE.with_shift().with_toggle(), &d);

    assert!(included(&selection).is_empty());
    assert_eq!(excluded(&selection), vec!["A", "B", "C"]);
    assert_disjoint(&selection);
}

// ==================== Invariants ====================

#[test]
fn test_disjointness_holds_over_mixed_sequence() {
    let d = domain(&["", "A", "B", "C", "D", "E"]);
    let keys = ["A", "C", "E", "B", "D", "A", "E"];
    let modifier_sets = [
        NONE,
        NONE.with_exclude(),
        NONE.with_toggle(),
        NONE.with_toggle().with_exclude(),
        NONE.with_shift(),
        NONE.with_shift().with_exclude(),
        NONE.with_shift().with_toggle(),
        NONE.with_shift().with_toggle().with_exclude(),
    ];

    let mut selection = DimensionSelection::new();
    for (i, k) in keys.iter().cycle().take(40).enumerate() {
        let modifiers = modifier_sets[i % modifier_sets.len()];
        selection.select(Some(&key(k)), modifiers, &d);
        assert_disjoint(&selection);
        assert!(!selection.pair().included().contains(""));
    }
}

#[test]
fn test_pair_set_moves_between_sets() {
    let mut pair = SelectionPair::new();
    pair.set(key("a"), KeyState::Included);
    pair.set(key("a"), KeyState::Excluded);

    assert!(pair.included().is_empty());
    assert_eq!(pair.state_of("a"), KeyState::Excluded);
}

// ==================== Engine ====================

#[test]
fn test_engine_status_range_uses_canonical_order() {
    let mut engine = FilterEngine::new();
    engine.select_status(Some(TorrentStatus::Seeding), NONE);
    engine.select_status(Some(TorrentStatus::Stopped), NONE.with_shift());

    let statuses: Vec<TorrentStatus> = engine.status_filter().included().iter().copied().collect();
    assert_eq!(
        statuses,
        vec![
            TorrentStatus::Seeding,
            TorrentStatus::Complete,
            TorrentStatus::Downloading,
            TorrentStatus::Stopped
        ]
    );
}

#[test]
fn test_engine_tag_range_uses_pinned_untagged() {
    let taxonomy = taxonomy_with_tags(&["", "alpha", "beta", "untagged"]);
    let mut engine = FilterEngine::new();
    engine.select_tag(Some("untagged"), NONE, &taxonomy);
    engine.select_tag(Some("alpha"), NONE.with_shift(), &taxonomy);

    let tags: Vec<&str> = engine.tag_filter().included().iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["alpha", "untagged"]);
}

#[test]
fn test_engine_tracker_range_after_taxonomy_change() {
    let mut taxonomy = Taxonomy::new();
    for tracker in ["a.example", "b.example", "c.example"] {
        taxonomy.tracker_counts.insert(tracker.to_string(), 1);
    }

    let mut engine = FilterEngine::new();
    engine.select_tracker(Some("b.example"), NONE, &taxonomy);

    taxonomy.tracker_counts.remove("b.example");
    let outcome = engine.select_tracker(Some("c.example"), NONE.with_shift(), &taxonomy);

    assert_eq!(outcome, SelectOutcome::Ignored);
    assert_eq!(engine.anchor(Dimension::Tracker).as_deref(), Some("b.example"));
}

#[test]
fn test_engine_dimensions_are_independent() {
    let taxonomy = taxonomy_with_tags(&["movies"]);
    let mut engine = FilterEngine::new();
    engine.select_tag(Some("movies"), NONE, &taxonomy);
    engine.select_status(Some(TorrentStatus::Error), NONE.with_exclude());
    engine.select_tracker(None, NONE, &taxonomy);

    assert_eq!(engine.tag_filter().included().len(), 1);
    assert_eq!(engine.status_filter().excluded().len(), 1);
    assert!(engine.tracker_filter().is_empty());
}

#[test]
fn test_engine_select_gesture() {
    let taxonomy = taxonomy_with_tags(&["a", "b"]);
    let mut engine = FilterEngine::new();

    engine
        .select(&"status=seeding".parse().unwrap(), &taxonomy)
        .unwrap();
    engine
        .select(&"shift:tag=b".parse().unwrap(), &taxonomy)
        .unwrap();

    assert_eq!(engine.status_filter().state_of(&TorrentStatus::Seeding), KeyState::Included);
    assert_eq!(engine.tag_filter().included().len(), 2);
}

#[test]
fn test_engine_select_gesture_rejects_unknown_status() {
    let mut engine = FilterEngine::new();
    let gesture = Gesture::new(Dimension::Status, "paused", NONE);

    let err = engine.select(&gesture, &Taxonomy::new()).unwrap_err();

    assert!(matches!(err, SelectionError::UnknownStatus(_)));
    assert!(!engine.is_filter_active());
}

#[test]
fn test_engine_select_all_gesture_on_status() {
    let mut engine = FilterEngine::new();
    engine.select_status(Some(TorrentStatus::Active), NONE);
    engine
        .select(&Gesture::all(Dimension::Status), &Taxonomy::new())
        .unwrap();
    assert!(engine.status_filter().is_empty());
}

#[test]
fn test_engine_search_activates_filter() {
    let mut engine = FilterEngine::new();
    assert!(!engine.is_filter_active());

    engine.set_search_filter("ubuntu");
    assert!(engine.is_filter_active());
    assert_eq!(engine.search_filter(), "ubuntu");

    engine.set_search_filter("");
    assert!(!engine.is_filter_active());
}

#[test]
fn test_engine_clear_all_resets_everything() {
    let taxonomy = taxonomy_with_tags(&["a", "b"]);
    let mut engine = FilterEngine::new();
    engine.select_tag(Some("a"), NONE, &taxonomy);
    engine.select_tracker(Some("t"), NONE.with_exclude(), &taxonomy);
    engine.select_status(Some(TorrentStatus::Checking), NONE.with_toggle());
    engine.set_search_filter("x");

    engine.clear_all_filters();

    assert!(!engine.is_filter_active());
    assert!(engine.status_filter().is_empty());
    assert!(engine.tag_filter().is_empty());
    assert!(engine.tracker_filter().is_empty());
    assert_eq!(engine.search_filter(), "");
    for dimension in Dimension::ALL {
        assert_eq!(engine.anchor(dimension), None);
    }
}

#[test]
fn test_engine_snapshot_serializes_pairs() {
    let taxonomy = taxonomy_with_tags(&["hd"]);
    let mut engine = FilterEngine::new();
    engine.select_tag(Some("hd"), NONE.with_exclude(), &taxonomy);
    engine.set_search_filter("linux");

    let snapshot = engine.snapshot();
    assert!(snapshot.is_active());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["searchFilter"], "linux");
    assert_eq!(json["tagFilter"]["excluded"][0], "hd");
    assert_eq!(json["statusFilter"]["included"].as_array().unwrap().len(), 0);
}
