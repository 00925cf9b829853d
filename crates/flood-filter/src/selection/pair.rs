//! Per-dimension selection state and the gesture algorithm.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use flood_api_rs::models::TorrentStatus;
use serde::Serialize;

use super::gesture::Modifiers;

/// A key type a dimension can be filtered by.
pub trait SelectionKey: Ord + Clone {
    /// Returns true for the key that stands for the "All" row of a filter list.
    ///
    /// Such a key can sit in a domain (it keeps positions aligned with what
    /// the user sees) but is never written into a selection set.
    fn is_all(&self) -> bool {
        false
    }
}

impl SelectionKey for String {
    fn is_all(&self) -> bool {
        self.is_empty()
    }
}

impl SelectionKey for TorrentStatus {}

/// Membership of one key in a [`SelectionPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Included,
    Excluded,
    Unselected,
}

/// The `{included, excluded}` sets of one dimension.
///
/// A key is in at most one of the two sets. Both empty means the dimension
/// does not constrain anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPair<K: Ord> {
    included: BTreeSet<K>,
    excluded: BTreeSet<K>,
}

impl<K: Ord> Default for SelectionPair<K> {
    fn default() -> Self {
        Self {
            included: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }
}

impl<K: Ord> SelectionPair<K> {
    /// Creates an empty pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys a record must match at least one of.
    pub fn included(&self) -> &BTreeSet<K> {
        &self.included
    }

    /// Keys a record must match none of.
    pub fn excluded(&self) -> &BTreeSet<K> {
        &self.excluded
    }

    /// Returns true if neither set holds anything.
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Returns which set, if any, holds `key`.
    pub fn state_of<Q>(&self, key: &Q) -> KeyState
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.included.contains(key) {
            KeyState::Included
        } else if self.excluded.contains(key) {
            KeyState::Excluded
        } else {
            KeyState::Unselected
        }
    }

    /// Moves `key` into the set named by `state`, removing it from the other.
    pub fn set(&mut self, key: K, state: KeyState) {
        match state {
            KeyState::Included => {
                self.excluded.remove(&key);
                self.included.insert(key);
            }
            KeyState::Excluded => {
                self.included.remove(&key);
                self.excluded.insert(key);
            }
            KeyState::Unselected => {
                self.included.remove(&key);
                self.excluded.remove(&key);
            }
        }
    }

    /// Empties both sets.
    pub fn clear(&mut self) {
        self.included.clear();
        self.excluded.clear();
    }
}

/// What a call to [`DimensionSelection::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// "All" was selected; both sets were emptied.
    Cleared,
    /// Both sets were replaced by the single key.
    Replaced,
    /// One key was toggled; `selected` is its new membership.
    Toggled { selected: bool },
    /// A range was applied over `visited` domain positions.
    Ranged { visited: usize },
    /// The key or the anchor is not in the domain; nothing changed.
    Ignored,
}

/// Selection state of one dimension: the pair plus the range anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionSelection<K: Ord> {
    pair: SelectionPair<K>,
    anchor: Option<K>,
}

impl<K: Ord> Default for DimensionSelection<K> {
    fn default() -> Self {
        Self {
            pair: SelectionPair::new(),
            anchor: None,
        }
    }
}

impl<K: SelectionKey> DimensionSelection<K> {
    /// Creates an empty selection with no anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `{included, excluded}` pair.
    pub fn pair(&self) -> &SelectionPair<K> {
        &self.pair
    }

    /// The key the next range gesture extends from.
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    /// Empties the pair and forgets the anchor.
    pub fn clear(&mut self) {
        self.pair.clear();
        self.anchor = None;
    }

    /// Applies one gesture.
    ///
    /// `domain` is the dimension's ordered key list. It is only consulted for
    /// range gestures, so callers may pass an empty slice otherwise.
    ///
    /// - `None` (or the "All" key) empties both sets, whatever the modifiers.
    /// - `shift` extends a range from the anchor (or from the first domain
    ///   position when there is no anchor). With `toggle` the anchor's
    ///   current membership is painted over the range; without it the range
    ///   replaces the selection. The anchor does not move.
    /// - `toggle` alone flips one key and re-anchors.
    /// - No modifier replaces the selection with the key and re-anchors.
    ///
    /// `exclude` sends newly selected keys to the excluded set.
    pub fn select(&mut self, key: Option<&K>, modifiers: Modifiers, domain: &[K]) -> SelectOutcome {
        let Some(key) = key.filter(|key| !key.is_all()) else {
            self.pair.clear();
            return SelectOutcome::Cleared;
        };

        if modifiers.shift {
            return self.select_range(key, modifiers, domain);
        }

        if modifiers.toggle {
            let selected = match self.pair.state_of(key) {
                KeyState::Unselected => {
                    self.pair.set(key.clone(), modifiers.target_state());
                    true
                }
                KeyState::Included | KeyState::Excluded => {
                    self.pair.set(key.clone(), KeyState::Unselected);
                    false
                }
            };
            self.anchor = Some(key.clone());
            return SelectOutcome::Toggled { selected };
        }

        self.pair.clear();
        self.pair.set(key.clone(), modifiers.target_state());
        self.anchor = Some(key.clone());
        SelectOutcome::Replaced
    }

    fn select_range(&mut self, key: &K, modifiers: Modifiers, domain: &[K]) -> SelectOutcome {
        let anchor_position = match &self.anchor {
            Some(anchor) => domain.iter().position(|k| k == anchor),
            None => (!domain.is_empty()).then_some(0),
        };
        let key_position = domain.iter().position(|k| k == key);

        let (Some(from), Some(to)) = (anchor_position, key_position) else {
            return SelectOutcome::Ignored;
        };

        let visited = &domain[from.min(to)..=from.max(to)];
        let state = if modifiers.toggle {
            self.pair.state_of(&domain[from])
        } else {
            self.pair.clear();
            modifiers.target_state()
        };

        for k in visited.iter().filter(|k| !k.is_all()) {
            self.pair.set(k.clone(), state);
        }

        SelectOutcome::Ranged {
            visited: visited.len(),
        }
    }
}
