//! Gesture input: a key (or "All") plus modifier flags.

use std::fmt;
use std::str::FromStr;

use flood_api_rs::models::Dimension;
use serde::{Deserialize, Serialize};

use super::error::{SelectionError, SelectionResult};
use super::pair::KeyState;

/// Modifier flags held during a selection gesture.
///
/// How physical keys map onto these flags is up to the caller; the usual
/// binding is Shift for `shift`, Ctrl/Cmd for `toggle` and Alt for `exclude`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Extend a range from the anchor.
    pub shift: bool,
    /// Add or remove one key without touching the rest.
    pub toggle: bool,
    /// Mark keys as excluded instead of included.
    pub exclude: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        toggle: false,
        exclude: false,
    };

    /// Returns a copy with `shift` set.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Returns a copy with `toggle` set.
    pub fn with_toggle(mut self) -> Self {
        self.toggle = true;
        self
    }

    /// Returns a copy with `exclude` set.
    pub fn with_exclude(mut self) -> Self {
        self.exclude = true;
        self
    }

    /// State a newly selected key is put into.
    pub(crate) fn target_state(&self) -> KeyState {
        if self.exclude {
            KeyState::Excluded
        } else {
            KeyState::Included
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.shift, "shift"),
            (self.toggle, "toggle"),
            (self.exclude, "exclude"),
        ]
        .into_iter()
        .filter_map(|(held, name)| held.then_some(name))
        .collect();
        f.write_str(&names.join("+"))
    }
}

impl FromStr for Modifiers {
    type Err = SelectionError;

    /// Parses `+`-separated modifier names. `ctrl`, `meta` and `cmd` are
    /// aliases for `toggle`; `alt` is an alias for `exclude`.
    fn from_str(s: &str) -> SelectionResult<Self> {
        let mut modifiers = Modifiers::NONE;
        for name in s.split('+').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "toggle" | "ctrl" | "meta" | "cmd" => modifiers.toggle = true,
                "exclude" | "alt" => modifiers.exclude = true,
                _ => return Err(SelectionError::unknown_modifier(name)),
            }
        }
        Ok(modifiers)
    }
}

/// One selection gesture against one dimension.
///
/// A `key` of `None` is the "All" entry of a filter list.
///
/// # Text form
///
/// `[modifiers:]dimension=key`, where an empty key or `*` means "All":
///
/// ```
/// use flood_filter_rs::selection::{Gesture, Modifiers};
/// use flood_api_rs::models::Dimension;
///
/// let gesture: Gesture = "shift+alt:tag=movies".parse().unwrap();
/// assert_eq!(gesture.dimension, Dimension::Tag);
/// assert_eq!(gesture.key.as_deref(), Some("movies"));
/// assert_eq!(gesture.modifiers, Modifiers::NONE.with_shift().with_exclude());
///
/// let all: Gesture = "status=*".parse().unwrap();
/// assert!(all.key.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    /// Dimension the gesture acts on.
    pub dimension: Dimension,
    /// Key acted on, or `None` for "All".
    #[serde(default)]
    pub key: Option<String>,
    /// Modifiers held.
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Gesture {
    /// Creates a gesture on a key.
    pub fn new(dimension: Dimension, key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            dimension,
            key: Some(key.into()),
            modifiers,
        }
    }

    /// Creates a click on the "All" entry of a dimension.
    pub fn all(dimension: Dimension) -> Self {
        Self {
            dimension,
            key: None,
            modifiers: Modifiers::NONE,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifiers = self.modifiers.to_string();
        if !modifiers.is_empty() {
            write!(f, "{modifiers}:")?;
        }
        write!(
            f,
            "{}={}",
            self.dimension,
            self.key.as_deref().unwrap_or("*")
        )
    }
}

impl FromStr for Gesture {
    type Err = SelectionError;

    fn from_str(s: &str) -> SelectionResult<Self> {
        let (head, key) = s
            .split_once('=')
            .ok_or_else(|| SelectionError::invalid_gesture(s, "expected 'dimension=key'"))?;

        let (modifiers, dimension) = match head.rsplit_once(':') {
            Some((modifiers, dimension)) => (modifiers.parse::<Modifiers>()?, dimension),
            None => (Modifiers::NONE, head),
        };

        if dimension.trim().is_empty() {
            return Err(SelectionError::invalid_gesture(s, "missing dimension"));
        }

        let key = match key {
            "" | "*" => None,
            other => Some(other.to_string()),
        };

        Ok(Self {
            dimension: dimension.parse()?,
            key,
            modifiers,
        })
    }
}
