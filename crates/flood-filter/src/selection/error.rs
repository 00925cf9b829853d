//! Error types for selection input.

use flood_api_rs::models::{ParseDimensionError, ParseStatusError};
use thiserror::Error;

/// A specialized Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors that can occur while turning external input into a selection.
///
/// The selection algorithm itself never fails: every modifier combination is
/// defined, and stale keys are absorbed. These errors only come from
/// decoding text or loosely typed gestures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A status key that does not name a torrent status.
    #[error(transparent)]
    UnknownStatus(#[from] ParseStatusError),

    /// A dimension name that is not status, tag or tracker.
    #[error(transparent)]
    UnknownDimension(#[from] ParseDimensionError),

    /// A modifier name that is not recognized.
    #[error("unknown modifier: {name} (expected shift, toggle or exclude)")]
    UnknownModifier {
        /// The unrecognized modifier.
        name: String,
    },

    /// A gesture string that does not follow `[mods:]dimension=key`.
    #[error("invalid gesture '{input}': {reason}")]
    InvalidGesture {
        /// The full gesture text.
        input: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl SelectionError {
    /// Creates an unknown modifier error.
    pub fn unknown_modifier(name: impl Into<String>) -> Self {
        SelectionError::UnknownModifier { name: name.into() }
    }

    /// Creates an invalid gesture error.
    pub fn invalid_gesture(input: impl Into<String>, reason: &'static str) -> Self {
        SelectionError::InvalidGesture {
            input: input.into(),
            reason,
        }
    }
}
