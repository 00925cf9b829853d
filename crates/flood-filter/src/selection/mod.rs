//! Filter selection state driven by pointer and keyboard gestures.
//!
//! Each dimension (status, tag, tracker) keeps a pair of disjoint
//! `{included, excluded}` sets and an anchor key. A gesture is a key plus
//! [`Modifiers`]:
//!
//! | modifiers          | effect                                                     |
//! |--------------------|------------------------------------------------------------|
//! | none               | select only this key, re-anchor                            |
//! | `toggle`           | flip this key, re-anchor                                   |
//! | `shift`            | select the range anchor..=key, anchor stays                |
//! | `shift` + `toggle` | paint the anchor's membership over anchor..=key            |
//! | `exclude`          | any of the above, but new keys go to the excluded set      |
//!
//! Selecting "All" (`None`) empties both sets regardless of modifiers.

mod engine;
mod error;
mod gesture;
mod pair;

pub use engine::{FilterEngine, FilterSnapshot};
pub use error::{SelectionError, SelectionResult};
pub use gesture::{Gesture, Modifiers};
pub use pair::{DimensionSelection, KeyState, SelectOutcome, SelectionKey, SelectionPair};

#[cfg(test)]
mod tests;
