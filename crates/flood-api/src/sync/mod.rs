//! Taxonomy feed models.
//!
//! The server pushes the torrent taxonomy either as a full snapshot or as an
//! ordered batch of JSON Patch operations against the previous snapshot.

mod feed;
mod taxonomy;

pub use feed::*;
pub use taxonomy::*;
