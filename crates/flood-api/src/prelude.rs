//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the flood-api crate,
//! so consumers can import everything they need with a single use statement.
//!
//! # Example
//!
//! ```
//! use flood_api_rs::prelude::*;
//!
//! let status: TorrentStatus = "seeding".parse().unwrap();
//! assert_eq!(status, TorrentStatus::Seeding);
//! assert_eq!(Dimension::Tag.as_str(), "tag");
//! ```

// Record and key models
pub use crate::models::{
    Aggregate, Dimension, ParseDimensionError, ParseStatusError, Torrent, TorrentStatus,
    UNTAGGED_TAG,
};

// Taxonomy feed types
pub use crate::sync::{PatchOperation, Taxonomy, TaxonomyEvent, TaxonomySection};
