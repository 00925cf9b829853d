//! Filter engine for the Flood torrent list.
//!
//! Three parts, used in this order on every update:
//!
//! - [`taxonomy`]: keeps the server's tag, tracker and status aggregates in
//!   step with full snapshots and ordered patch batches
//! - [`selection`]: turns click gestures (with shift, toggle and exclude
//!   modifiers) into `{included, excluded}` key sets per dimension
//! - [`evaluator`]: decides whether a torrent is visible under the current
//!   selection and search text
//!
//! The taxonomy only feeds the selection engine its domain order. Records
//! never touch the taxonomy.

pub mod evaluator;
pub mod selection;
pub mod taxonomy;

pub use evaluator::{matches, FilterEvaluator, FilterableRecord};
pub use selection::{FilterEngine, FilterSnapshot, Gesture, Modifiers};
pub use taxonomy::{PatchError, TaxonomySynchronizer};
