//! Wire models for the Flood torrent filter engine
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use flood_api_rs::prelude::*;
//! ```
//!
//! This re-exports the record model ([`Torrent`](models::Torrent)), the closed
//! status enumeration, the taxonomy structure and the taxonomy feed messages.

pub mod models;
pub mod prelude;
pub mod sync;
