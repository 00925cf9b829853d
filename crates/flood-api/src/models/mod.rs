//! Data types shared by the Flood server and client.
//!
//! This module provides type-safe models for the keys a torrent can be filtered
//! by and for the torrent records themselves.

mod common;
mod status;
mod torrent;

pub use common::*;
pub use status::*;
pub use torrent::*;
