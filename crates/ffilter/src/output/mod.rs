//! Output formatting utilities for the ffilter CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`torrents`] - Visible torrent list and active filters (eval)
//! - [`domain`] - Ordered keys of a dimension with their aggregates
//! - [`helpers`] - Common formatting utilities (truncation, sizes, filter summary)

mod domain;
pub mod helpers;
mod torrents;

pub use domain::{format_domain_json, format_domain_table, DomainRow};
pub use torrents::{format_eval_json, format_eval_table};
