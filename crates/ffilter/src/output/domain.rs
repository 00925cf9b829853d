//! Domain listing output formatting.

use flood_api_rs::models::Dimension;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_size, truncate_str};

/// One row of a domain listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRow {
    /// Position in the domain; range gestures walk this order.
    pub position: usize,
    /// Key; empty for the aggregate row.
    pub key: String,
    pub count: u64,
    /// Total size, absent for statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// JSON output structure for the domain command.
#[derive(Serialize)]
struct DomainOutput<'a> {
    dimension: Dimension,
    keys: &'a [DomainRow],
}

/// Formats a domain as JSON.
pub fn format_domain_json(
    dimension: Dimension,
    rows: &[DomainRow],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&DomainOutput {
        dimension,
        keys: rows,
    })
}

/// Formats a domain as a table.
pub fn format_domain_table(dimension: Dimension, rows: &[DomainRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return format!("No {dimension} keys.\n");
    }

    let mut output = String::new();

    let header = format!("{:>3} {:<40} {:>7} {:>10}", "#", "Key", "Count", "Size");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for row in rows {
        let key = if row.key.is_empty() {
            let all = format!("{:<40}", "(all)");
            if use_colors {
                all.bold().to_string()
            } else {
                all
            }
        } else {
            format!("{:<40}", truncate_str(&row.key, 40))
        };
        let size = row.size.map(format_size).unwrap_or_default();

        output.push_str(&format!(
            "{:>3} {} {:>7} {:>10}\n",
            row.position, key, row.count, size
        ));
    }

    output
}
