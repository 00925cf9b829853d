//! Torrent list output formatting.

use flood_api_rs::models::{Torrent, UNTAGGED_TAG};
use flood_filter_rs::selection::FilterSnapshot;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_filter_summary, format_size, truncate_id, truncate_str};

/// JSON output structure for the eval command.
#[derive(Serialize)]
pub struct EvalOutput<'a> {
    pub filter: &'a FilterSnapshot,
    pub active: bool,
    pub total: usize,
    pub matched: usize,
    pub torrents: &'a [&'a Torrent],
}

/// Formats an evaluation result as JSON.
///
/// `torrents` is the (possibly limited) visible list; `matched` counts every
/// torrent that passed the filter.
pub fn format_eval_json(
    snapshot: &FilterSnapshot,
    torrents: &[&Torrent],
    matched: usize,
    total: usize,
) -> Result<String, serde_json::Error> {
    let output = EvalOutput {
        filter: snapshot,
        active: snapshot.is_active(),
        total,
        matched,
        torrents,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the visible torrents as a table, followed by the active filters.
pub fn format_eval_table(
    snapshot: &FilterSnapshot,
    torrents: &[&Torrent],
    matched: usize,
    total: usize,
    use_colors: bool,
) -> String {
    let mut output = format_torrents_table(torrents, use_colors);

    let footer = if torrents.len() < matched {
        format!("\nShowing {} of {} matching ({} total)", torrents.len(), matched, total)
    } else {
        format!("\n{} of {} torrents", matched, total)
    };
    if use_colors {
        output.push_str(&format!("{}\n", footer.dimmed()));
    } else {
        output.push_str(&footer);
        output.push('\n');
    }

    output.push_str(&format_filter_summary(snapshot, use_colors));
    output
}

/// Formats torrents as a table.
pub fn format_torrents_table(torrents: &[&Torrent], use_colors: bool) -> String {
    if torrents.is_empty() {
        return "No torrents match.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!(
        "{:<8} {:<36} {:<22} {:<20} {:>10}",
        "Hash", "Name", "Status", "Tags", "Size"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for torrent in torrents {
        let status = torrent
            .status
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let tags = if torrent.tags.is_empty() {
            let untagged = format!("({UNTAGGED_TAG})");
            if use_colors {
                format!("{:<20}", untagged).dimmed().to_string()
            } else {
                format!("{:<20}", untagged)
            }
        } else {
            format!("{:<20}", truncate_str(&torrent.tags.join(", "), 20))
        };

        let line = format!(
            "{:<8} {:<36} {:<22} {} {:>10}",
            truncate_id(&torrent.hash),
            truncate_str(&torrent.name, 36),
            truncate_str(&status, 22),
            tags,
            format_size(torrent.size_bytes)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
