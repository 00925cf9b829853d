//! Common helper functions for output formatting.

use flood_filter_rs::selection::{FilterSnapshot, SelectionPair};
use owo_colors::OwoColorize;

/// Size units, 1024 apart.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Truncates an ID to 8 characters for display.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a byte count, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

/// Renders a pair as `+a +b -c`.
fn format_pair<K: Ord>(pair: &SelectionPair<K>, render: impl Fn(&K) -> String) -> String {
    pair.included()
        .iter()
        .map(|k| format!("+{}", render(k)))
        .chain(pair.excluded().iter().map(|k| format!("-{}", render(k))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per active constraint, e.g. `tag: +movies -hd`.
pub fn format_filter_summary(snapshot: &FilterSnapshot, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if !snapshot.status_filter.is_empty() {
        lines.push((
            "status",
            format_pair(&snapshot.status_filter, |s| s.as_str().to_string()),
        ));
    }
    if !snapshot.tag_filter.is_empty() {
        lines.push(("tag", format_pair(&snapshot.tag_filter, String::clone)));
    }
    if !snapshot.tracker_filter.is_empty() {
        lines.push(("tracker", format_pair(&snapshot.tracker_filter, String::clone)));
    }
    if !snapshot.search_filter.is_empty() {
        lines.push(("search", format!("{:?}", snapshot.search_filter)));
    }

    let mut output = String::new();
    for (label, value) in lines {
        let label = format!("{label}:");
        if use_colors {
            output.push_str(&format!("  {:<9}{}\n", label.dimmed(), value.cyan()));
        } else {
            output.push_str(&format!("  {:<9}{}\n", label, value));
        }
    }
    output
}
