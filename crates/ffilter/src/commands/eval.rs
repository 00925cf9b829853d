//! Eval command implementation.
//!
//! Replays gestures against a torrent list and prints what stays visible.

use std::path::PathBuf;

use flood_api_rs::models::{Dimension, Torrent};
use flood_filter_rs::selection::{FilterEngine, Gesture};
use flood_filter_rs::taxonomy::TaxonomySynchronizer;

use super::loader::{build_synchronizer, load_records, TaxonomySource};
use super::{CommandContext, CommandError, Result};
use crate::output::{format_eval_json, format_eval_table};

/// Options for the eval command.
#[derive(Debug, Default)]
pub struct EvalOptions {
    /// Torrent list file (falls back to the config's `data.records`).
    pub records: Option<PathBuf>,
    /// Taxonomy file (falls back to `data.taxonomy`, then to the records).
    pub taxonomy: Option<PathBuf>,
    /// Feed messages applied after the taxonomy is loaded.
    pub patches: Vec<PathBuf>,
    /// Gestures in text form, applied in order.
    pub gestures: Vec<String>,
    /// Search text.
    pub search: Option<String>,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the eval command.
///
/// # Errors
///
/// Returns an error if an input file cannot be loaded, a feed message does
/// not apply, or a gesture is malformed.
pub fn execute(ctx: &CommandContext, opts: &EvalOptions) -> Result<()> {
    let records_path = opts
        .records
        .clone()
        .or_else(|| ctx.config.data.records.clone())
        .ok_or_else(|| {
            CommandError::Config(
                "no torrent list given (use --records or set data.records)".to_string(),
            )
        })?;
    let records = load_records(&records_path)?;

    let source = match opts.taxonomy.clone().or_else(|| ctx.config.data.taxonomy.clone()) {
        Some(path) => TaxonomySource::File(path),
        None => TaxonomySource::Records(&records),
    };
    let sync = build_synchronizer(ctx, source, &opts.patches)?;

    let mut engine = FilterEngine::new();
    for text in &opts.gestures {
        let gesture: Gesture = text.parse()?;
        warn_unknown_key(ctx, &sync, &gesture);
        let outcome = engine.select(&gesture, sync.taxonomy())?;
        if ctx.verbose {
            eprintln!("{gesture}: {outcome:?}");
        }
    }

    if let Some(search) = &opts.search {
        engine.set_search_filter(search.as_str());
    }

    let visible = engine.evaluator().filter_records(&records);
    let matched = visible.len();
    let shown = apply_limit(visible, opts.limit);
    let snapshot = engine.snapshot();

    if ctx.json_output {
        let output = format_eval_json(&snapshot, &shown, matched, records.len())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_eval_table(&snapshot, &shown, matched, records.len(), ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Warns about tag and tracker keys the taxonomy does not know.
///
/// Such keys are still selected; they just match nothing.
fn warn_unknown_key(ctx: &CommandContext, sync: &TaxonomySynchronizer, gesture: &Gesture) {
    let Some(key) = gesture.key.as_deref().filter(|key| !key.is_empty()) else {
        return;
    };
    if gesture.dimension == Dimension::Status || sync.contains_key(gesture.dimension, key) {
        return;
    }

    let message = match sync.suggest_key(gesture.dimension, key) {
        Some(suggestion) => format!(
            "unknown {} '{}'. Did you mean '{}'?",
            gesture.dimension, key, suggestion
        ),
        None => format!("unknown {} '{}'", gesture.dimension, key),
    };
    ctx.warn(&message);
}

/// Applies the limit to the visible torrents.
fn apply_limit(torrents: Vec<&Torrent>, limit: Option<usize>) -> Vec<&Torrent> {
    match limit {
        Some(limit) => torrents.into_iter().take(limit).collect(),
        None => torrents,
    }
}
