//! Domain command implementation.
//!
//! Lists the keys of one dimension in the order range gestures walk them.

use std::path::PathBuf;

use flood_api_rs::models::Dimension;
use flood_api_rs::sync::Taxonomy;
use flood_filter_rs::taxonomy::TaxonomySynchronizer;

use super::loader::{build_synchronizer, load_records, TaxonomySource};
use super::{CommandContext, CommandError, Result};
use crate::output::{format_domain_json, format_domain_table, DomainRow};

/// Options for the domain command.
#[derive(Debug)]
pub struct DomainOptions {
    /// Dimension to list.
    pub dimension: Dimension,
    /// Taxonomy file (falls back to `data.taxonomy`).
    pub taxonomy: Option<PathBuf>,
    /// Torrent list to derive the taxonomy from (falls back to `data.records`).
    pub records: Option<PathBuf>,
    /// Feed messages applied after the taxonomy is loaded.
    pub patches: Vec<PathBuf>,
}

/// Executes the domain command.
///
/// # Errors
///
/// Returns an error if no taxonomy source is available, a file cannot be
/// loaded, or a feed message does not apply.
pub fn execute(ctx: &CommandContext, opts: &DomainOptions) -> Result<()> {
    let sync = load_synchronizer(ctx, opts)?;
    let rows = domain_rows(&sync, opts.dimension);

    if ctx.json_output {
        let output = format_domain_json(opts.dimension, &rows)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_domain_table(opts.dimension, &rows, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

fn load_synchronizer(ctx: &CommandContext, opts: &DomainOptions) -> Result<TaxonomySynchronizer> {
    if let Some(path) = opts.taxonomy.clone().or_else(|| ctx.config.data.taxonomy.clone()) {
        return build_synchronizer(ctx, TaxonomySource::File(path), &opts.patches);
    }

    let records_path = opts
        .records
        .clone()
        .or_else(|| ctx.config.data.records.clone())
        .ok_or_else(|| {
            CommandError::Config(
                "no taxonomy given (use --taxonomy, --records or set data.taxonomy)".to_string(),
            )
        })?;
    let records = load_records(&records_path)?;
    build_synchronizer(ctx, TaxonomySource::Records(&records), &opts.patches)
}

/// Builds the rows of a domain listing.
fn domain_rows(sync: &TaxonomySynchronizer, dimension: Dimension) -> Vec<DomainRow> {
    let taxonomy: &Taxonomy = sync.taxonomy();
    sync.domain(dimension)
        .into_iter()
        .enumerate()
        .map(|(position, key)| {
            let aggregate = taxonomy.aggregate(dimension, &key);
            DomainRow {
                position,
                count: aggregate.count,
                size: (dimension != Dimension::Status).then_some(aggregate.size),
                key,
            }
        })
        .collect()
}
