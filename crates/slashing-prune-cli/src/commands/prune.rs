//! Prune command implementation.

use crate::output;
use serde_json::json;
use slashing_protection::{
    prune_file, prune_with_stats, read_interchange, PruneOptions, WriteOptions,
};

/// Arguments for a prune run.
pub struct PruneArgs {
    pub source_path: String,
    pub target_path: String,
    pub retain: usize,
    pub pretty: bool,
    pub sync: bool,
    pub dry_run: bool,
    pub json: bool,
}

pub fn run(args: PruneArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.retain == 0 {
        return Err("--retain must be at least 1".into());
    }
    let prune_options = PruneOptions {
        retain: args.retain,
    };

    tracing::info!(source = %args.source_path, retain = args.retain, "pruning slashing protection");

    let stats = if args.dry_run {
        let record = read_interchange(&args.source_path)?;
        prune_with_stats(record, &prune_options).1
    } else {
        let write_options = WriteOptions {
            pretty: args.pretty,
            sync: args.sync,
        };
        prune_file(
            &args.source_path,
            &args.target_path,
            &prune_options,
            &write_options,
        )?
    };

    if args.dry_run {
        tracing::info!(removed = stats.removed(), "dry run, target not written");
    } else {
        tracing::info!(target = %args.target_path, removed = stats.removed(), "pruning complete");
    }

    if args.json {
        let summary = json!({
            "source_path": args.source_path,
            "target_path": args.target_path,
            "dry_run": args.dry_run,
            "retain": args.retain,
            "stats": serde_json::to_value(&stats)?,
        });
        println!("{}", output::format_json(&summary));
    } else {
        println!("{}", output::format_table(&stats));
    }

    Ok(())
}
