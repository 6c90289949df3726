//! slashing-prune - trims slashing-protection interchange files to recent history.

use clap::Parser;

mod commands;
mod logging;
mod output;

use commands::prune::{self, PruneArgs};

#[derive(Parser)]
#[command(name = "slashing-prune")]
#[command(about = "Keep only the most recent signing history per key in a slashing-protection file")]
struct Cli {
    /// Interchange file to read
    #[arg(long)]
    source_path: String,
    /// Where to write the pruned interchange file
    #[arg(long)]
    target_path: String,
    /// Entries kept per block list and per attestation list
    #[arg(long, default_value_t = slashing_protection::DEFAULT_RETAIN)]
    retain: usize,
    /// Indent the written JSON
    #[arg(long)]
    pretty: bool,
    /// Sync the target to disk before it replaces any existing file
    #[arg(long)]
    sync: bool,
    /// Report what would be removed without writing the target
    #[arg(long)]
    dry_run: bool,
    /// Output the summary as JSON
    #[arg(long)]
    json: bool,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = prune::run(PruneArgs {
        source_path: cli.source_path,
        target_path: cli.target_path,
        retain: cli.retain,
        pretty: cli.pretty,
        sync: cli.sync,
        dry_run: cli.dry_run,
        json: cli.json,
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
