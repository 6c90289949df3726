//! Slashing-protection interchange records and history pruning.
//!
//! This crate provides:
//! - Typed interchange records with opaque string fields
//! - A pure pruning pass keeping the most recent signing history per key
//! - File reader/writer helpers with a typed error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slashing_protection::{prune_file, PruneOptions, WriteOptions};
//!
//! let stats = prune_file(
//!     "slashing_protection.json",
//!     "slashing_protection_pruned.json",
//!     &PruneOptions::default(),
//!     &WriteOptions::default(),
//! )?;
//! println!("removed {} entries", stats.removed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`Interchange`] - The record read from and written to disk
//! - [`prune`] - Pure pruning pass with the default limit of 10
//! - [`PruneError`] - Everything that can go wrong around the pass

#![deny(missing_docs)]

/// Error types for interchange file operations.
pub mod errors;
/// Interchange record types.
pub mod interchange;
/// History pruning.
pub mod prune;
/// Interchange file reader.
pub mod reader;
/// Interchange file writer.
pub mod writer;

pub use errors::PruneError;
pub use interchange::{Interchange, KeyHistory, Metadata, Ordered, SignedAttestation, SignedBlock};
pub use prune::{
    prune, prune_with, prune_with_stats, retain_latest, PruneOptions, PruneStats, DEFAULT_RETAIN,
};
pub use reader::read_interchange;
pub use writer::{write_interchange, WriteOptions};

use std::path::Path;

/// Reads `source`, prunes it, and writes the result to `target`.
///
/// # Errors
///
/// Returns [`PruneError`] if the source cannot be read or parsed, the target
/// cannot be written, or the target is missing after the write.
pub fn prune_file<S: AsRef<Path>, T: AsRef<Path>>(
    source: S,
    target: T,
    prune_options: &PruneOptions,
    write_options: &WriteOptions,
) -> Result<PruneStats, PruneError> {
    let target = target.as_ref();
    let record = read_interchange(source)?;
    let (pruned, stats) = prune_with_stats(record, prune_options);
    write_interchange(target, &pruned, write_options)?;

    if !target.exists() {
        return Err(PruneError::TargetMissing {
            path: target.to_path_buf(),
        });
    }
    Ok(stats)
}
