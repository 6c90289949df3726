//! Bounded-retention pruning of signing histories.
//!
//! For each key, a list with at most `retain` entries is kept as-is. Longer
//! lists are sorted ascending by their ordering key (slot for blocks, source
//! epoch for attestations) and only the last `retain` entries survive.
//!
//! Ordering keys are compared as strings, byte by byte. `"2"` ranks above
//! `"19"`. The sort is stable, so among equal keys the entries later in the
//! input win the last places in the window.

use crate::interchange::{Interchange, KeyHistory, Ordered};
use serde::Serialize;

/// Number of entries kept per list when no limit is given.
pub const DEFAULT_RETAIN: usize = 10;

/// Options for pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    /// Maximum entries kept per block list and per attestation list (default: 10).
    pub retain: usize,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            retain: DEFAULT_RETAIN,
        }
    }
}

/// Counts gathered during a prune pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneStats {
    /// Keys in the record.
    pub keys: usize,
    /// Keys with at least one list shortened.
    pub keys_trimmed: usize,
    /// Signed blocks before pruning.
    pub blocks_before: usize,
    /// Signed blocks after pruning.
    pub blocks_after: usize,
    /// Signed attestations before pruning.
    pub attestations_before: usize,
    /// Signed attestations after pruning.
    pub attestations_after: usize,
}

impl PruneStats {
    /// Total entries dropped across blocks and attestations.
    pub fn removed(&self) -> usize {
        (self.blocks_before - self.blocks_after)
            + (self.attestations_before - self.attestations_after)
    }
}

/// Prunes every key history down to the default retention limit.
pub fn prune(record: Interchange) -> Interchange {
    prune_with(record, &PruneOptions::default())
}

/// Prunes every key history down to `options.retain` entries per list.
pub fn prune_with(record: Interchange, options: &PruneOptions) -> Interchange {
    prune_with_stats(record, options).0
}

/// Prunes a record and reports what was removed.
pub fn prune_with_stats(record: Interchange, options: &PruneOptions) -> (Interchange, PruneStats) {
    let mut stats = PruneStats {
        keys: record.data.len(),
        ..PruneStats::default()
    };

    let data = record
        .data
        .into_iter()
        .map(|history| {
            let blocks_before = history.signed_blocks.len();
            let attestations_before = history.signed_attestations.len();

            let pruned = KeyHistory {
                pubkey: history.pubkey,
                signed_blocks: retain_latest(history.signed_blocks, options.retain),
                signed_attestations: retain_latest(history.signed_attestations, options.retain),
            };

            stats.blocks_before += blocks_before;
            stats.blocks_after += pruned.signed_blocks.len();
            stats.attestations_before += attestations_before;
            stats.attestations_after += pruned.signed_attestations.len();
            if pruned.signed_blocks.len() < blocks_before
                || pruned.signed_attestations.len() < attestations_before
            {
                tracing::debug!(
                    pubkey = %pruned.pubkey,
                    blocks_before,
                    attestations_before,
                    "trimmed key history"
                );
                stats.keys_trimmed += 1;
            }

            pruned
        })
        .collect();

    let pruned = Interchange {
        metadata: record.metadata,
        data,
    };
    (pruned, stats)
}

/// Keeps the `retain` entries with the greatest ordering keys.
///
/// Lists no longer than `retain` are returned untouched, in their original
/// order. Longer lists come back sorted ascending by key.
pub fn retain_latest<T: Ordered>(mut entries: Vec<T>, retain: usize) -> Vec<T> {
    if entries.len() <= retain {
        return entries;
    }
    entries.sort_by(|a, b| a.ordering_key().cmp(b.ordering_key()));
    entries.split_off(entries.len() - retain)
}
