//! Output formatting utilities.

use serde_json::Value;
use slashing_protection::PruneStats;

/// Formats a run summary as JSON.
pub fn format_json(summary: &Value) -> String {
    serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
}

/// Formats prune stats as a two-column table.
pub fn format_table(stats: &PruneStats) -> String {
    let rows = [
        ("KEYS", stats.keys.to_string()),
        ("KEYS_TRIMMED", stats.keys_trimmed.to_string()),
        (
            "BLOCKS",
            format!("{} -> {}", stats.blocks_before, stats.blocks_after),
        ),
        (
            "ATTESTATIONS",
            format!("{} -> {}", stats.attestations_before, stats.attestations_after),
        ),
        ("REMOVED", stats.removed().to_string()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<14} {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}
