//! Interchange file reader.

use crate::errors::PruneError;
use crate::interchange::Interchange;
use std::path::Path;

/// Reads and parses an interchange file.
///
/// # Errors
///
/// Returns [`PruneError`](crate::PruneError) if:
/// - The path does not exist
/// - The file cannot be read
/// - The content is not a valid interchange record
pub fn read_interchange<P: AsRef<Path>>(path: P) -> Result<Interchange, PruneError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PruneError::SourceMissing {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| PruneError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let record: Interchange =
        serde_json::from_slice(&bytes).map_err(|source| PruneError::MalformedInput {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        keys = record.data.len(),
        "read interchange"
    );
    Ok(record)
}
