use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, pruning, or writing an interchange file.
///
/// Pruning itself never fails; every variant comes from the file layer.
#[derive(Error, Debug)]
pub enum PruneError {
    /// Source path does not exist.
    #[error("source path {} does not exist", path.display())]
    SourceMissing {
        /// Path that was checked.
        path: PathBuf,
    },
    /// Source exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    SourceUnreadable {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Source content is not a valid interchange record.
    #[error("malformed interchange in {}: {source}", path.display())]
    MalformedInput {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// Pruned record could not be encoded.
    #[error("failed to encode interchange: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Target could not be written.
    #[error("failed to write {}: {source}", path.display())]
    TargetUnwritable {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Target is absent after a write reported success.
    #[error("target path {} does not exist after write", path.display())]
    TargetMissing {
        /// Path that was checked.
        path: PathBuf,
    },
}
