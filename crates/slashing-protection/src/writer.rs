//! Interchange file writer.

use crate::errors::PruneError;
use crate::interchange::Interchange;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Options for writing an interchange file.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Indent the JSON output (default: false, compact).
    pub pretty: bool,
    /// Whether to fsync before the file is moved into place (default: false).
    pub sync: bool,
}

/// Writes an interchange record to `path`.
///
/// The record is written to a uniquely named temporary file in the target's
/// directory and renamed onto `path` once complete, so readers never see a
/// half-written target. The temporary file is removed if anything fails.
///
/// # Errors
///
/// Returns [`PruneError`](crate::PruneError) if:
/// - The record cannot be encoded
/// - The temporary file cannot be created, written, or renamed
pub fn write_interchange<P: AsRef<Path>>(
    path: P,
    record: &Interchange,
    options: &WriteOptions,
) -> Result<(), PruneError> {
    let path = path.as_ref();
    let bytes = if options.pretty {
        serde_json::to_vec_pretty(record)?
    } else {
        serde_json::to_vec(record)?
    };

    if let Err(source) = write_and_persist(path, &bytes, options.sync) {
        return Err(PruneError::TargetUnwritable {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote interchange");
    Ok(())
}

fn write_and_persist(path: &Path, bytes: &[u8], sync: bool) -> io::Result<()> {
    let mut file = NamedTempFile::new_in(parent_dir(path))?;
    file.write_all(bytes)?;
    file.flush()?;
    if sync {
        file.as_file().sync_all()?;
    }
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
