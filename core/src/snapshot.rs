//! Persistence of the rendered report, so the last parse can be replayed
//! without reading the dump again.

use std::fs;
use std::io;
use std::path::Path;

use ibtopo_common::error::TopologyError;
use tracing::debug;

/// Overwrites the snapshot at `path` with `report`.
pub fn save(path: &Path, report: &str) -> Result<(), TopologyError> {
    fs::write(path, report).map_err(|source| TopologyError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = report.len(), "report saved");
    Ok(())
}

/// Reads back the last saved report.
pub fn load(path: &Path) -> Result<String, TopologyError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TopologyError::SnapshotMissing(path.to_path_buf()),
        _ => TopologyError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
