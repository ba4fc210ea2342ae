//! Errors raised while reading topology dumps and report snapshots.
//!
//! Malformed lines are not errors: the parsers skip what they cannot
//! read. Only resource problems end up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopologyError {
    /// The topology dump does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The topology dump exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report snapshot could not be written.
    #[error("could not write report to {}: {source}", .path.display())]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No report has been saved yet.
    #[error("no saved topology at {}, parse a file first", .0.display())]
    SnapshotMissing(PathBuf),

    /// The report snapshot exists but could not be read back.
    #[error("could not read report from {}: {source}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
