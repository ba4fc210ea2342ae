//! # Topology File Driver
//!
//! Reads a dump line by line into a [`ParseSession`], reporting progress and
//! honouring a cancellation flag between lines.
//!
//! Cancellation never looks at the record being built: the driver stops
//! before the next line and returns only what has already been committed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use ibtopo_common::error::TopologyError;
use ibtopo_common::topology::Topology;
use tracing::{debug, info, warn};

use crate::session::{LineOutcome, ParseSession};

/// Snapshot of a running parse, sent after every content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseProgress {
    pub bytes_read: u64,
    pub total_bytes: u64,
    pub lines_parsed: u64,
    pub devices_found: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines that were not blank or comments.
    pub lines_parsed: u64,
    /// Devices in the returned graph.
    pub devices: usize,
    pub bytes_read: u64,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Parsed {
    pub topology: Topology,
    pub stats: ParseStats,
}

#[derive(Debug)]
pub enum ParseOutcome {
    /// The whole input was read.
    Completed(Parsed),
    /// The cancellation flag was raised. Holds only committed devices.
    Cancelled(Parsed),
}

impl ParseOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ParseOutcome::Cancelled(_))
    }

    pub fn parsed(&self) -> &Parsed {
        match self {
            ParseOutcome::Completed(parsed) | ParseOutcome::Cancelled(parsed) => parsed,
        }
    }

    pub fn into_parsed(self) -> Parsed {
        match self {
            ParseOutcome::Completed(parsed) | ParseOutcome::Cancelled(parsed) => parsed,
        }
    }
}

pub type ProgressFn<'a> = &'a dyn Fn(&ParseProgress);

/// Parses the topology dump at `path`.
pub fn parse_topology_file(
    path: &Path,
    cancel: &AtomicBool,
    on_progress: Option<ProgressFn<'_>>,
) -> Result<ParseOutcome, TopologyError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TopologyError::FileNotFound(path.to_path_buf()),
        _ => TopologyError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let total_bytes = file.metadata().map(|meta| meta.len()).unwrap_or(0);
    info!("File found: {}", path.display());

    parse_reader(BufReader::new(file), total_bytes, cancel, on_progress).map_err(|source| {
        TopologyError::Read {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Parses a dump from any buffered reader. `total_bytes` is only used for progress.
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    total_bytes: u64,
    cancel: &AtomicBool,
    on_progress: Option<ProgressFn<'_>>,
) -> io::Result<ParseOutcome> {
    let start = Instant::now();
    let mut session = ParseSession::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut bytes_read: u64 = 0;

    loop {
        if cancel.load(Ordering::Relaxed) {
            warn!(
                committed = session.devices().len(),
                "parse interrupted, keeping committed devices only"
            );
            let lines_parsed = session.lines_parsed();
            let topology = session.checkpoint();
            let stats = stats(&topology, lines_parsed, bytes_read, start.elapsed());
            return Ok(ParseOutcome::Cancelled(Parsed { topology, stats }));
        }

        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        bytes_read += read as u64;

        let line = String::from_utf8_lossy(&buf);
        if session.feed(&line) == LineOutcome::Skipped {
            continue;
        }

        if let Some(report) = on_progress {
            report(&ParseProgress {
                bytes_read,
                total_bytes,
                lines_parsed: session.lines_parsed(),
                devices_found: session.devices_found(),
            });
        }
    }

    let lines_parsed = session.lines_parsed();
    let topology = session.finish();
    let stats = stats(&topology, lines_parsed, bytes_read, start.elapsed());
    debug!(?stats, "parse finished");
    Ok(ParseOutcome::Completed(Parsed { topology, stats }))
}

/// Parses an in-memory dump to completion.
pub fn parse_str(text: &str) -> Topology {
    let mut session = ParseSession::new();
    for line in text.lines() {
        session.feed(line);
    }
    session.finish()
}

fn stats(topology: &Topology, lines_parsed: u64, bytes_read: u64, elapsed: Duration) -> ParseStats {
    ParseStats {
        lines_parsed,
        devices: topology.devices.len(),
        bytes_read,
        elapsed,
    }
}
