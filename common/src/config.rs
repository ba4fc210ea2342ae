use std::path::PathBuf;

/// Name of the report snapshot written after every run.
pub const DEFAULT_SNAPSHOT: &str = "topology.last";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the rendered report is persisted.
    ///
    /// Overwritten on each successful parse and on cancellation.
    pub snapshot: PathBuf,
    /// 0 prints everything, 1 drops banners and headers, 2 also drops the summary.
    pub quiet: u8,
    /// Hides the progress bar while parsing.
    pub no_progress: bool,
}
