use ibtopo_common::config::Config;
use ibtopo_core::snapshot;

use crate::terminal::print;

/// Prints the report saved by the last `parse`.
pub fn replay(cfg: &Config) -> anyhow::Result<()> {
    let report = snapshot::load(&cfg.snapshot)?;
    print::report(&report)?;
    Ok(())
}
