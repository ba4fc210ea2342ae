use std::path::PathBuf;

use ibtopo_common::config::Config;
use ibtopo_core::render;

use crate::cancel;
use crate::commands::parse;
use crate::terminal::print;

/// Parses `file` and writes the devices back out in dump format.
pub async fn dump(file: PathBuf, cfg: &Config) -> anyhow::Result<()> {
    let signals = cancel::watch_signals();
    let outcome = parse::run(file, signals.cancel_flag(), cfg).await?;
    signals.parsing_done();
    if outcome.is_cancelled() {
        anyhow::bail!("interrupted");
    }

    let parsed = outcome.into_parsed();
    print::report(&render::render_topology(&parsed.topology.devices))?;
    Ok(())
}
