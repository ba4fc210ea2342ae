use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use colored::*;
use ibtopo_common::config::Config;
use ibtopo_core::driver::{self, ParseOutcome, ParseStats};
use ibtopo_core::{render, snapshot};
use tracing::{info, warn};

use crate::cancel;
use crate::terminal::{colors, print, progress};
use crate::tprint;

pub async fn parse(file: PathBuf, show: bool, cfg: &Config) -> anyhow::Result<()> {
    let signals = cancel::watch_signals();
    let outcome = run(file, signals.cancel_flag(), cfg).await?;
    signals.parsing_done();

    let cancelled = outcome.is_cancelled();
    let parsed = outcome.into_parsed();
    let report = render::render_report(&parsed.topology);

    if cancelled {
        warn!("Saving what is possible...");
        snapshot::save(&cfg.snapshot, &report)?;
        anyhow::bail!(
            "interrupted, {} committed devices saved to {}",
            parsed.stats.devices,
            cfg.snapshot.display()
        );
    }

    snapshot::save(&cfg.snapshot, &report)?;
    info!("Report saved to {}", cfg.snapshot.display());

    if parsed.topology.devices.is_empty() {
        print::header("zero devices detected", cfg.quiet);
        print::no_results();
    } else if show {
        print::header("topology", cfg.quiet);
        print::report(&report)?;
    }

    print_summary(&parsed.stats, cfg);
    Ok(())
}

/// Parses `file` off the async runtime with a progress bar attached.
pub(crate) async fn run(
    file: PathBuf,
    cancel_flag: Arc<AtomicBool>,
    cfg: &Config,
) -> anyhow::Result<ParseOutcome> {
    progress::start_parse_bar(cfg.no_progress || cfg.quiet > 1);

    let outcome = tokio::task::spawn_blocking(move || {
        driver::parse_topology_file(
            &file,
            &cancel_flag,
            Some(&progress::report_parse_progress),
        )
    })
    .await;

    progress::finish_parse_bar();
    Ok(outcome??)
}

fn print_summary(stats: &ParseStats, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let devices: ColoredString = format!("{} devices", stats.devices).bold().green();
    let lines: ColoredString = format!("{} lines", stats.lines_parsed).bold().green();
    let elapsed: ColoredString = format!("{:.6}s", stats.elapsed.as_secs_f64()).bold().yellow();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::aligned_line("Lines parsed", 13, stats.lines_parsed);
            print::aligned_line("Devices found", 13, stats.devices);
            print::centerln(
                &format!("Topology analysis: {devices} from {lines} in {elapsed}")
                    .color(colors::TEXT_DEFAULT)
                    .to_string(),
            );
        }
        _ => {
            tprint!();
            info!("Topology analysis took {:.6} seconds", stats.elapsed.as_secs_f64());
        }
    }
}
