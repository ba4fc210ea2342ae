#![cfg(test)]
use ibtopo_core::driver::{self, ParseProgress};
use ibtopo_core::render;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};

use super::FABRIC;

#[test]
fn checkpoint_holds_only_finished_devices() {
    let cancel = AtomicBool::new(false);
    // Stop while the spine record is half read.
    let stop_inside_spine = |progress: &ParseProgress| {
        if progress.devices_found == 3 && progress.lines_parsed >= 19 {
            cancel.store(true, Ordering::Relaxed);
        }
    };

    let outcome = driver::parse_reader(
        Cursor::new(FABRIC),
        FABRIC.len() as u64,
        &cancel,
        Some(&stop_inside_spine),
    )
    .unwrap();

    assert!(outcome.is_cancelled());
    let parsed = outcome.into_parsed();
    assert_eq!(parsed.stats.devices, 2);

    let report = render::render_report(&parsed.topology);
    assert_eq!(report.matches("Switch:").count(), 1);
    assert_eq!(report.matches("Host:").count(), 1);
    // The spine was never finished, so the leaf cannot resolve it.
    assert!(report.contains("\tConnected to switch: switchguid=, port=35\n"));
}

#[test]
fn rerun_after_cancel_starts_over() {
    let cancel = AtomicBool::new(true);
    let first = driver::parse_reader(Cursor::new(FABRIC), 0, &cancel, None).unwrap();
    assert!(first.parsed().topology.devices.is_empty());

    cancel.store(false, Ordering::Relaxed);
    let second = driver::parse_reader(Cursor::new(FABRIC), 0, &cancel, None).unwrap();
    assert!(!second.is_cancelled());
    assert_eq!(second.parsed().topology.devices.len(), 4);
}
