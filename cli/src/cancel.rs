//! Turns Ctrl-C (and SIGTERM on unix) into a flag the parser checks between lines.
//!
//! Once parsing is over nothing polls that flag any more, so a later signal
//! ends the process instead.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

/// Exit status after an interrupt outside of parsing.
const INTERRUPTED_EXIT: i32 = 130;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalAction {
    /// Raise the cancel flag and let the parser checkpoint.
    Cancel,
    /// Parsing already finished; leave right away.
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct SignalWatch {
    cancel: Arc<AtomicBool>,
    parsing_done: Arc<AtomicBool>,
}

impl SignalWatch {
    /// Flag handed to the parser.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Signals received from now on exit the process.
    pub fn parsing_done(&self) {
        self.parsing_done.store(true, Ordering::Relaxed);
    }

    fn on_signal(&self) -> SignalAction {
        if self.parsing_done.load(Ordering::Relaxed) {
            SignalAction::Exit
        } else {
            self.cancel.store(true, Ordering::Relaxed);
            SignalAction::Cancel
        }
    }
}

pub fn watch_signals() -> SignalWatch {
    let watch = SignalWatch::default();
    let task_watch = watch.clone();

    tokio::spawn(async move {
        while wait_for_termination().await {
            match task_watch.on_signal() {
                SignalAction::Cancel => warn!("Caught interrupt/terminating signal"),
                SignalAction::Exit => {
                    warn!("Interrupted");
                    std::process::exit(INTERRUPTED_EXIT);
                }
            }
        }
    });

    watch
}

/// Resolves to `false` if no handler could be installed.
#[cfg(unix)]
async fn wait_for_termination() -> bool {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(e) => {
            warn!("Could not listen for SIGTERM: {e}");
            return tokio::signal::ctrl_c().await.is_ok();
        }
    };

    tokio::select! {
        res = tokio::signal::ctrl_c() => res.is_ok(),
        _ = terminate.recv() => true,
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> bool {
    tokio::signal::ctrl_c().await.is_ok()
}
