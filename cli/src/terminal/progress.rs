use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use ibtopo_core::driver::ParseProgress;
use indicatif::{ProgressBar, ProgressStyle};

use crate::terminal::colors;

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

/// Starts the parse progress bar. Only the first call in a process creates it.
pub fn start_parse_bar(hidden: bool) -> &'static ProgressBar {
    PROGRESS.get_or_init(|| init_bar(hidden))
}

fn init_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(0);
    let style = ProgressStyle::with_template(
        "{spinner:.blue} {msg} {percent:>3}% [{bar:32.green/black}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .tick_strings(&[
        "▁▁▁▁▁",
        "▁▂▂▂▁",
        "▁▄▂▄▁",
        "▂▄▆▄▂",
        "▄▆█▆▄",
        "▂▄▆▄▂",
        "▁▄▂▄▁",
        "▁▂▂▂▁",
    ])
    .progress_chars("█▉ ");

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn report_parse_progress(progress: &ParseProgress) {
    let Some(pb) = PROGRESS.get() else {
        return;
    };
    pb.set_length(progress.total_bytes);
    pb.set_position(progress.bytes_read);
    pb.set_message(format!(
        "{} {}, {} {}",
        "Lines parsed:".color(colors::TEXT_DEFAULT),
        progress.lines_parsed.to_string().blue().bold(),
        "devices found:".color(colors::TEXT_DEFAULT),
        progress.devices_found.to_string().blue().bold(),
    ));
}

pub fn finish_parse_bar() {
    if let Some(pb) = PROGRESS.get() {
        pb.finish_and_clear();
    }
}

/// Routes log output above the progress bar while it is drawn.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match PROGRESS.get() {
            Some(pb) if !pb.is_finished() && !pb.is_hidden() => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
            }
            _ => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
