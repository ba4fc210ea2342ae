pub mod dump;
pub mod parse;
pub mod replay;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ibtopo_common::config::{Config, DEFAULT_SNAPSHOT};

#[derive(Parser)]
#[command(name = "ibtopo")]
#[command(about = "Parses InfiniBand topology dumps into a resolved report.")]
#[command(arg_required_else_help = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// File the last report is saved to and replayed from
    #[arg(long, global = true, default_value = DEFAULT_SNAPSHOT)]
    pub snapshot: PathBuf,

    /// Less output, repeat to drop the summary as well
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output, repeat for per-line traces
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not draw the progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a topology file and save the report
    #[command(alias = "f")]
    Parse {
        file: PathBuf,
        /// Also print the report
        #[arg(long)]
        show: bool,
    },
    /// Print the last saved report
    #[command(alias = "p")]
    Print,
    /// Parse a topology file and print it back in dump format
    #[command(alias = "d")]
    Dump { file: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            snapshot: self.snapshot.clone(),
            quiet: self.quiet,
            no_progress: self.no_progress,
        }
    }
}
