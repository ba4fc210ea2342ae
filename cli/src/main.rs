mod cancel;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, dump, parse, replay};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.config();
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Parse { file, show } => {
            print::header("parsing topology", cfg.quiet);
            parse::parse(file, show, &cfg).await
        }
        Commands::Print => {
            print::header("last parsed topology", cfg.quiet);
            replay::replay(&cfg)
        }
        Commands::Dump { file } => dump::dump(file, &cfg).await,
    }
}
