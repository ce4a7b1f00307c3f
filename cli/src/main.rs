use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use sweeper_core::{CellCount, Coord, GameSession};

mod app;
mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = 10)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 10)]
    height: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = 20)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let session = GameSession::new_game(args.width, args.height, args.mines, seed)?;
    let status = app::run(session, std::io::stdin().lock(), std::io::stdout().lock())?;
    log::debug!("Exiting with {status:?}");

    Ok(())
}
