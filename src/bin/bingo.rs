use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bingo_engine::{parse_puzzle, BingoConfig, DEFAULT_BOARD_SIZE};

/// Play a bingo puzzle and report the first and last winning cards.
#[derive(Parser, Debug)]
#[command(name = "bingo", version, about)]
struct Cli {
    /// Puzzle file: a comma-separated draw line followed by boards.
    input: PathBuf,

    /// Side length of every board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log every win at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "bingo_engine=debug,info"
    } else {
        "bingo_engine=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    anyhow::ensure!(cli.board_size > 0, "board size must be at least 1");
    let config = BingoConfig::new().with_board_size(cli.board_size);

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let puzzle = parse_puzzle(&text, &config)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    tracing::info!(
        draws = puzzle.draws.len(),
        boards = puzzle.grids.len(),
        "Puzzle loaded"
    );

    let game = puzzle.into_game(&config)?;
    let covered = game.draws_cover_cards();
    let outcome = game.run();
    let report = outcome.report(covered);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(outcome.is_conclusive())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
