//! Board CLI - sets up an 0x88 board and prints it.
//!
//! The board starts from the standard position unless `--empty` is given or
//! the config disables it. Placements from `board.toml` are applied next,
//! then `--place` arguments, so the command line wins on overlap.

mod config;
mod placement;

use anyhow::Context;
use board_core::Board;
use clap::Parser;
use config::BoardConfig;
use placement::PlacementArg;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "board-cli")]
#[command(about = "Set up and print an 0x88 chessboard")]
struct Cli {
    /// Path to the board configuration file
    #[arg(short, long, default_value_os_t = BoardConfig::default_path())]
    config: PathBuf,

    /// Start from an empty board instead of the starting position
    #[arg(long)]
    empty: bool,

    /// Place a piece code on a square, e.g. `e4=1` or `d8=-5` (repeatable)
    #[arg(short, long = "place", value_name = "SQUARE=CODE")]
    placements: Vec<PlacementArg>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    tracing::debug!("Config: {:?}", config);

    let board = build_board(&config, &cli)?;
    tracing::info!("Board ready with {} pieces", board.pieces().count());

    board.display_board();
    Ok(())
}

fn build_board(config: &BoardConfig, cli: &Cli) -> anyhow::Result<Board> {
    let mut board = Board::new();

    if config.start_position && !cli.empty {
        board.set_start_position_pieces();
        tracing::debug!("Placed starting position");
    }

    let from_config = config
        .placements
        .iter()
        .map(|p| PlacementArg::new(&p.square, p.piece))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid placement in config")?;

    for placement in from_config.iter().chain(&cli.placements) {
        board.set_piece(placement.index, placement.piece)?;
        tracing::debug!(
            "Placed {} on {}",
            placement.piece,
            board.index_to_coords(placement.index)?
        );
    }

    Ok(board)
}
