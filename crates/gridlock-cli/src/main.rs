//! Interactive console front end for Gridlock puzzles.
//!
//! Loads a puzzle file, then drops into a command shell where vehicles
//! are slid one cell at a time until the target vehicle reaches the
//! exit. A backtracking solver backs the `solve` and `hint` commands.

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use gridlock_core::{Position, Symbol};
use gridlock_engine::Session;

mod loader;
mod render;
mod shell;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file with one `symbol,startRow,startCol,endRow,endCol`
    /// record per line.
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,

    /// Number of grid rows.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u8).range(1..), default_value_t = 5)]
    rows: u8,

    /// Number of grid columns.
    #[arg(long, value_name = "COUNT", value_parser = clap::value_parser!(u8).range(1..), default_value_t = 5)]
    cols: u8,

    /// Exit cell as `row,col`. Defaults to the rightmost cell of the
    /// middle row. A cell outside the grid makes the puzzle unwinnable.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_exit)]
    exit: Option<Position>,

    /// Symbol of the vehicle that must reach the exit.
    #[arg(long, value_name = "SYMBOL", default_value_t = 'R')]
    target: char,
}

fn parse_exit(s: &str) -> Result<Position, String> {
    let malformed = || format!("expected `row,col`, got `{s}`");
    let (row, col) = s.split_once(',').ok_or_else(malformed)?;
    let row = row.trim().parse().map_err(|_| malformed())?;
    let col = col.trim().parse().map_err(|_| malformed())?;
    Ok(Position::new(row, col))
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Load(loader::LoadError),
    #[display("no vehicle `{target}` in the puzzle")]
    #[from(ignore)]
    MissingTarget { target: Symbol },
    #[display("{_0}")]
    Io(io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let exit = args
        .exit
        .unwrap_or_else(|| Position::new(args.rows / 2, args.cols - 1));
    let target = Symbol::new(args.target);

    let board = loader::load_board(&args.puzzle, args.rows, args.cols, exit)?;
    if board.vehicle(target).is_none() {
        return Err(AppError::MissingTarget { target });
    }
    log::info!(
        "loaded {} vehicles on a {}x{} grid, exit at {exit}, target {target}",
        board.vehicles().count(),
        args.rows,
        args.cols,
    );

    let mut session = Session::new(board, target);
    shell::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
