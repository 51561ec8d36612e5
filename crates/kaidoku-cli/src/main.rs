//! Command-line Sudoku solver.
//!
//! Reads a puzzle from a file or standard input, solves it, and prints the
//! completed grid.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use kaidoku_core::Grid;
use kaidoku_solver::BacktrackSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a puzzle file. Reads standard input when omitted.
    ///
    /// Digits 1-9 are givens; `.`, `_`, or `0` mark blank cells, and
    /// whitespace is ignored.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Print search statistics after the solution.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let text = read_puzzle(args.puzzle.as_deref())?;
    let puzzle: Grid = text.parse()?;
    log::debug!("parsed puzzle with {} blank cells", puzzle.blank_count());

    let (solution, stats) = BacktrackSolver::new().solve_with_stats(&puzzle)?;
    println!("{solution:#}");

    if args.stats {
        println!();
        println!("Stats:");
        println!("  naked singles: {}", stats.singles());
        println!("  assumptions: {}", stats.assumptions());
        println!("  backtracks: {}", stats.backtracks());
    }

    Ok(())
}

fn read_puzzle(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
            Ok(text)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
