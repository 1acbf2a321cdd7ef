//! N-puzzle Solver
//!
//! Reads a sliding-tile board in the conventional text format (first line
//! N, then N rows of N space-separated values, 0 for the blank), runs the
//! A* solver, and prints either the optimal slide sequence or
//! `No solution possible`. Can also emit random solvable boards for
//! testing the solver by hand.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use npuzzle::{parse, Board, Solver};

/// Solves N-puzzle boards with A* search.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board read from a file, or from stdin when no file is given.
    Solve {
        /// Path to a board file.
        file: Option<PathBuf>,
    },
    /// Print a random solvable board produced by a walk from the goal.
    Scramble {
        /// Board dimension.
        #[arg(short, long, default_value_t = 3)]
        n: usize,
        /// Number of random slides to apply.
        #[arg(short, long, default_value_t = 40)]
        steps: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { file }) => run_solve(file),
        Some(Command::Scramble { n, steps }) => run_scramble(n, steps),
        // default: solve from stdin
        None => run_solve(None),
    }
}

/// Loads a board, solves it, and prints the result.
fn run_solve(file: Option<PathBuf>) -> ExitCode {
    let board = match load_board(file) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let solver = Solver::new(board);
    print!("{}", report(&solver));
    ExitCode::SUCCESS
}

fn load_board(file: Option<PathBuf>) -> Result<Board, parse::ParseError> {
    match file {
        Some(path) => parse::read_board(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            parse::parse_board(&input)
        }
    }
}

/// Renders the solver outcome: the move count and each board of the
/// solution, or the no-solution line for unsolvable inputs.
fn report(solver: &Solver) -> String {
    match solver.solution() {
        None => "No solution possible\n".to_string(),
        Some(path) => {
            let mut out = format!("Minimum number of moves = {}\n", solver.moves());
            for board in path {
                out.push_str(&board.to_string());
                out.push('\n');
            }
            out
        }
    }
}

/// Prints a scrambled board in the same format `solve` reads.
fn run_scramble(n: usize, steps: usize) -> ExitCode {
    if n < 2 {
        eprintln!("dimension must be at least 2");
        return ExitCode::FAILURE;
    }

    let board = Board::scrambled(n, steps, &mut rand::thread_rng());
    print!("{}", board);
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_a_solved_goal_board() {
        let solver = Solver::new(Board::goal(3));
        insta::assert_snapshot!(report(&solver), @r"
        Minimum number of moves = 0
        3
         1 2 3
         4 5 6
         7 8 0
        ");
    }

    #[test]
    fn report_for_an_unsolvable_board() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]];
        let solver = Solver::new(Board::new(&grid));
        insta::assert_snapshot!(report(&solver), @"No solution possible");
    }

    #[test]
    fn report_lists_one_board_per_move_plus_the_start() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]];
        let solver = Solver::new(Board::new(&grid));
        assert_eq!(solver.moves(), 1);

        let report = report(&solver);
        assert!(report.starts_with("Minimum number of moves = 1\n"));
        // two boards of four lines each, plus a blank separator after each
        assert_eq!(report.lines().count(), 1 + 2 * 5);
    }
}
