//! N-puzzle Solver Library
//!
//! Solves sliding-tile puzzles (the 8-puzzle and its larger N x N
//! relatives) with A* search over immutable board states. Solvability is
//! decided by racing the search against a "twin" of the initial board
//! (two non-blank tiles swapped): exactly one of the pair can reach the
//! goal, so the race always terminates and no separate parity computation
//! is needed.

pub mod board;
pub mod parse;
pub mod solver;

pub use board::Board;
pub use parse::{parse_board, read_board, ParseError};
pub use solver::Solver;
