//! Reading boards from the conventional text format.
//!
//! The format is the dimension N on the first line, followed by N lines of
//! N space-separated tile values with 0 for the blank. A board's `Display`
//! output parses back to an equal board. All grid validation lives here;
//! [`crate::board::Board`] itself treats a well-formed grid as a
//! precondition.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::board::Board;

/// Reasons a board description is rejected.
#[derive(Debug)]
pub enum ParseError {
    /// The input held no dimension line.
    MissingDimension,
    /// The dimension was below the 2x2 minimum.
    DimensionTooSmall(usize),
    /// A token could not be read as a number.
    InvalidToken(String),
    /// The tile list was shorter or longer than N*N.
    WrongCellCount { expected: usize, found: usize },
    /// A value outside `0..N*N`, or one that appeared twice.
    NotAPermutation(u32),
    /// The board file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingDimension => write!(f, "missing board dimension"),
            ParseError::DimensionTooSmall(n) => {
                write!(f, "dimension {} is below the 2x2 minimum", n)
            }
            ParseError::InvalidToken(token) => write!(f, "invalid tile value '{}'", token),
            ParseError::WrongCellCount { expected, found } => {
                write!(f, "expected {} tile values, found {}", expected, found)
            }
            ParseError::NotAPermutation(value) => {
                write!(f, "tile value {} is out of range or repeated", value)
            }
            ParseError::Io(err) => write!(f, "failed to read board: {}", err),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> ParseError {
        ParseError::Io(err)
    }
}

/// Parses a board from the text format.
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace();

    let first = tokens.next().ok_or(ParseError::MissingDimension)?;
    let n: usize = first
        .parse()
        .map_err(|_| ParseError::InvalidToken(first.to_string()))?;
    if n < 2 {
        return Err(ParseError::DimensionTooSmall(n));
    }

    let mut values = Vec::with_capacity(n * n);
    for token in tokens {
        let value: u32 = token
            .parse()
            .map_err(|_| ParseError::InvalidToken(token.to_string()))?;
        values.push(value);
    }
    if values.len() != n * n {
        return Err(ParseError::WrongCellCount {
            expected: n * n,
            found: values.len(),
        });
    }

    let mut seen = vec![false; n * n];
    for &value in &values {
        let slot = value as usize;
        if slot >= n * n || seen[slot] {
            return Err(ParseError::NotAPermutation(value));
        }
        seen[slot] = true;
    }

    let grid: Vec<Vec<u32>> = values.chunks(n).map(|row| row.to_vec()).collect();
    Ok(Board::new(&grid))
}

/// Reads and parses a board file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let contents = fs::read_to_string(path)?;
    parse_board(&contents)
}
