//! Immutable board representation for the N-puzzle.
//!
//! A board is one configuration of an N x N grid of tiles, stored row-major
//! with 0 marking the blank cell. Boards never mutate: sliding a tile or
//! taking the twin always produces a new instance. The goal position of
//! tile `v` is row `(v-1)/N`, column `(v-1)%N`.

use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::seq::IteratorRandom;
use rand::Rng;

/// Blank-relative slide offsets, in the order neighbors are produced:
/// the tile below the blank, then above, then right, then left.
const SLIDES: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// One configuration of an N x N sliding-tile puzzle.
///
/// The grid must be a permutation of `0..N*N` with exactly one blank; that
/// is a construction precondition, validated by [`crate::parse`] rather
/// than here. The twin tile pair is picked once per instance and cached,
/// so repeated [`Board::twin`] calls return equal boards.
#[derive(Debug, Clone)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>,
    /// Index of the blank cell in `tiles`.
    blank: usize,
    /// Cell pair swapped by `twin`, chosen lazily and fixed thereafter.
    twin_swap: OnceCell<(usize, usize)>,
}

impl Board {
    /// Creates a board from an N x N grid, copying the caller's rows.
    ///
    /// Preconditions: the grid is square with N >= 2 and its values form a
    /// permutation of `0..N*N`.
    pub fn new(grid: &[Vec<u32>]) -> Board {
        let n = grid.len();
        assert!(n >= 2, "dimension must be at least 2");

        let mut tiles = Vec::with_capacity(n * n);
        for row in grid {
            assert_eq!(row.len(), n, "grid must be square");
            tiles.extend_from_slice(row);
        }
        let blank = tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("grid must contain a blank (0)");

        Board {
            n,
            tiles,
            blank,
            twin_swap: OnceCell::new(),
        }
    }

    /// The solved board of the given dimension: tiles in order, blank last.
    pub fn goal(n: usize) -> Board {
        assert!(n >= 2, "dimension must be at least 2");
        let mut tiles: Vec<u32> = (1..(n * n) as u32).collect();
        tiles.push(0);
        Board {
            n,
            tiles,
            blank: n * n - 1,
            twin_swap: OnceCell::new(),
        }
    }

    /// A solvable board produced by `steps` random slides from the goal.
    pub fn scrambled<R: Rng>(n: usize, steps: usize, rng: &mut R) -> Board {
        let mut board = Board::goal(n);
        for _ in 0..steps {
            if let Some(next) = board.neighbors().choose(rng) {
                board = next;
            }
        }
        board
    }

    /// Board dimension N.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Tile value at the given cell; 0 is the blank.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.n + col]
    }

    /// Number of tiles out of place (the blank is never counted).
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != 0 && tile as usize != i + 1)
            .count() as u32
    }

    /// Sum of row and column offsets of every tile from its goal cell.
    ///
    /// Admissible for single-tile slides: each slide moves one tile one
    /// cell, so this never overestimates the remaining move count.
    pub fn manhattan(&self) -> u32 {
        let n = self.n;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(i, &tile)| {
                let goal = tile as usize - 1;
                ((i / n).abs_diff(goal / n) + (i % n).abs_diff(goal % n)) as u32
            })
            .sum()
    }

    /// Whether every tile is in its goal cell.
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// The 2-4 boards reachable by sliding one tile into the blank.
    ///
    /// The order is fixed per board (below, above, right, left of the
    /// blank, skipping slides that would leave the grid); each call
    /// returns a fresh iterator.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            next_slide: 0,
        }
    }

    /// A board differing from this one by one swap of two non-blank tiles.
    ///
    /// Exactly one of a board and its twin is solvable, which is what lets
    /// the solver detect unsolvable inputs. The swapped pair is chosen on
    /// first call and memoized, so every call yields an equal board.
    pub fn twin(&self) -> Board {
        let &(a, b) = self.twin_swap.get_or_init(|| self.adjacent_nonblank_pair());
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Board {
            n: self.n,
            tiles,
            blank: self.blank,
            twin_swap: OnceCell::new(),
        }
    }

    /// First horizontally adjacent pair of non-blank cells, row-major.
    ///
    /// One exists for any N >= 2: the blank occupies a single cell, so
    /// some row holds two adjacent non-blank tiles.
    fn adjacent_nonblank_pair(&self) -> (usize, usize) {
        for row in 0..self.n {
            let start = row * self.n;
            for cell in start..start + self.n - 1 {
                if self.tiles[cell] != 0 && self.tiles[cell + 1] != 0 {
                    return (cell, cell + 1);
                }
            }
        }
        unreachable!("an N >= 2 board has two adjacent non-blank tiles in some row")
    }

    /// New board with the tile at `from` slid into the blank cell.
    fn slide_from(&self, from: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, from);
        Board {
            n: self.n,
            tiles,
            blank: from,
            twin_swap: OnceCell::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.n == other.n && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    /// Dimension on the first line, then each row with one leading space
    /// per tile value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n) {
            for &tile in row {
                write!(f, " {}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the legal single-slide successors of one board.
pub struct Neighbors<'a> {
    board: &'a Board,
    next_slide: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let n = self.board.n as isize;
        let blank_row = (self.board.blank / self.board.n) as isize;
        let blank_col = (self.board.blank % self.board.n) as isize;

        while self.next_slide < SLIDES.len() {
            let (dr, dc) = SLIDES[self.next_slide];
            self.next_slide += 1;

            let (row, col) = (blank_row + dr, blank_col + dc);
            if (0..n).contains(&row) && (0..n).contains(&col) {
                return Some(self.board.slide_from((row * n + col) as usize));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: &[&[u32]]) -> Board {
        let grid: Vec<Vec<u32>> = rows.iter().map(|row| row.to_vec()).collect();
        Board::new(&grid)
    }

    /// Number of cells where the two boards disagree.
    fn differing_cells(a: &Board, b: &Board) -> usize {
        let n = a.dimension();
        (0..n * n)
            .filter(|&i| a.tile(i / n, i % n) != b.tile(i / n, i % n))
            .count()
    }

    #[test]
    fn goal_board_metrics_are_zero() {
        let goal = Board::goal(3);
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
        assert!(goal.is_goal());
    }

    #[test]
    fn metrics_on_the_classic_instance() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);
        assert!(!b.is_goal());
    }

    #[test]
    fn manhattan_dominates_hamming() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let b = Board::scrambled(3, 30, &mut rng);
            assert!(b.manhattan() >= b.hamming());
            assert_eq!(b.manhattan() == 0, b.hamming() == 0);
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = board(&[&[1, 0], &[3, 2]]);
        let b = board(&[&[1, 0], &[3, 2]]);
        let c = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, c);
    }

    #[test]
    fn neighbor_count_depends_on_blank_position() {
        let corner = board(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(corner.neighbors().count(), 2);

        let edge = board(&[&[1, 0, 2], &[3, 4, 5], &[6, 7, 8]]);
        assert_eq!(edge.neighbors().count(), 3);

        let center = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(center.neighbors().count(), 4);
    }

    #[test]
    fn neighbors_differ_by_exactly_one_slide() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        for neighbor in b.neighbors() {
            assert_eq!(neighbor.dimension(), b.dimension());
            // one slide touches the blank cell and one tile cell
            assert_eq!(differing_cells(&b, &neighbor), 2);
            assert_ne!(neighbor, b);
        }
    }

    #[test]
    fn neighbors_are_restartable_and_distinct() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let first: Vec<Board> = b.neighbors().collect();
        let second: Vec<Board> = b.neighbors().collect();
        assert_eq!(first, second);

        for (i, left) in first.iter().enumerate() {
            for right in &first[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn twin_swaps_one_pair_of_nonblank_tiles() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let twin = b.twin();

        assert_eq!(differing_cells(&b, &twin), 2);
        let n = b.dimension();
        for row in 0..n {
            for col in 0..n {
                if b.tile(row, col) != twin.tile(row, col) {
                    assert_ne!(b.tile(row, col), 0);
                    assert_ne!(twin.tile(row, col), 0);
                }
            }
        }
    }

    #[test]
    fn twin_is_memoized_per_instance() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        assert_eq!(b.twin(), b.twin());
    }

    #[test]
    fn scrambled_board_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Board::scrambled(4, 60, &mut rng);
        assert_eq!(b.dimension(), 4);

        let mut values: Vec<u32> = (0..16).map(|i| b.tile(i / 4, i % 4)).collect();
        values.sort_unstable();
        assert_eq!(values, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn display_prints_dimension_then_rows() {
        insta::assert_snapshot!(Board::goal(3).to_string(), @r"
        3
         1 2 3
         4 5 6
         7 8 0
        ");
    }
}
