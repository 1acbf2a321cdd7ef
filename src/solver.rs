//! A* search over board states, with the twin race for solvability.
//!
//! Key design points:
//! - Nodes live in an arena and refer to their predecessor by index,
//!   so the solution path is rebuilt by a reverse walk from the goal
//! - Priority is `moves + manhattan`, computed once per node; ties go
//!   to the deeper node
//! - The only duplicate suppression is skipping a node's own parent
//!   board, which removes length-2 cycles; longer revisits are tolerated
//!   because the admissible heuristic still makes the first goal popped
//!   from a frontier optimal for that frontier

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::board::Board;

/// A* solver for one initial board.
///
/// Construction runs the whole search: the initial board and its twin are
/// explored in lock-step, one pop-and-expand round per side, until one
/// frontier's minimum node holds a goal board. Exactly one of the pair is
/// solvable, so the race terminates for every input; if the twin side wins
/// the initial board is unsolvable.
pub struct Solver {
    path: Option<Vec<Board>>,
}

impl Solver {
    /// Searches for an optimal solution to `initial`.
    pub fn new(initial: Board) -> Solver {
        let mut twin = Search::new(initial.twin());
        let mut real = Search::new(initial);

        let path = loop {
            if real.best_is_goal() {
                break Some(real.path_to_best());
            }
            real.expand_best();

            if twin.best_is_goal() {
                break None;
            }
            twin.expand_best();
        };

        Solver { path }
    }

    /// Whether the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.path.is_some()
    }

    /// Minimum number of slides to the goal, or -1 if unsolvable.
    pub fn moves(&self) -> i32 {
        match &self.path {
            Some(path) => path.len() as i32 - 1,
            None => -1,
        }
    }

    /// The boards of an optimal solution, from the initial board to the
    /// goal inclusive; `None` if the puzzle is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.path.as_deref()
    }
}

/// Search node: the board, its depth, and the arena index of the
/// predecessor (`None` for the root).
struct Node {
    board: Board,
    moves: u32,
    parent: Option<usize>,
}

/// Frontier entry carrying the node's priority, so the heuristic is
/// evaluated once when the node is created.
struct Entry {
    priority: u32,
    moves: u32,
    node: usize,
}

impl Ord for Entry {
    /// Inverted on priority so `BinaryHeap` pops the minimum; among equal
    /// priorities the larger move count wins.
    fn cmp(&self, other: &Entry) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.moves.cmp(&other.moves))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Entry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Entry) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// One priority-ordered frontier plus the arena of every node it created.
struct Search {
    arena: Vec<Node>,
    frontier: BinaryHeap<Entry>,
}

impl Search {
    fn new(root: Board) -> Search {
        let priority = root.manhattan();
        let arena = vec![Node {
            board: root,
            moves: 0,
            parent: None,
        }];

        let mut frontier = BinaryHeap::new();
        frontier.push(Entry {
            priority,
            moves: 0,
            node: 0,
        });
        Search { arena, frontier }
    }

    /// The current minimum-priority entry, without popping it.
    ///
    /// The frontier never empties: a board has 2-4 neighbors and at most
    /// one is its parent, so every expansion pushes at least one entry.
    fn best(&self) -> &Entry {
        self.frontier.peek().expect("frontier exhausted")
    }

    fn best_is_goal(&self) -> bool {
        self.arena[self.best().node].board.is_goal()
    }

    /// One A* round: pop the minimum node and push every neighbor except
    /// the board it was reached from.
    fn expand_best(&mut self) {
        let entry = self.frontier.pop().expect("frontier exhausted");
        let moves = entry.moves + 1;
        let parent = self.arena[entry.node].parent;

        let neighbors: Vec<Board> = self.arena[entry.node].board.neighbors().collect();
        for neighbor in neighbors {
            // never undo the slide that produced this node
            if let Some(parent) = parent {
                if neighbor == self.arena[parent].board {
                    continue;
                }
            }

            let priority = moves + neighbor.manhattan();
            let node = self.arena.len();
            self.arena.push(Node {
                board: neighbor,
                moves,
                parent: Some(entry.node),
            });
            self.frontier.push(Entry {
                priority,
                moves,
                node,
            });
        }
    }

    /// Boards from the root to the current minimum node, rebuilt by
    /// walking the predecessor chain backward.
    fn path_to_best(&self) -> Vec<Board> {
        let mut path = Vec::new();
        let mut cursor = Some(self.best().node);
        while let Some(index) = cursor {
            let node = &self.arena[index];
            path.push(node.board.clone());
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
