//! Fixed-depth negamax search with alpha-beta pruning and memoization

use crate::board::{Position, Side};
use crate::eval;
use crate::transposition_table::TranspositionTable;
use crate::WIDTH;

/// Window bound for a full-width search; negating it must not overflow
pub const INFINITY: i32 = i32::MAX;

struct MoveSorter {
    size: usize,
    // column, landing row and ordering score
    moves: [(usize, usize, i32); WIDTH],
}

impl MoveSorter {
    pub fn new() -> Self {
        Self {
            size: 0,
            moves: [(0, 0, 0); WIDTH],
        }
    }
    pub fn push(&mut self, column: usize, row: usize, score: i32) {
        let mut pos = self.size;
        self.size += 1;
        while pos != 0 && self.moves[pos - 1].2 > score {
            self.moves[pos] = self.moves[pos - 1];
            pos -= 1;
        }
        self.moves[pos] = (column, row, score);
    }
}
impl Iterator for MoveSorter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self.size {
            0 => None,
            _ => {
                self.size -= 1;
                Some((self.moves[self.size].0, self.moves[self.size].1))
            }
        }
    }
}

/// Performs game tree search to a fixed depth
///
/// Returns the score of the position from the perspective of the side to
/// move: positive means the mover stands better. The recursion terminates on
/// terminal positions or at `depth` 0, where the leaf is scored by the
/// positional heuristic oriented to the mover.
///
/// # Notes
/// Fail-hard alpha-beta: a beta cutoff returns `beta` itself, not the
/// measured child score. This changes which exact values end up cached but
/// not which moves the policies pick.
pub fn negamax(
    position: &Position,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    table: &mut TranspositionTable,
) -> i32 {
    if position.is_terminal() || depth == 0 {
        let score = eval::evaluate(position.grid());
        return match position.to_move() {
            Side::Red => score,
            Side::Yellow => -score,
        };
    }

    // a cache hit skips both the recursion and the window update
    let key = position.key();
    if let Some(score) = table.get(key) {
        return score;
    }

    // order moves by the proximity score of their landing cell, a one-ply
    // heuristic that tries promising columns first to tighten pruning
    let mut moves = MoveSorter::new();
    for column in 0..WIDTH {
        if let Some(row) = position.grid().landing_row(column) {
            moves.push(
                column,
                row,
                eval::cell_proximity(position.grid(), row, column, position.to_move()),
            );
        }
    }

    // search the next level of the tree
    for (column, row) in moves {
        let child = position.play(column, row);
        // the search window is flipped for the other player
        let score = -negamax(&child, -beta, -alpha, depth - 1, table);

        if score > alpha {
            alpha = score;
        }
        // a perfect opponent will not let the game reach this branch
        if score >= beta {
            return beta;
        }
    }

    table.set(key, alpha);
    alpha
}
