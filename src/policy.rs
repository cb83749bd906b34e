//! Move selection strategies for the three difficulty levels

use anyhow::{anyhow, Error};

use std::str::FromStr;

use crate::board::{Grid, Position, Side};
use crate::search::{negamax, INFINITY};
use crate::transposition_table::TranspositionTable;
use crate::WIDTH;

/// Probability that the shallow strategy switches to a score-tied column
const TIE_SWITCH_PROBABILITY: f64 = 0.08;

/// Returns the columns ordered from the middle outwards, alternating to the
/// left of center first, as the middle columns are usually better moves
pub const fn center_order() -> [usize; WIDTH] {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = (WIDTH / 2) - (i % 2) * (i / 2 + 1) + (1 - i % 2) * (i / 2);
        i += 1;
    }
    order
}

/// A computer skill level
///
/// Each level resolves to a fixed search depth, a top-level column ordering
/// and a tie-break rule:
/// - `Shallow`: depth 3, columns left to right, ties occasionally broken at
///   random so weak play is not fully predictable
/// - `Medium`: depth 5, columns left to right, first best seen wins
/// - `Deep`: depth 8, columns middle outwards (better pruning, central tie
///   bias), first best seen wins
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Difficulty {
    Shallow,
    Medium,
    Deep,
}

impl Difficulty {
    /// The search depth in plies
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Shallow => 3,
            Difficulty::Medium => 5,
            Difficulty::Deep => 8,
        }
    }

    fn candidate_order(self) -> [usize; WIDTH] {
        match self {
            Difficulty::Deep => center_order(),
            _ => std::array::from_fn(|column| column),
        }
    }

    fn randomizes_ties(self) -> bool {
        self == Difficulty::Shallow
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shallow" => Ok(Difficulty::Shallow),
            "medium" => Ok(Difficulty::Medium),
            "deep" => Ok(Difficulty::Deep),
            _ => Err(anyhow!(
                "unknown difficulty '{}', expected shallow, medium or deep",
                s.trim()
            )),
        }
    }
}

/// Selects a move for `to_move` on the given grid
///
/// Returns `None` when no column is playable, to be read as board full /
/// stalemate. A fresh transposition table is used for this one decision.
pub fn compute_move(grid: &Grid, to_move: Side, difficulty: Difficulty) -> Option<usize> {
    let mut table = TranspositionTable::new();
    compute_move_with_table(grid, to_move, difficulty, &mut table)
}

/// [`compute_move`] with a caller-owned transposition table, so one table
/// can serve a whole batch of decisions
pub fn compute_move_with_table(
    grid: &Grid,
    to_move: Side,
    difficulty: Difficulty,
    table: &mut TranspositionTable,
) -> Option<usize> {
    let position = Position::new(*grid, to_move);

    let mut best_score = -INFINITY;
    let mut best_move = None;
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for &column in difficulty.candidate_order().iter() {
        let row = match grid.landing_row(column) {
            Some(row) => row,
            None => continue,
        };

        // probe the candidate with a pure value state, nothing to undo
        let child = position.play(column, row);
        // the child is scored for the opponent over the full window, then
        // negated back to the mover; narrowing the window here would clamp
        // every candidate after a winning one to the same bound and make
        // them look tied with it
        let score = -negamax(&child, -INFINITY, INFINITY, difficulty.depth(), table);

        if score > best_score || best_move.is_none() {
            best_score = score;
            best_move = Some(column);
        } else if score == best_score
            && difficulty.randomizes_ties()
            && fastrand::f64() < TIE_SWITCH_PROBABILITY
        {
            best_move = Some(column);
        }

        if score > alpha {
            alpha = score;
        }
        // early exit across top-level siblings, mirroring the search cutoff
        if alpha >= beta {
            break;
        }
    }

    best_move
}
