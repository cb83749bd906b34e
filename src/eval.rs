//! Positional evaluation by line-counting around occupied cells

use crate::board::{Cell, Grid, Side};
use crate::{HEIGHT, WIDTH};

/// The score of a won position, from the winner's perspective
pub const WIN_SCORE: i32 = 1000;

/// Scores a grid from Red's perspective
///
/// A decided game scores `±WIN_SCORE`, a full board with no winner scores 0.
/// Otherwise every occupied cell contributes its proximity score, positive
/// for Red and negative for Yellow. Only meant for non-terminal leaves at the
/// search depth limit; terminal states fall out of the winner check reused
/// here.
pub fn evaluate(grid: &Grid) -> i32 {
    if let Some(winner) = grid.winner() {
        return match winner {
            Side::Red => WIN_SCORE,
            Side::Yellow => -WIN_SCORE,
        };
    }
    if grid.is_full() {
        return 0;
    }

    let mut score = 0;
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            match grid.cell(row, column) {
                Cell::Red => score += cell_proximity(grid, row, column, Side::Red),
                Cell::Yellow => score -= cell_proximity(grid, row, column, Side::Yellow),
                Cell::Empty => {}
            }
        }
    }
    score
}

/// Proximity score of a single cell for one side
///
/// Takes the longest contiguous run of `side`'s pieces through the cell,
/// counted independently along the horizontal, vertical and both diagonal
/// axes, and squares it. Squaring rewards cells embedded in longer runs
/// super-linearly, which steers the search towards stacked threats. The cell
/// itself always counts as part of the run, so this also scores the empty
/// landing cell of a candidate move as if the piece were already placed.
pub fn cell_proximity(grid: &Grid, row: usize, column: usize, side: Side) -> i32 {
    let horizontal = run_length(grid, row, column, side, 0, 1);
    let vertical = run_length(grid, row, column, side, 1, 0);
    let diagonal_down_right = run_length(grid, row, column, side, 1, 1);
    let diagonal_down_left = run_length(grid, row, column, side, 1, -1);

    let longest = horizontal
        .max(vertical)
        .max(diagonal_down_right)
        .max(diagonal_down_left);
    longest * longest
}

// run through (row, column) along one axis, walking both ways
fn run_length(grid: &Grid, row: usize, column: usize, side: Side, dr: i32, dc: i32) -> i32 {
    1 + walk(grid, row, column, side, dr, dc) + walk(grid, row, column, side, -dr, -dc)
}

fn walk(grid: &Grid, row: usize, column: usize, side: Side, dr: i32, dc: i32) -> i32 {
    let mut count = 0;
    let mut r = row as i32 + dr;
    let mut c = column as i32 + dc;
    while r >= 0
        && r < HEIGHT as i32
        && c >= 0
        && c < WIDTH as i32
        && grid.cell(r as usize, c as usize) == side.cell()
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
