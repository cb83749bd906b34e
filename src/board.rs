//! Array-based board state for a game of Connect 4

use anyhow::{anyhow, Result};

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    /// Returns the opposing side
    pub fn other(self) -> Self {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Red => Cell::Red,
            Side::Yellow => Cell::Yellow,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Yellow => write!(f, "Yellow"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Side::Red),
            Cell::Yellow => Some(Side::Yellow),
        }
    }
}

/// The raw playing grid
///
/// Cells are stored row-major with row 0 at the top. Columns fill from the
/// bottom up with no gaps. `Grid` is a plain value; every update returns a
/// new grid rather than mutating in place.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// A move is legal iff the column is in range and its top cell is empty
    pub fn is_legal_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column] == Cell::Empty
    }

    /// The lowest empty row of a column, or `None` if the column is full
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][column] == Cell::Empty)
    }

    /// Drops a piece into a column for the given side
    ///
    /// Returns the updated grid and the row the piece landed in, or an error
    /// if the column is out of range or full.
    pub fn drop_piece(&self, column: usize, side: Side) -> Result<(Grid, usize)> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        let row = self
            .landing_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;

        let mut next = *self;
        next.cells[row][column] = side.cell();
        Ok((next, row))
    }

    /// Scans the whole grid for a completed run of 4
    ///
    /// Every occupied cell is checked against the four runs starting at it:
    /// rightwards, downwards and both downward diagonals. The first side
    /// found with such a run is returned.
    pub fn winner(&self) -> Option<Side> {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let cell = self.cells[row][column];
                let side = match cell.side() {
                    Some(side) => side,
                    None => continue,
                };

                // horizontal
                if column + 3 < WIDTH && (1..4).all(|i| self.cells[row][column + i] == cell) {
                    return Some(side);
                }
                // vertical
                if row + 3 < HEIGHT && (1..4).all(|i| self.cells[row + i][column] == cell) {
                    return Some(side);
                }
                // diagonal down-right
                if row + 3 < HEIGHT
                    && column + 3 < WIDTH
                    && (1..4).all(|i| self.cells[row + i][column + i] == cell)
                {
                    return Some(side);
                }
                // diagonal down-left
                if row + 3 < HEIGHT
                    && column >= 3
                    && (1..4).all(|i| self.cells[row + i][column - i] == cell)
                {
                    return Some(side);
                }
            }
        }
        None
    }

    pub fn has_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// True iff no column can take another piece
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| self.cells[0][column] != Cell::Empty)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// A grid together with the side to move next
///
/// `Position` is immutable: applying a move builds a new position, so the
/// search can branch from one ancestor state without aliasing concerns.
#[derive(Copy, Clone, Debug)]
pub struct Position {
    grid: Grid,
    to_move: Side,
}

impl Position {
    pub fn new(grid: Grid, to_move: Side) -> Self {
        Self { grid, to_move }
    }

    /// Builds a position by playing out a string of 0-indexed columns,
    /// Red moving first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut position = Self::new(Grid::new(), Side::Red);

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    position = position.apply(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(position)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// All playable columns in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.grid.is_legal_move(column))
            .collect()
    }

    /// Plays a move for the side to move, returning the resulting position
    pub fn apply(&self, column: usize) -> Result<Self> {
        let (grid, _row) = self.grid.drop_piece(column, self.to_move)?;
        Ok(Self {
            grid,
            to_move: self.to_move.other(),
        })
    }

    /// Unchecked variant of [`apply`](Self::apply) for moves already proven
    /// legal, taking the precomputed landing row
    pub(crate) fn play(&self, column: usize, row: usize) -> Self {
        let mut grid = self.grid;
        grid.cells[row][column] = self.to_move.cell();
        Self {
            grid,
            to_move: self.to_move.other(),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.grid.winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.grid.is_full()
    }

    /// Canonical key for the transposition table
    ///
    /// Bitboard encoding with `HEIGHT + 1` bits per column: the sum of the
    /// mover's piece mask and the occupancy mask. Unique per placement
    /// because columns fill bottom-up, and distinct for the same placement
    /// with a different side to move.
    pub fn key(&self) -> u64 {
        let mut mover_mask = 0u64;
        let mut occupancy_mask = 0u64;

        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let cell = self.grid.cells[row][column];
                if cell == Cell::Empty {
                    continue;
                }
                // the bottom row takes the lowest bit of each column
                let bit = 1 << (column * (HEIGHT + 1) + (HEIGHT - 1 - row));
                occupancy_mask |= bit;
                if cell == self.to_move.cell() {
                    mover_mask |= bit;
                }
            }
        }
        mover_mask + occupancy_mask
    }
}
