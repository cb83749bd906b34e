//! A game of 'Connect 4' against computer opponents of adjustable strength
//!
//! The computer players use a fixed-depth game tree search with alpha-beta
//! pruning and a transposition table, at three difficulty levels.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_duel::board::Position;
//! use connect4_duel::policy::{compute_move, Difficulty};
//!
//!# use anyhow::Result;
//!# fn main() -> Result<()> {
//! // Red holds the bottom of columns 0, 1 and 2; column 3 wins at once
//! let position = Position::from_moves("001126")?;
//! let column = compute_move(position.grid(), position.to_move(), Difficulty::Medium);
//!
//! assert_eq!(column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod transposition_table;

pub mod search;

pub mod policy;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that the given dimensions fit in a u64 for the position key
const_assert!(WIDTH * (HEIGHT + 1) < 64);
