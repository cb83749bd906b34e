#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};

    use crate::board::{Grid, Position, Side};
    use crate::eval;
    use crate::policy::{center_order, compute_move, compute_move_with_table, Difficulty};
    use crate::search::{negamax, INFINITY};
    use crate::transposition_table::TranspositionTable;
    use crate::HEIGHT;

    // builds a grid from a picture, row 0 at the top; pieces must rest on
    // something, as they are dropped bottom row first
    fn grid_from_rows(rows: [&str; HEIGHT]) -> Result<Grid> {
        let mut grid = Grid::new();
        for row in rows.iter().rev() {
            for (column, tile) in row.chars().enumerate() {
                let side = match tile {
                    'R' => Side::Red,
                    'Y' => Side::Yellow,
                    '.' => continue,
                    _ => return Err(anyhow!("unknown tile '{}'", tile)),
                };
                let (next, _) = grid.drop_piece(column, side)?;
                grid = next;
            }
        }
        Ok(grid)
    }

    fn swap_rows(rows: [&str; HEIGHT]) -> [String; HEIGHT] {
        rows.map(|row| {
            row.chars()
                .map(|tile| match tile {
                    'R' => 'Y',
                    'Y' => 'R',
                    other => other,
                })
                .collect()
        })
    }

    // a filled board with no run of 4 anywhere: two-row colour bands with
    // alternating columns, phase-shifted every second band
    const DRAWN_BOARD: [&str; HEIGHT] = [
        "RYRYRYR",
        "RYRYRYR",
        "YRYRYRY",
        "YRYRYRY",
        "RYRYRYR",
        "RYRYRYR",
    ];

    #[test]
    pub fn horizontal_win_detected() -> Result<()> {
        // right against the board edge
        let grid = grid_from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...RRRR",
        ])?;
        assert_eq!(grid.winner(), Some(Side::Red));
        assert!(grid.has_winner(Side::Red));
        assert!(!grid.has_winner(Side::Yellow));
        Ok(())
    }

    #[test]
    pub fn vertical_win_detected() -> Result<()> {
        let grid = grid_from_rows([
            ".......",
            ".......",
            "Y......",
            "Y......",
            "Y......",
            "Y......",
        ])?;
        assert_eq!(grid.winner(), Some(Side::Yellow));
        Ok(())
    }

    #[test]
    pub fn diagonal_down_right_win_detected() -> Result<()> {
        let grid = grid_from_rows([
            ".......",
            ".......",
            "R......",
            "YR.....",
            "YYR....",
            "YYYR...",
        ])?;
        assert_eq!(grid.winner(), Some(Side::Red));
        Ok(())
    }

    #[test]
    pub fn diagonal_down_left_win_detected() -> Result<()> {
        let grid = grid_from_rows([
            ".......",
            ".......",
            "......R",
            ".....RY",
            "....RYY",
            "...RYYY",
        ])?;
        assert_eq!(grid.winner(), Some(Side::Red));
        Ok(())
    }

    #[test]
    pub fn short_runs_are_not_wins() -> Result<()> {
        let grid = grid_from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "...Y...",
            "RRRYY..",
        ])?;
        assert_eq!(grid.winner(), None);
        Ok(())
    }

    #[test]
    pub fn empty_board_basics() {
        let position = Position::new(Grid::new(), Side::Red);
        assert_eq!(position.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(!position.is_terminal());
        assert_eq!(eval::evaluate(position.grid()), 0);
    }

    #[test]
    pub fn drawn_board_is_terminal_and_scores_zero() -> Result<()> {
        let grid = grid_from_rows(DRAWN_BOARD)?;
        let position = Position::new(grid, Side::Red);

        assert!(grid.is_full());
        assert_eq!(grid.winner(), None);
        assert!(position.is_terminal());
        assert_eq!(eval::evaluate(&grid), 0);

        // the no-move sentinel, at every difficulty
        for difficulty in [Difficulty::Shallow, Difficulty::Medium, Difficulty::Deep] {
            assert_eq!(compute_move(&grid, Side::Red, difficulty), None);
        }
        Ok(())
    }

    #[test]
    pub fn full_column_rejected() -> Result<()> {
        let mut grid = Grid::new();
        for i in 0..HEIGHT {
            let side = if i % 2 == 0 { Side::Red } else { Side::Yellow };
            let (next, row) = grid.drop_piece(2, side)?;
            assert_eq!(row, HEIGHT - 1 - i);
            grid = next;
        }

        assert!(!grid.is_legal_move(2));
        assert!(grid.drop_piece(2, Side::Red).is_err());
        assert!(grid.drop_piece(7, Side::Red).is_err());

        let position = Position::new(grid, Side::Red);
        assert!(!position.legal_moves().contains(&2));
        assert!(position.apply(2).is_err());
        Ok(())
    }

    #[test]
    pub fn winning_move_found_at_every_difficulty() -> Result<()> {
        // Red holds columns 0..=2 on the bottom row, column 3 wins at once
        let position = Position::from_moves("001126")?;
        assert_eq!(position.to_move(), Side::Red);

        for difficulty in [Difficulty::Shallow, Difficulty::Medium, Difficulty::Deep] {
            assert_eq!(
                compute_move(position.grid(), position.to_move(), difficulty),
                Some(3),
                "difficulty {:?} missed the winning column",
                difficulty
            );
        }
        Ok(())
    }

    // unpruned, unmemoized full-window search as ground truth
    fn reference_negamax(position: &Position, depth: u32) -> Result<i32> {
        if position.is_terminal() || depth == 0 {
            let score = eval::evaluate(position.grid());
            return Ok(match position.to_move() {
                Side::Red => score,
                Side::Yellow => -score,
            });
        }
        let mut best = -INFINITY;
        for column in position.legal_moves() {
            let child = position.apply(column)?;
            best = best.max(-reference_negamax(&child, depth - 1)?);
        }
        Ok(best)
    }

    #[test]
    pub fn pruning_matches_full_window_search() -> Result<()> {
        let fixtures = [
            Position::new(Grid::new(), Side::Red),
            Position::from_moves("3342")?,
            Position::from_moves("001126")?,
        ];

        for position in &fixtures {
            for depth in 1..=2 {
                let mut table = TranspositionTable::new();
                let pruned = negamax(position, -INFINITY, INFINITY, depth, &mut table);
                let full = reference_negamax(position, depth)?;
                assert_eq!(pruned, full, "depth {} diverged", depth);
            }
        }
        Ok(())
    }

    #[test]
    pub fn side_swap_antisymmetry() -> Result<()> {
        let rows = [
            ".......",
            ".......",
            ".......",
            "..Y....",
            "..RY...",
            ".RRYY..",
        ];
        let position = Position::new(grid_from_rows(rows)?, Side::Red);

        let swapped = swap_rows(rows);
        let swapped: [&str; HEIGHT] = std::array::from_fn(|i| swapped[i].as_str());
        let mirrored = Position::new(grid_from_rows(swapped)?, Side::Yellow);

        // both scores are oriented to the side about to move, so swapping
        // every piece and the mover must leave the score unchanged
        for depth in 0..=3 {
            let mut table = TranspositionTable::new();
            let score = negamax(&position, -INFINITY, INFINITY, depth, &mut table);
            let mut table = TranspositionTable::new();
            let mirrored_score = negamax(&mirrored, -INFINITY, INFINITY, depth, &mut table);
            assert_eq!(score, mirrored_score, "depth {} broke the symmetry", depth);
        }
        Ok(())
    }

    #[test]
    pub fn deterministic_strategies_are_idempotent() -> Result<()> {
        let position = Position::from_moves("3344")?;

        for difficulty in [Difficulty::Medium, Difficulty::Deep] {
            let first = compute_move(position.grid(), position.to_move(), difficulty);
            let second = compute_move(position.grid(), position.to_move(), difficulty);
            assert!(first.is_some());
            assert_eq!(first, second);
        }
        Ok(())
    }

    #[test]
    pub fn proximity_rewards_longer_runs() -> Result<()> {
        let grid = grid_from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR...Y",
        ])?;

        // each red cell sits in a run of 3
        assert_eq!(eval::cell_proximity(&grid, HEIGHT - 1, 1, Side::Red), 9);
        // the empty landing cell of column 3 would extend the run to 4
        assert_eq!(eval::cell_proximity(&grid, HEIGHT - 1, 3, Side::Red), 16);
        // the lone yellow piece counts itself only
        assert_eq!(eval::cell_proximity(&grid, HEIGHT - 1, 6, Side::Yellow), 1);

        // 3 cells at 9 each for red, minus 1 for yellow
        assert_eq!(eval::evaluate(&grid), 26);
        Ok(())
    }

    #[test]
    pub fn position_keys_track_placement_and_mover() -> Result<()> {
        // same placement reached through different move orders
        let first = Position::from_moves("0123")?;
        let second = Position::from_moves("2301")?;
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.key(), second.key());

        // same placement, different side to move
        let other_mover = Position::new(*first.grid(), first.to_move().other());
        assert_ne!(first.key(), other_mover.key());
        Ok(())
    }

    #[test]
    pub fn center_order_alternates_left_of_center_first() {
        // the deep strategy is strictly greedy, so the iteration order
        // decides every tie between mirror columns
        assert_eq!(center_order(), [3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    pub fn shared_table_fills_during_a_decision() {
        let grid = Grid::new();
        let mut table = TranspositionTable::new();
        assert!(table.is_empty());

        let column = compute_move_with_table(&grid, Side::Red, Difficulty::Medium, &mut table);
        assert!(column.is_some());
        assert!(table.len() > 0);
    }

    #[test]
    pub fn apply_stacks_and_flips_the_mover() -> Result<()> {
        let position = Position::new(Grid::new(), Side::Red);
        let next = position.apply(4)?;

        assert_eq!(next.to_move(), Side::Yellow);
        assert_eq!(next.grid().landing_row(4), Some(HEIGHT - 2));
        assert_eq!(position.grid().landing_row(4), Some(HEIGHT - 1));
        Ok(())
    }
}
