use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use connect4_duel::board::{Grid, Side};
use connect4_duel::policy::{compute_move, Difficulty};

use crate::render::draw_board;

/// Outcome of one finished game
enum Outcome {
    Win(Side),
    Draw,
}

pub fn human_vs_human() -> Result<()> {
    let mut grid = Grid::new();
    let mut to_move = Side::Red;

    draw_board(&grid)?;
    loop {
        if grid.is_full() {
            println!("Draw!");
            break;
        }

        let column = prompt_column(to_move)?;
        match grid.drop_piece(column, to_move) {
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
            Ok((next, _row)) => grid = next,
        }
        draw_board(&grid)?;

        if grid.has_winner(to_move) {
            println!("{} wins!", to_move);
            break;
        }
        to_move = to_move.other();
    }
    Ok(())
}

pub fn human_vs_ai(difficulty: Difficulty) -> Result<()> {
    let mut grid = Grid::new();
    let mut to_move = Side::Red;

    draw_board(&grid)?;
    loop {
        if grid.is_full() {
            println!("Draw!");
            break;
        }

        // the human plays Red
        let column = if to_move == Side::Red {
            let column = prompt_column(to_move)?;
            match grid.drop_piece(column, to_move) {
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
                Ok((next, _row)) => grid = next,
            }
            column
        } else {
            println!("Computer is thinking...");
            stdout().flush().expect("Failed to flush to stdout!");

            match compute_move(&grid, to_move, difficulty) {
                None => {
                    println!("Draw!");
                    break;
                }
                Some(column) => {
                    let (next, _row) = grid.drop_piece(column, to_move)?;
                    grid = next;
                    column
                }
            }
        };
        println!("{} plays column {}", to_move, column);
        draw_board(&grid)?;

        if grid.has_winner(to_move) {
            println!("{} wins!", to_move);
            break;
        }
        to_move = to_move.other();
    }
    Ok(())
}

pub fn ai_vs_ai(red: Difficulty, yellow: Difficulty) -> Result<()> {
    let mut grid = Grid::new();
    let mut to_move = Side::Red;

    draw_board(&grid)?;
    loop {
        let difficulty = match to_move {
            Side::Red => red,
            Side::Yellow => yellow,
        };

        let column = match compute_move(&grid, to_move, difficulty) {
            None => {
                println!("Draw!");
                break;
            }
            Some(column) => column,
        };
        let (next, _row) = grid.drop_piece(column, to_move)?;
        grid = next;

        println!("{} plays column {}", to_move, column);
        draw_board(&grid)?;

        if grid.has_winner(to_move) {
            println!("{} wins!", to_move);
            break;
        }
        if grid.is_full() {
            println!("Draw!");
            break;
        }
        to_move = to_move.other();
    }
    Ok(())
}

/// Plays `games` computer-vs-computer games back to back and reports
/// cumulative win counts, ratios and timing
pub fn batch_stats(red: Difficulty, yellow: Difficulty, games: usize) -> Result<()> {
    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let mut red_wins = 0usize;
    let mut yellow_wins = 0usize;
    let mut draws = 0usize;

    let start = Instant::now();
    for _ in 0..games {
        match play_one_game(red, yellow)? {
            Outcome::Win(Side::Red) => red_wins += 1,
            Outcome::Win(Side::Yellow) => yellow_wins += 1,
            Outcome::Draw => draws += 1,
        }
        progress.inc(1);
    }
    progress.finish();

    let total = start.elapsed();
    println!("Red ({:?}) wins: {}", red, red_wins);
    println!("Yellow ({:?}) wins: {}", yellow, yellow_wins);
    println!("Draws: {}", draws);
    println!("Red win ratio: {:.3}", red_wins as f64 / games as f64);
    println!("Yellow win ratio: {:.3}", yellow_wins as f64 / games as f64);
    println!("Total time: {:.2}s", total.as_secs_f64());
    println!(
        "Mean time per game: {:.3}s",
        total.as_secs_f64() / games as f64
    );
    Ok(())
}

fn play_one_game(red: Difficulty, yellow: Difficulty) -> Result<Outcome> {
    let mut grid = Grid::new();
    let mut to_move = Side::Red;

    loop {
        let difficulty = match to_move {
            Side::Red => red,
            Side::Yellow => yellow,
        };
        let column = match compute_move(&grid, to_move, difficulty) {
            None => return Ok(Outcome::Draw),
            Some(column) => column,
        };

        let (next, _row) = grid.drop_piece(column, to_move)?;
        grid = next;

        if grid.has_winner(to_move) {
            return Ok(Outcome::Win(to_move));
        }
        if grid.is_full() {
            return Ok(Outcome::Draw);
        }
        to_move = to_move.other();
    }
}

// re-prompts until a number parses; range and fullness are rejected by the
// caller's drop attempt
fn prompt_column(to_move: Side) -> Result<usize> {
    let stdin = stdin();
    loop {
        print!("{}, choose a column (0-6) > ", to_move);
        stdout().flush().expect("Failed to flush to stdout!");

        let mut input = String::new();
        stdin.read_line(&mut input)?;

        match input.trim().parse::<usize>() {
            Ok(column) => return Ok(column),
            Err(_) => println!("Invalid number: {}", input.trim()),
        }
    }
}
