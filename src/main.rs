use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_duel::policy::Difficulty;

mod render;
mod session;

fn main() -> Result<()> {
    println!("Welcome to Connect 4\n");

    loop {
        let choice = prompt_number(
            "\nChoose a game mode\n\
             1: Human vs Human\n\
             2: Human vs Computer\n\
             3: Computer vs Computer\n\
             4: Batch statistics\n\
             5: Quit\n> ",
        )?;

        match choice {
            1 => session::human_vs_human()?,
            2 => {
                let difficulty = prompt_difficulty("the computer")?;
                session::human_vs_ai(difficulty)?;
            }
            3 => {
                let red = prompt_difficulty("Red")?;
                let yellow = prompt_difficulty("Yellow")?;
                session::ai_vs_ai(red, yellow)?;
            }
            4 => {
                let red = prompt_difficulty("Red")?;
                let yellow = prompt_difficulty("Yellow")?;
                let games = prompt_number("Number of games to simulate > ")?;
                if games == 0 {
                    println!("Nothing to simulate");
                    continue;
                }
                session::batch_stats(red, yellow, games)?;
            }
            5 => break,
            _ => println!("Unknown game mode"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn prompt_number(prompt: &str) -> Result<usize> {
    let stdin = stdin();
    loop {
        print!("{}", prompt);
        stdout().flush().expect("failed to flush to stdout!");

        let mut input = String::new();
        stdin.read_line(&mut input)?;

        match input.trim().parse::<usize>() {
            Ok(number) => return Ok(number),
            Err(_) => println!("Invalid number: {}", input.trim()),
        }
    }
}

fn prompt_difficulty(label: &str) -> Result<Difficulty> {
    let stdin = stdin();
    loop {
        print!("Choose a difficulty for {} (shallow, medium, deep) > ", label);
        stdout().flush().expect("failed to flush to stdout!");

        let mut input = String::new();
        stdin.read_line(&mut input)?;

        match input.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => println!("{}", err),
        }
    }
}
