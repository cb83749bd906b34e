use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_duel::board::{Cell, Grid};
use connect4_duel::{HEIGHT, WIDTH};

/// Draws the grid as coloured tiles with a column index header
pub fn draw_board(grid: &Grid) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..WIDTH).map(|column| column.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match grid.cell(row, column) {
                        Cell::Red => Color::Red,
                        Cell::Yellow => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
