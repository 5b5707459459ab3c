//! Text rendering of solve outcomes.

use std::io::{self, Write};

use crossterm::style::{style, Stylize};

use crate::{board::Board, search::SolveOutcome};

/// What to print for each step of a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub boards: bool,
    pub directions: bool,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            boards: true,
            directions: true,
            color: false,
        }
    }
}

/// Writes the move count followed by each move label and the board after it.
pub fn render_outcome<W: Write>(out: &mut W, outcome: &SolveOutcome, options: &RenderOptions) -> io::Result<()> {
    match outcome {
        SolveOutcome::Solved(solution) => {
            writeln!(out, "{}", solution.move_count())?;
            for step in &solution.steps {
                if options.directions {
                    if options.color {
                        writeln!(out, "{}", style(step.movement).cyan().bold())?;
                    } else {
                        writeln!(out, "{}", step.movement)?;
                    }
                }
                if options.boards {
                    render_board(out, &step.board, options.color)?;
                }
            }
        }
        SolveOutcome::Unsolvable => writeln!(out, "BOARD IS NOT SOLVABLE")?,
        SolveOutcome::NotFoundWithinBound { threshold } => {
            writeln!(out, "NOT FOUND (threshold reached {threshold})")?;
        }
    }
    Ok(())
}

/// Writes `board` between separator lines; the blank is dimmed when
/// `color` is set.
pub fn render_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    let width = (board.cells().len() - 1).to_string().len();
    writeln!(out, "{}", "-".repeat(board.size() * (width + 1) + 1))?;
    for row in board.rows() {
        for (i, &value) in row.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            let cell = format!("{value:>width$}");
            if color && value == 0 {
                write!(out, "{}", style(cell).dark_grey())?;
            } else {
                write!(out, "{cell}")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", "-".repeat(board.size() * (width + 1) + 1))?;
    writeln!(out)
}
