//! Target coordinates of every tile and the goal board they describe.

use crate::{board::Board, error::BoardError};

/// Goal layout for one puzzle instance.
///
/// `row_of[v - 1]` and `col_of[v - 1]` give where tile `v` belongs. The
/// tables are fixed for the lifetime of the model; every solver owns its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalModel {
    size: usize,
    blank_index: usize,
    row_of: Vec<usize>,
    col_of: Vec<usize>,
    board: Board,
}

impl GoalModel {
    /// Goal for a `size`×`size` board with the blank at row-major
    /// `blank_index`. `None`, or an index one past the last cell, puts the
    /// blank in the last cell.
    pub fn new(size: usize, blank_index: Option<usize>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let cells = size * size;
        let elements = cells - 1;
        let blank_index = match blank_index {
            None => elements,
            Some(index) if index == cells => elements,
            Some(index) => index,
        };
        if blank_index >= cells {
            return Err(BoardError::BlankGoalOutOfRange {
                index: blank_index,
                cells,
            });
        }

        let mut row_of = default_rows(size, elements);
        let mut col_of = default_cols(size, elements);
        open_blank_slot(&mut row_of, &mut col_of, blank_index, size);
        let board = goal_board(size, &row_of, &col_of);

        Ok(Self {
            size,
            blank_index,
            row_of,
            col_of,
            board,
        })
    }

    /// The conventional goal: tiles in order, blank in the last cell.
    pub fn standard(size: usize) -> Result<Self, BoardError> {
        Self::new(size, None)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    /// Row and column of the blank in the goal board.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_index / self.size, self.blank_index % self.size)
    }

    pub fn row_of(&self) -> &[usize] {
        &self.row_of
    }

    pub fn col_of(&self) -> &[usize] {
        &self.col_of
    }

    /// Goal position of tile `value` (`1..n²`).
    pub fn position_of(&self, value: u32) -> (usize, usize) {
        let i = value as usize - 1;
        (self.row_of[i], self.col_of[i])
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_standard(&self) -> bool {
        self.blank_index == self.size * self.size - 1
    }
}

fn default_rows(size: usize, elements: usize) -> Vec<usize> {
    (0..elements).map(|i| i / size).collect()
}

fn default_cols(size: usize, elements: usize) -> Vec<usize> {
    (0..elements).map(|i| i % size).collect()
}

// Shift every tile at or after the blank's slot one cell forward.
fn open_blank_slot(row_of: &mut [usize], col_of: &mut [usize], blank_index: usize, size: usize) {
    for (row, col) in row_of.iter_mut().zip(col_of.iter_mut()).skip(blank_index) {
        *col += 1;
        if *col == size {
            *col = 0;
            *row += 1;
        }
    }
}

fn goal_board(size: usize, row_of: &[usize], col_of: &[usize]) -> Board {
    let mut cells = vec![0; size * size];
    for (i, (&row, &col)) in row_of.iter().zip(col_of).enumerate() {
        cells[row * size + col] = i as u32 + 1;
    }
    Board::from_parts(size, cells)
}
