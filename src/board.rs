use rand::{seq::SliceRandom, Rng};
use std::{fmt, ops::Index};

use crate::error::BoardError;

/// Direction a tile slides into the blank.
///
/// The label names the displaced tile's motion, not the blank's: when the
/// blank moves up, the tile above it slides down, so the move is `Down`.
///
/// Variants pair with their reverses: `Down`/`Up` and `Right`/`Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Down = 0,
    Up = 1,
    Right = 2,
    Left = 3,
}

impl Move {
    /// Order in which successors are generated: blank up, down, left, right.
    pub const SEARCH_ORDER: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    const LABELS: [&'static str; 4] = ["down", "up", "right", "left"];

    /// The move that undoes this one.
    pub fn opposite(self) -> Self {
        Self::SEARCH_ORDER[self as usize ^ 1]
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A square sliding-tile board stored in row-major order; `0` is the blank.
///
/// Boards are values: moving produces a new board and equality compares
/// every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Builds a board from row-major cells, checking that it is square and
    /// holds every value in `0..n²` exactly once.
    pub fn from_cells(cells: Vec<u32>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::Empty);
        }
        let size = square_side(cells.len()).ok_or(BoardError::NotSquare { cells: cells.len() })?;
        let max = (cells.len() - 1) as u32;
        let mut seen = vec![false; cells.len()];
        for &value in &cells {
            if value > max {
                return Err(BoardError::ValueOutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(BoardError::DuplicateValue { value });
            }
        }
        Ok(Self { size, cells })
    }

    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let size = rows.len();
        let cells: Vec<u32> = rows.iter().flatten().copied().collect();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(BoardError::WrongCellCount {
                expected: size,
                found: row.len(),
            });
        }
        Self::from_cells(cells)
    }

    /// The conventional goal: tiles in row-major order, blank last.
    pub fn solved(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let count = size * size;
        let cells = (1..count as u32).chain(std::iter::once(0)).collect();
        Ok(Self { size, cells })
    }

    /// Wraps cells already known to hold each of `0..size²` once.
    pub(crate) fn from_parts(size: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Random permutation of `goal`'s tiles, redrawn until it can reach `goal`.
    pub fn shuffled<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Self {
        let mut cells = goal.cells.clone();
        loop {
            cells.shuffle(rng);
            let board = Self {
                size: goal.size,
                cells: cells.clone(),
            };
            if crate::solvability::is_solvable_for(&board, goal) {
                return board;
            }
        }
    }

    /// Random walk of `steps` legal moves away from `goal`.
    pub fn scrambled<R: Rng + ?Sized>(goal: &Board, steps: usize, rng: &mut R) -> Self {
        let mut board = goal.clone();
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let candidates: Vec<Move> = Move::SEARCH_ORDER
                .into_iter()
                .filter(|mv| Some(mv.opposite()) != last && board.can_move(*mv))
                .collect();
            let Some(&mv) = candidates.choose(rng) else {
                break;
            };
            board = board.moved(mv).unwrap_or(board);
            last = Some(mv);
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        let index = self.cells.iter().position(|&v| v == 0).unwrap_or(0);
        (index / self.size, index % self.size)
    }

    pub fn can_move(&self, movement: Move) -> bool {
        self.target_of(self.blank(), movement).is_some()
    }

    /// Board after sliding a tile in `movement`'s direction, if one can.
    pub fn moved(&self, movement: Move) -> Option<Self> {
        let blank = self.blank();
        let target = self.target_of(blank, movement)?;
        Some(self.swapped(blank, target))
    }

    /// Copy of this board with the cells at `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a.0 * self.size + a.1, b.0 * self.size + b.1);
        Self {
            size: self.size,
            cells,
        }
    }

    /// Cell the blank at `(row, col)` would swap with when `movement` is
    /// played. The tile comes from the side opposite its direction of travel.
    pub(crate) fn target_of(&self, (row, col): (usize, usize), movement: Move) -> Option<(usize, usize)> {
        let last = self.size - 1;
        match movement {
            Move::Up => (row < last).then(|| (row + 1, col)),
            Move::Down => (row > 0).then(|| (row - 1, col)),
            Move::Left => (col < last).then(|| (row, col + 1)),
            Move::Right => (col > 0).then(|| (row, col - 1)),
        }
    }
}

impl Index<(usize, usize)> for Board {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row * self.size + col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for (i, &val) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn square_side(cells: usize) -> Option<usize> {
    let side = (cells as f64).sqrt().round() as usize;
    (side * side == cells).then_some(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_from_cells_rejects_malformed_boards() {
        assert_eq!(Board::from_cells(vec![]), Err(BoardError::Empty));
        assert_eq!(
            Board::from_cells(vec![0, 1, 2]),
            Err(BoardError::NotSquare { cells: 3 })
        );
        assert_eq!(
            Board::from_cells(vec![0, 1, 2, 4]),
            Err(BoardError::ValueOutOfRange { value: 4, max: 3 })
        );
        assert_eq!(
            Board::from_cells(vec![0, 1, 1, 2]),
            Err(BoardError::DuplicateValue { value: 1 })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Board::from_rows(&[vec![1, 2], vec![3, 0, 4]]).unwrap_err();
        assert_eq!(err, BoardError::WrongCellCount { expected: 2, found: 3 });
    }

    #[test]
    fn test_solved_rejects_empty_size() {
        assert_eq!(Board::solved(0), Err(BoardError::Empty));
        assert_eq!(Board::solved(1).unwrap().cells(), &[0]);
    }

    #[test]
    fn test_solved_board_places_blank_last() {
        let board = Board::solved(3).unwrap();
        assert_eq!(board.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board.blank(), (2, 2));
    }

    #[test]
    fn test_move_labels_follow_the_displaced_tile() {
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();

        // Tile 5 below the blank slides up.
        let up = board.moved(Move::Up).unwrap();
        assert_eq!(up.cells(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(up.blank(), (2, 1));

        let down = board.moved(Move::Down).unwrap();
        assert_eq!(down.cells(), &[1, 0, 3, 4, 2, 6, 7, 5, 8]);

        // Blank on the bottom row: nothing below it can slide up.
        assert_eq!(up.moved(Move::Up), None);
        // The original board is untouched.
        assert_eq!(board.blank(), (1, 1));
        assert_eq!(board[(1, 1)], 0);
        assert_eq!(board[(2, 1)], 5);
    }

    #[test]
    fn test_move_pairs_and_labels() {
        for mv in Move::SEARCH_ORDER {
            assert_ne!(mv.opposite(), mv);
            assert_eq!(mv.opposite().opposite(), mv);
        }
        assert_eq!(Move::Left.opposite(), Move::Right);
        let labels: Vec<String> = Move::SEARCH_ORDER.iter().map(Move::to_string).collect();
        assert_eq!(labels, ["down", "up", "right", "left"]);
    }

    #[test]
    fn test_corner_blank_has_two_moves() {
        let board = Board::solved(3).unwrap();
        let legal: Vec<Move> = Move::SEARCH_ORDER
            .into_iter()
            .filter(|&mv| board.can_move(mv))
            .collect();
        assert_eq!(legal, [Move::Down, Move::Right]);
        assert_eq!(board.moved(Move::Right).unwrap().blank(), (2, 1));
    }

    #[test]
    fn test_shuffled_boards_are_permutations_of_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        let goal = Board::solved(4).unwrap();
        for _ in 0..20 {
            let board = Board::shuffled(&goal, &mut rng);
            let mut cells = board.cells().to_vec();
            cells.sort_unstable();
            assert_eq!(cells, (0..16).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_scrambled_zero_steps_is_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        let goal = Board::solved(3).unwrap();
        assert_eq!(Board::scrambled(&goal, 0, &mut rng), goal);
        assert_ne!(Board::scrambled(&goal, 5, &mut rng), goal);
    }

    #[test]
    fn test_display_pads_columns() {
        let board = Board::solved(4).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some(" 1  2  3  4"));
        assert_eq!(text.lines().last(), Some("13 14 15  0"));
    }
}
