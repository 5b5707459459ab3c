//! Error types shared by the board, goal and solver layers.

/// A board or goal description that violates the puzzle's shape invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("board must have at least one cell")]
    Empty,
    #[display("{cells} cells cannot form a square board")]
    NotSquare { cells: usize },
    #[display("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[display("tile value {value} is out of range (max {max})")]
    ValueOutOfRange { value: u32, max: u32 },
    #[display("tile value {value} appears more than once")]
    DuplicateValue { value: u32 },
    #[display("blank goal index {index} is outside a board of {cells} cells")]
    BlankGoalOutOfRange { index: usize, cells: usize },
}

/// Arguments to [`crate::solve`] that disagree with each other.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    #[display("invalid board: {_0}")]
    #[from]
    Board(BoardError),
    #[display("blank expected at ({expected_row}, {expected_col}) but given as ({row}, {col})")]
    BlankMismatch {
        row: usize,
        col: usize,
        expected_row: usize,
        expected_col: usize,
    },
    #[display("root heuristic {given} does not match computed value {computed}")]
    HeuristicMismatch { given: u32, computed: u32 },
    #[display("goal board does not match the layout for blank index {blank_goal_index}")]
    GoalMismatch { blank_goal_index: usize },
    #[display("goal board is {goal}x{goal} but initial board is {initial}x{initial}")]
    SizeMismatch { initial: usize, goal: usize },
}
