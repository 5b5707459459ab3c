//! Parser for the whitespace-separated puzzle format:
//!
//! ```text
//! <element count> <blank goal index, or -1 for last> <n² tiles, row-major>
//! ```

use std::str::SplitWhitespace;

use crate::{board::Board, error::BoardError, goal::GoalModel};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseError {
    #[display("missing {what}")]
    Missing { what: &'static str },
    #[display("expected an integer for {what}, found {token:?}")]
    InvalidToken { what: &'static str, token: String },
    #[display("element count {elements} is not one less than a square")]
    NotSquareCount { elements: usize },
    #[display("unexpected trailing input {token:?}")]
    Trailing { token: String },
    #[display("{_0}")]
    #[from]
    Board(BoardError),
}

/// A validated start board together with its goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    pub board: Board,
    pub goal: GoalModel,
}

pub fn parse_puzzle(text: &str) -> Result<PuzzleInput, ParseError> {
    let mut tokens = text.split_whitespace();

    let elements: usize = next_number(&mut tokens, "element count")?;
    let blank_index: i64 = next_number(&mut tokens, "blank goal index")?;
    let size = (elements as f64 + 1.0).sqrt().round() as usize;
    if size == 0 || size * size != elements + 1 {
        return Err(ParseError::NotSquareCount { elements });
    }
    let blank_index = match blank_index {
        -1 => None,
        index => Some(usize::try_from(index).map_err(|_| ParseError::InvalidToken {
            what: "blank goal index",
            token: index.to_string(),
        })?),
    };

    let cells = (0..=elements)
        .map(|_| next_number(&mut tokens, "tile"))
        .collect::<Result<Vec<u32>, _>>()?;
    if let Some(token) = tokens.next() {
        return Err(ParseError::Trailing {
            token: token.to_owned(),
        });
    }

    let board = Board::from_cells(cells)?;
    let goal = GoalModel::new(size, blank_index)?;
    Ok(PuzzleInput { board, goal })
}

fn next_number<T: std::str::FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    what: &'static str,
) -> Result<T, ParseError> {
    let token = tokens.next().ok_or(ParseError::Missing { what })?;
    token.parse().map_err(|_| ParseError::InvalidToken {
        what,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_last_sentinel() {
        let input = parse_puzzle("8\n-1\n1 2 3\n4 0 6\n7 5 8\n").unwrap();
        assert_eq!(input.board.cells(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert!(input.goal.is_standard());
        assert_eq!(input.goal.blank_index(), 8);
    }

    #[test]
    fn test_parse_explicit_blank_index() {
        let input = parse_puzzle("3 0  1 0 2 3").unwrap();
        assert_eq!(input.goal.board().cells(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_puzzle(""), Err(ParseError::Missing { what: "element count" }));
        assert_eq!(parse_puzzle("7 -1"), Err(ParseError::NotSquareCount { elements: 7 }));
        assert_eq!(parse_puzzle("3 -1 1 2 0"), Err(ParseError::Missing { what: "tile" }));
        assert_eq!(
            parse_puzzle("3 -1 1 2 x 0"),
            Err(ParseError::InvalidToken {
                what: "tile",
                token: "x".into()
            })
        );
        assert_eq!(
            parse_puzzle("3 -2 1 2 3 0"),
            Err(ParseError::InvalidToken {
                what: "blank goal index",
                token: "-2".into()
            })
        );
        assert_eq!(
            parse_puzzle("3 -1 1 2 3 0 9"),
            Err(ParseError::Trailing { token: "9".into() })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        assert_eq!(
            parse_puzzle("3 -1 1 1 3 0"),
            Err(ParseError::Board(BoardError::DuplicateValue { value: 1 }))
        );
        assert_eq!(
            parse_puzzle("3 5 1 2 3 0"),
            Err(ParseError::Board(BoardError::BlankGoalOutOfRange { index: 5, cells: 4 }))
        );
    }

    #[test]
    fn test_parse_blank_index_one_past_last_cell() {
        let input = parse_puzzle("8 9 1 2 3 4 0 6 7 5 8").unwrap();
        assert!(input.goal.is_standard());
        assert_eq!(input.goal.blank_index(), 8);
    }
}
