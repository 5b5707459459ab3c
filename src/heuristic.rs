//! Admissible cost estimates for a board against a goal.

use crate::{board::Board, goal::GoalModel};

/// Heuristic used to bound the remaining cost of a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of per-tile Manhattan distances.
    #[default]
    Manhattan,
    /// Manhattan distance plus two moves for every tile that must leave its
    /// goal row or column to let another tile pass.
    LinearConflict,
}

impl Heuristic {
    pub fn evaluate(self, board: &Board, goal: &GoalModel) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(board, goal.row_of(), goal.col_of()),
            Heuristic::LinearConflict => {
                manhattan(board, goal.row_of(), goal.col_of()) + 2 * linear_conflicts(board, goal)
            }
        }
    }
}

/// Sum over non-blank tiles of `|row - row_of[tile]| + |col - col_of[tile]|`.
pub fn manhattan(board: &Board, row_of: &[usize], col_of: &[usize]) -> u32 {
    let mut distance = 0;
    for (i, row) in board.rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value != 0 {
                let target = value as usize - 1;
                distance += i.abs_diff(row_of[target]) + j.abs_diff(col_of[target]);
            }
        }
    }
    distance as u32
}

/// Number of tiles that must step out of their goal line, summed over all
/// rows and columns.
fn linear_conflicts(board: &Board, goal: &GoalModel) -> u32 {
    let size = board.size();
    let mut conflicts = 0;
    let mut line = Vec::with_capacity(size);

    for row in 0..size {
        line.clear();
        for col in 0..size {
            let value = board.get(row, col);
            if value != 0 {
                let (goal_row, goal_col) = goal.position_of(value);
                if goal_row == row {
                    line.push(goal_col);
                }
            }
        }
        conflicts += line.len() - longest_increasing_run(&line);
    }

    for col in 0..size {
        line.clear();
        for row in 0..size {
            let value = board.get(row, col);
            if value != 0 {
                let (goal_row, goal_col) = goal.position_of(value);
                if goal_col == col {
                    line.push(goal_row);
                }
            }
        }
        conflicts += line.len() - longest_increasing_run(&line);
    }

    conflicts as u32
}

// Length of the longest strictly increasing subsequence; lines are at most
// `n` long so the quadratic form is fine.
fn longest_increasing_run(line: &[usize]) -> usize {
    let mut best = vec![1; line.len()];
    for i in 0..line.len() {
        for j in 0..i {
            if line[j] < line[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_goal_has_zero_cost_for_any_blank_position() {
        for size in 1..=4 {
            for blank in 0..size * size {
                let goal = GoalModel::new(size, Some(blank)).unwrap();
                assert_eq!(Heuristic::Manhattan.evaluate(goal.board(), &goal), 0);
                assert_eq!(Heuristic::LinearConflict.evaluate(goal.board(), &goal), 0);
            }
        }
    }

    #[test]
    fn test_manhattan_counts_each_misplaced_tile() {
        let goal = GoalModel::standard(3).unwrap();
        let b = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        assert_eq!(Heuristic::Manhattan.evaluate(&b, &goal), 2);

        let b = board(&[&[8, 2, 3], &[4, 5, 6], &[7, 1, 0]]);
        // 8: (0,0) -> (2,1) = 3, 1: (2,1) -> (0,0) = 3
        assert_eq!(Heuristic::Manhattan.evaluate(&b, &goal), 6);
    }

    #[test]
    fn test_manhattan_ignores_the_blank() {
        let goal = GoalModel::standard(2).unwrap();
        let b = board(&[&[0, 2], &[1, 3]]);
        assert_eq!(manhattan(&b, goal.row_of(), goal.col_of()), 2);
    }

    #[test]
    fn test_linear_conflict_adds_two_per_blocked_tile() {
        let goal = GoalModel::standard(3).unwrap();
        let b = board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(Heuristic::Manhattan.evaluate(&b, &goal), 2);
        assert_eq!(Heuristic::LinearConflict.evaluate(&b, &goal), 4);

        // 3 1 2: only tile 3 has to leave the row.
        let b = board(&[&[3, 1, 2], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(Heuristic::LinearConflict.evaluate(&b, &goal), 4 + 2);
    }

    #[test]
    fn test_longest_increasing_run() {
        assert_eq!(longest_increasing_run(&[]), 0);
        assert_eq!(longest_increasing_run(&[2, 0, 1]), 2);
        assert_eq!(longest_increasing_run(&[3, 2, 1, 0]), 1);
    }
}
