//! Turning the parent chain of a goal node into an ordered move list.

use crate::{
    board::{Board, Move},
    search::{NodeArena, NodeId},
};

/// One move of a solution and the board it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub movement: Move,
    pub board: Board,
}

/// Ordered moves from the start position (excluded) to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub steps: Vec<Step>,
}

impl Solution {
    pub fn move_count(&self) -> usize {
        self.steps.len()
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.movement)
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.steps.iter().map(|step| &step.board)
    }

    /// Board reached after the last move, if any move was made.
    pub fn final_board(&self) -> Option<&Board> {
        self.steps.last().map(|step| &step.board)
    }
}

/// Walks parent links from `terminal` back to the root and returns the moves
/// oldest-first. The root itself contributes no step.
pub fn reconstruct(arena: &NodeArena, terminal: NodeId) -> Solution {
    let mut steps = Vec::new();
    let mut current = terminal;
    while let Some(parent) = arena[current].parent() {
        let node = &arena[current];
        if let Some(movement) = node.movement() {
            steps.push(Step {
                movement,
                board: node.board().clone(),
            });
        }
        current = parent;
    }
    steps.reverse();
    Solution { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Node;

    fn chain() -> (NodeArena, NodeId) {
        let start = Board::from_cells(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let mut arena = NodeArena::default();
        let root = arena.push(Node::root(start.clone(), 2));
        let first = start.moved(Move::Up).unwrap();
        let a = arena.push(Node::child(first.clone(), 1, root, Move::Up));
        let second = first.moved(Move::Left).unwrap();
        let b = arena.push(Node::child(second, 0, a, Move::Left));
        (arena, b)
    }

    #[test]
    fn test_reconstruct_lists_moves_oldest_first() {
        let (arena, terminal) = chain();
        assert_eq!(arena[terminal].heuristic(), 0);
        assert_eq!(arena[terminal].blank(), (2, 2));
        let solution = reconstruct(&arena, terminal);
        assert_eq!(solution.move_count(), 2);
        assert_eq!(solution.moves().collect::<Vec<_>>(), [Move::Up, Move::Left]);
        assert_eq!(solution.final_board(), Some(&Board::solved(3).unwrap()));
    }

    #[test]
    fn test_reconstruct_is_repeatable() {
        let (arena, terminal) = chain();
        assert_eq!(reconstruct(&arena, terminal), reconstruct(&arena, terminal));
    }

    #[test]
    fn test_reconstruct_from_root_is_empty() {
        let (arena, _) = chain();
        let solution = reconstruct(&arena, NodeId::ROOT);
        assert_eq!(solution.move_count(), 0);
        assert_eq!(solution.final_board(), None);
    }
}
