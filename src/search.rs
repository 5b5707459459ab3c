//! Iterative deepening A* over an arena of search nodes.

use std::ops::Index;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    board::{Board, Move},
    error::SolveError,
    goal::GoalModel,
    heuristic::Heuristic,
    path::{reconstruct, Solution},
    solvability::{is_solvable, is_solvable_for},
};

/// Estimated maximum plausible f-value; above every optimal solution length
/// for boards up to 4x4.
pub const DEFAULT_MAX_F: u32 = 100;

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// A search-tree element. Its board is never changed after creation.
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    blank: (usize, usize),
    heuristic: u32,
    parent: Option<NodeId>,
    movement: Option<Move>,
}

impl Node {
    pub fn root(board: Board, heuristic: u32) -> Self {
        let blank = board.blank();
        Self {
            board,
            blank,
            heuristic,
            parent: None,
            movement: None,
        }
    }

    pub fn child(board: Board, heuristic: u32, parent: NodeId, movement: Move) -> Self {
        let blank = board.blank();
        Self {
            board,
            blank,
            heuristic,
            parent: Some(parent),
            movement: Some(movement),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Node this one was generated from; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move that produced this node from its parent.
    pub fn movement(&self) -> Option<Move> {
        self.movement
    }
}

/// Nodes on the current recursion path and their unexplored siblings.
///
/// Parents are referred to by index, so dropping a backtracked branch is a
/// single truncate.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Thresholds at or above this end the search with
    /// [`SolveOutcome::NotFoundWithinBound`].
    pub max_f: u32,
    pub heuristic: Heuristic,
    /// Skip the successor that would undo the move that produced a node.
    pub prune_reversals: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_f: DEFAULT_MAX_F,
            heuristic: Heuristic::Manhattan,
            prune_reversals: false,
        }
    }
}

/// Counters for the most recent run of a [`Solver`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub iterations: u32,
    pub nodes_generated: u64,
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    Solved(Solution),
    /// The board's parity class cannot reach the goal; no search was run.
    Unsolvable,
    /// The threshold grew to `threshold`, at or past the configured maximum.
    NotFoundWithinBound { threshold: u32 },
}

enum SearchResult {
    Found(NodeId),
    Overflow(u32),
}

/// IDA* search engine for one goal.
///
/// All search state lives here, so independent solvers never interfere.
#[derive(Debug, Clone)]
pub struct Solver {
    goal: GoalModel,
    config: SearchConfig,
    arena: NodeArena,
    stats: SearchStats,
}

impl Solver {
    pub fn new(goal: GoalModel, config: SearchConfig) -> Self {
        Self {
            goal,
            config,
            arena: NodeArena::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn goal(&self) -> &GoalModel {
        &self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn heuristic(&self, board: &Board) -> u32 {
        self.config.heuristic.evaluate(board, &self.goal)
    }

    /// Solves `board`, computing the blank position and root estimate itself.
    pub fn solve(&mut self, board: &Board) -> Result<SolveOutcome, SolveError> {
        self.check_size(board)?;
        let (blank_row, blank_col) = board.blank();
        let root_heuristic = self.heuristic(board);
        self.solve_from(board, blank_row, blank_col, root_heuristic)
    }

    /// Solves `board` given its blank position and root estimate, which must
    /// agree with the board.
    #[instrument(skip(self, board), fields(size = board.size(), max_f = self.config.max_f))]
    pub fn solve_from(
        &mut self,
        board: &Board,
        blank_row: usize,
        blank_col: usize,
        root_heuristic: u32,
    ) -> Result<SolveOutcome, SolveError> {
        self.check_size(board)?;
        let (expected_row, expected_col) = board.blank();
        if (blank_row, blank_col) != (expected_row, expected_col) {
            return Err(SolveError::BlankMismatch {
                row: blank_row,
                col: blank_col,
                expected_row,
                expected_col,
            });
        }
        let computed = self.heuristic(board);
        if root_heuristic != computed {
            return Err(SolveError::HeuristicMismatch {
                given: root_heuristic,
                computed,
            });
        }

        self.stats = SearchStats::default();
        self.arena.clear();

        let solvable = if self.goal.is_standard() {
            is_solvable(board)
        } else {
            is_solvable_for(board, self.goal.board())
        };
        if !solvable {
            info!("board is not solvable");
            return Ok(SolveOutcome::Unsolvable);
        }

        let root = self.arena.push(Node::root(board.clone(), root_heuristic));
        let mut threshold = root_heuristic;

        loop {
            self.stats.iterations += 1;
            self.stats.threshold = threshold;
            debug!(iteration = self.stats.iterations, threshold, "starting iteration");

            match self.search(root, 0, threshold) {
                SearchResult::Found(terminal) => {
                    let solution = reconstruct(&self.arena, terminal);
                    info!(
                        moves = solution.move_count(),
                        iterations = self.stats.iterations,
                        nodes = self.stats.nodes_generated,
                        "solution found"
                    );
                    return Ok(SolveOutcome::Solved(solution));
                }
                SearchResult::Overflow(next) if next >= self.config.max_f => {
                    warn!(threshold = next, max_f = self.config.max_f, "search bound exceeded");
                    return Ok(SolveOutcome::NotFoundWithinBound { threshold: next });
                }
                SearchResult::Overflow(next) => threshold = next,
            }
        }
    }

    fn check_size(&self, board: &Board) -> Result<(), SolveError> {
        if board.size() != self.goal.size() {
            return Err(SolveError::SizeMismatch {
                initial: board.size(),
                goal: self.goal.size(),
            });
        }
        Ok(())
    }

    fn search(&mut self, id: NodeId, g: u32, threshold: u32) -> SearchResult {
        let node = &self.arena[id];
        let f = g + node.heuristic;
        if f > threshold {
            return SearchResult::Overflow(f);
        }
        if node.board == *self.goal.board() {
            trace!(depth = g, "reached goal");
            return SearchResult::Found(id);
        }

        let mark = self.arena.len();
        self.expand(id);
        let end = self.arena.len();

        let mut min = u32::MAX;
        for child in mark..end {
            match self.search(NodeId(child), g + 1, threshold) {
                found @ SearchResult::Found(_) => return found,
                SearchResult::Overflow(t) => min = min.min(t),
            }
        }
        self.arena.truncate(mark);
        SearchResult::Overflow(min)
    }

    // Pushes the node's successors in up, down, left, right order of the
    // blank's motion.
    fn expand(&mut self, id: NodeId) {
        let Self {
            goal,
            config,
            arena,
            stats,
        } = self;
        let (goal, config) = (&*goal, *config);
        let node = &arena[id];
        let undo = config
            .prune_reversals
            .then(|| node.movement.map(|mv| mv.opposite()))
            .flatten();

        let successors: Vec<Node> = Move::SEARCH_ORDER
            .into_iter()
            .filter(|&mv| Some(mv) != undo)
            .filter_map(|mv| {
                let target = node.board.target_of(node.blank, mv)?;
                let board = node.board.swapped(node.blank, target);
                let heuristic = config.heuristic.evaluate(&board, goal);
                Some(Node {
                    board,
                    blank: target,
                    heuristic,
                    parent: Some(id),
                    movement: Some(mv),
                })
            })
            .collect();

        stats.nodes_generated += successors.len() as u64;
        for successor in successors {
            arena.push(successor);
        }
    }
}

/// Solves `initial` against `goal_board`, whose blank sits at row-major
/// `blank_goal_index`, using the default configuration.
pub fn solve(
    initial: &Board,
    blank_row: usize,
    blank_col: usize,
    root_heuristic: u32,
    goal_board: &Board,
    blank_goal_index: usize,
) -> Result<SolveOutcome, SolveError> {
    let goal = GoalModel::new(goal_board.size(), Some(blank_goal_index))?;
    if goal.board() != goal_board {
        return Err(SolveError::GoalMismatch { blank_goal_index });
    }
    Solver::new(goal, SearchConfig::default()).solve_from(initial, blank_row, blank_col, root_heuristic)
}
