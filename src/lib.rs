//! # Sliding-tile IDA* solver
//!
//! Finds minimum-length move sequences for square N-puzzles using iterative
//! deepening A* with an admissible Manhattan-distance heuristic.
//!
//! ## Modules
//! - `board`: the `Board` value type and `Move` labels.
//! - `goal`: target coordinates of each tile for any blank goal position.
//! - `heuristic`: Manhattan and linear-conflict estimates.
//! - `solvability`: parity checks run before any search.
//! - `search`: the IDA* engine (`Solver`) and its node arena.
//! - `path`: rebuilding the move list from the goal node.
//! - `input` / `render`: text input parsing and terminal output for the binary.

pub mod board;
pub mod error;
pub mod goal;
pub mod heuristic;
pub mod input;
pub mod path;
pub mod render;
pub mod search;
pub mod solvability;

pub use crate::{
    board::{Board, Move},
    error::{BoardError, SolveError},
    goal::GoalModel,
    heuristic::Heuristic,
    path::{Solution, Step},
    search::{solve, SearchConfig, SearchStats, SolveOutcome, Solver},
};
