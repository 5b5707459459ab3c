//! Parity tests deciding whether a board can reach its goal.

use crate::board::Board;

/// Whether `board` can reach the conventional goal (tiles in order, blank
/// last).
///
/// Odd widths need an even inversion count. Even widths need the inversion
/// count and the blank's row, counted 1-based from the bottom, to have
/// opposite parity.
pub fn is_solvable(board: &Board) -> bool {
    let size = board.size();
    let inversions = count_inversions(board.cells());
    let (blank_row, _) = board.blank();
    let blank_row_from_bottom = size - blank_row;

    let odd_width = size % 2 == 1;
    let even_inversions = inversions % 2 == 0;
    let even_blank_row = blank_row_from_bottom % 2 == 0;

    if odd_width {
        even_inversions
    } else {
        even_inversions != even_blank_row
    }
}

/// Whether `board` can reach `goal`, for any goal arrangement.
///
/// Every move is a transposition involving the blank and shifts the blank
/// by one cell, so the permutation taking `board` to `goal` must have the
/// same parity as the blank's Manhattan distance between the two.
pub fn is_solvable_for(board: &Board, goal: &Board) -> bool {
    if board.size() != goal.size() {
        return false;
    }
    let mut goal_index = vec![0; goal.cells().len()];
    for (i, &value) in goal.cells().iter().enumerate() {
        goal_index[value as usize] = i;
    }
    let permutation: Vec<usize> = board.cells().iter().map(|&v| goal_index[v as usize]).collect();

    let (br, bc) = board.blank();
    let (gr, gc) = goal.blank();
    let blank_distance = br.abs_diff(gr) + bc.abs_diff(gc);

    permutation_is_odd(&permutation) == (blank_distance % 2 == 1)
}

/// Pairs `(i, j)`, `i < j`, of non-blank tiles with `cells[i] > cells[j]`.
///
/// Scans right to left, counting for each tile the smaller tiles already
/// seen after it.
pub fn count_inversions(cells: &[u32]) -> usize {
    let Some(&largest) = cells.iter().max() else {
        return 0;
    };
    let mut seen = vec![false; largest as usize + 1];
    let mut inversions = 0;
    for &tile in cells.iter().rev() {
        if tile == 0 {
            continue;
        }
        inversions += seen[1..tile as usize].iter().filter(|&&s| s).count();
        seen[tile as usize] = true;
    }
    inversions
}

fn permutation_is_odd(permutation: &[usize]) -> bool {
    let mut visited = vec![false; permutation.len()];
    let mut cycles = 0;
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            i = permutation[i];
        }
    }
    (permutation.len() - cycles) % 2 == 1
}
