//! Depth-first backtracking search and the conflict checks it builds on.
//!
//! The search is deliberately plain: scan for the first empty cell in
//! reading order, try the digits in ascending order, recurse, undo on
//! failure. With a fixed 9x9 grid there is no need for candidate sets or
//! cell-ordering heuristics, and the fixed orders make the solver
//! deterministic.
use crate::board::{Cell, Digit, Grid};

/// Checks that no cell other than `cell` itself holds `digit` in the
/// row, column or block of `cell`.
pub(crate) fn is_legal_placement(grid: &Grid, cell: Cell, digit: Digit) -> bool {
    let digit = Some(digit);
    cell.row()
        .cells()
        .chain(cell.col().cells())
        .chain(cell.block().cells())
        .filter(|&other| other != cell)
        .all(|other| grid.get(other) != digit)
}

/// Checks every filled cell of the grid against the rest of the grid.
pub(crate) fn is_consistent(grid: &Grid) -> bool {
    Cell::all().all(|cell| match grid.get(cell) {
        Some(digit) => is_legal_placement(grid, cell, digit),
        None => true,
    })
}

fn first_empty(grid: &Grid) -> Option<Cell> {
    Cell::all().find(|&cell| grid.get(cell).is_none())
}

/// Completes the grid, keeping all filled cells.
///
/// Assumes a consistent grid. The search owns and mutates `grid` as its
/// working copy, the caller keeps the original.
pub(crate) fn solve(mut grid: Grid) -> Option<Grid> {
    match solve_recursive(&mut grid) {
        true => Some(grid),
        false => None,
    }
}

fn solve_recursive(grid: &mut Grid) -> bool {
    let cell = match first_empty(grid) {
        Some(cell) => cell,
        // no empty cell left, the grid is complete
        None => return true,
    };

    for digit in Digit::all() {
        if !is_legal_placement(grid, cell, digit) {
            continue;
        }
        grid.set(cell, Some(digit));
        if solve_recursive(grid) {
            return true;
        }
        grid.set(cell, None);
    }

    false
}
