#![warn(missing_docs)]
//! The sudoku-core library
//!
//! ## Overview
//!
//! sudoku-core is the board model and solver behind a grid-editor widget.
//! It offers a mutable 9x9 [`Grid`], a consistency check for partially
//! filled grids and a deterministic backtracking solver.
//!
//! ## Example
//!
//! ```
//! use sudoku_core::Grid;
//!
//! let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! // Grids can be created from line format strings, from bytes or from rows.
//! let grid = Grid::from_str_line(line).unwrap();
//! // Grid::from_bytes(some_byte_array);
//! // Grid::from_rows(some_nested_array);
//!
//! // The caller's grid is kept as is, the search runs on its own copy.
//! if let Some(solution) = grid.solve() {
//!     println!("{}", solution);
//!     println!("{}", solution.to_str_line());
//! }
//! ```
mod board;
pub mod errors;
mod solver;

pub use crate::board::{Block, Cell, Col, Digit, Grid, LineString, Row};
