use std::ops::Deref;
use std::str::FromStr;
use std::{fmt, str};

use crate::board::{Cell, Digit, N_CELLS};
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::solver;

/// The main structure exposing all the functionality of the library
///
/// A 9x9 grid of digits, stored row by row. Empty cells are allowed
/// anywhere, so a `Grid` can hold the partial puzzles a user is editing
/// as well as complete solutions.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid([u8; N_CELLS]);

impl Grid {
    /// Creates a grid with all cells empty.
    pub fn empty() -> Grid {
        Grid([0; N_CELLS])
    }

    /// Creates a grid from a byte array. Empty cells are denoted by 0, clues by the digits 1 to 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Grid, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Grid(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Creates a grid from a byte slice. Empty cells are denoted by 0, clues by the digits 1 to 9.
    /// The slice must be of length 81.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Grid, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Grid::from_bytes(array)?)
    }

    /// Creates a grid from nine rows of nine numbers, as handed over by a
    /// grid-editor frontend. Empty cells are denoted by 0, clues by the
    /// digits 1 to 9.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Grid, FromBytesError> {
        let mut bytes = [0; N_CELLS];
        for (row, chunk) in rows.iter().zip(bytes.chunks_exact_mut(9)) {
            chunk.copy_from_slice(row);
        }
        Grid::from_bytes(bytes)
    }

    /// Reads a grid in line format.
    ///
    /// The line format is a sequence of 81 cells, row by row, with the
    /// digits 1 to 9 for clues and `.`, `0` or `_` for empty cells.
    /// Everything after a space or tab following the 81st cell is ignored
    /// as a comment.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == N_CELLS {
                return match ch {
                    ' ' | '\t' => Ok(Grid(grid)),
                    '1'..='9' | '.' | '0' | '_' => Err(LineParseError::TooManyCells),
                    _ => Err(LineParseError::MissingCommentDelimiter),
                };
            }
            match ch {
                '1'..='9' | '.' | '0' | '_' => {
                    grid[n_cells] = Digit::from_char(ch).map_or(0, Digit::get);
                    n_cells += 1;
                }
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }));
                }
            }
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Grid(grid))
    }

    /// Returns the digit in `cell`, or `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Enters `digit` into `cell`, or empties the cell for `None`.
    pub fn set(&mut self, cell: Cell, digit: Option<Digit>) {
        self.0[cell.as_index()] = digit.map_or(0, Digit::get);
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        *self = Grid::empty();
    }

    /// Returns an iterator over the grid's cell contents, going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Counts the filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks whether every cell is filled. Filled is not solved: the
    /// entries may still conflict.
    pub fn is_filled(&self) -> bool {
        self.0.iter().all(|&num| num != 0)
    }

    /// Checks whether the grid is solved, i.e. completely filled with
    /// every row, column and block containing each digit exactly once.
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.is_consistent()
    }

    /// Checks whether no two equal digits share a row, column or block.
    ///
    /// Every filled cell is checked against the rest of the grid, not just
    /// the ones entered last. Consistency is necessary but not sufficient
    /// for solvability.
    pub fn is_consistent(&self) -> bool {
        solver::is_consistent(self)
    }

    /// Checks whether `digit` could be entered into `cell` without an
    /// immediate conflict, i.e. whether no other cell in the same row,
    /// column or block already contains it. The current content of `cell`
    /// itself is not considered.
    pub fn is_legal_placement(&self, cell: Cell, digit: Digit) -> bool {
        solver::is_legal_placement(self, cell, digit)
    }

    /// Tries to find a solution that keeps all filled cells as they are.
    ///
    /// Returns `None` both for grids that conflict already and for
    /// conflict-free grids that admit no completion. Callers that want to
    /// distinguish the two cases must check [`is_consistent`](Self::is_consistent)
    /// beforehand.
    ///
    /// The search is deterministic: empty cells are filled in reading
    /// order, trying digits in ascending order, so the same grid always
    /// yields the same solution even when several exist.
    pub fn solve(self) -> Option<Grid> {
        if !self.is_consistent() {
            return None;
        }
        solver::solve(self)
    }

    /// Returns the grid's cell contents as a byte array, with 0 for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the grid's cell contents as nine rows of nine numbers, with 0 for empty cells.
    pub fn to_rows(self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for (row, chunk) in rows.iter_mut().zip(self.0.chunks_exact(9)) {
            row.copy_from_slice(chunk);
        }
        rows
    }

    /// Returns the grid in line format, with `.` for empty cells.
    pub fn to_str_line(&self) -> LineString {
        let mut chars = [0; N_CELLS];
        for (ch, digit) in chars.iter_mut().zip(self.iter()) {
            *ch = match digit {
                Some(digit) => digit.to_char() as u8,
                None => b'.',
            };
        }
        LineString(chars)
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::empty()
    }
}

impl FromStr for Grid {
    type Err = LineParseError;

    fn from_str(s: &str) -> Result<Grid, LineParseError> {
        Grid::from_str_line(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &num) in self.0.iter().enumerate() {
            let (row, col) = (idx / 9, idx % 9);
            match (row, col) {
                (0, 0) => {}
                (_, 0) if row % 3 == 0 => write!(f, "\n\n")?, // separate bands
                (_, 0) => writeln!(f)?,
                _ if col % 3 == 0 => write!(f, " ")?, // separate stacks
                _ => {}
            }
            match num {
                0 => write!(f, "_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
        let line = <String as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_str_line(&line).map_err(serde::de::Error::custom)
    }
}

/// Line format of a grid, as returned by [`Grid::to_str_line`].
/// Dereferences to `&str`.
#[derive(Copy, Clone)]
pub struct LineString([u8; N_CELLS]);

impl Deref for LineString {
    type Target = str;

    fn deref(&self) -> &str {
        // cells are printed as ascii
        str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
