//! Errors that may be encountered when constructing a grid from bytes or text
#[cfg(doc)]
use crate::Grid;

/// Error for [`Grid::from_bytes`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}

/// An invalid entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost column is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }

    /// Block index from 0..=8, numbered from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }
}

/// Error for [`Grid::from_str_line`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits 1 to 9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Contains the number of cells supplied
    #[error("grid contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 valid cell positions are supplied
    #[error("grid contains more than 81 cells or is missing comment delimiter")]
    TooManyCells,
    /// Comments must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}
