//! Types for cells, digits and the grid itself
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::positions::N_CELLS;

pub use self::{
    digit::Digit,
    grid::{Grid, LineString},
    positions::{Block, Cell, Col, Row},
};
