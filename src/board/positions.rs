//! Index types for cells and the houses (rows, columns, blocks) of the grid.

pub(crate) const N_CELLS: usize = 81;

macro_rules! define_index_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            #[doc = concat!("Index in `0..", stringify!($limit), "`, counted left to right, top to bottom.")]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new index.
                ///
                /// # Panic
                #[doc = concat!("Panics, if the number is not below ", stringify!($limit), ".")]
                pub fn new(num: u8) -> Self {
                    assert!(num < $limit);
                    $name(num)
                }

                /// Constructs a new index, if the number is within bounds.
                pub fn new_checked(num: u8) -> Option<Self> {
                    if num < $limit {
                        Some($name(num))
                    } else {
                        None
                    }
                }

                /// Returns the number contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the number contained within as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all indices in ascending order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map($name)
                }
            }
        )*
    };
);

define_index_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
);

impl Cell {
    /// Constructs the cell at the intersection of `row` and `col`.
    pub fn from_coords(row: Row, col: Col) -> Cell {
        Cell(row.0 * 9 + col.0)
    }

    /// Returns the row of this cell.
    pub fn row(self) -> Row {
        Row(self.0 / 9)
    }

    /// Returns the column of this cell.
    pub fn col(self) -> Col {
        Col(self.0 % 9)
    }

    /// Returns the block (also called box) of this cell.
    pub fn block(self) -> Block {
        Block(self.0 / 27 * 3 + self.0 % 9 / 3)
    }
}

impl Row {
    /// Returns an iterator over the cells of this row, left to right.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..9).map(move |col| Cell(self.0 * 9 + col))
    }
}

impl Col {
    /// Returns an iterator over the cells of this column, top to bottom.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..9).map(move |row| Cell(row * 9 + self.0))
    }
}

impl Block {
    /// Returns an iterator over the cells of this block, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        // origin = (row - row % 3, col - col % 3)
        let first_row = self.0 / 3 * 3;
        let first_col = self.0 % 3 * 3;
        (0..9).map(move |i| Cell((first_row + i / 3) * 9 + first_col + i % 3))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_cells() {
        for (raw_row, row) in (0..9).map(|r| (r, Row::new(r))) {
            let first_cell = raw_row * 9;

            let iter1 = row.cells();
            let iter2 = (first_cell..first_cell + 9).map(Cell::new);
            assert!(iter1.eq(iter2));
        }
    }

    #[test]
    fn col_cells() {
        for (raw_col, col) in (0..9).map(|c| (c, Col::new(c))) {
            let iter1 = col.cells();
            let iter2 = (raw_col..81).step_by(9).map(Cell::new);
            assert!(iter1.eq(iter2));
        }
    }

    #[test]
    fn block_cells() {
        let central_block = [30, 31, 32, 39, 40, 41, 48, 49, 50];
        assert!(Block::new(4).cells().eq(central_block.iter().cloned().map(Cell::new)));

        // blocks partition the grid
        for cell in Cell::all() {
            assert!(cell.block().cells().filter(|&c| c == cell).count() == 1);
        }
    }

    #[test]
    fn cell_coords() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_coords(cell.row(), cell.col()), cell);
            assert_eq!(cell.block().get(), cell.row().get() / 3 * 3 + cell.col().get() / 3);
        }
    }
}
