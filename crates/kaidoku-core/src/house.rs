//! The 27 constraint groups (houses) of a 9×9 board.

use crate::position::Position;

/// A Sudoku house: one row, column, or 3×3 box.
///
/// A house holds 9 cells that must collectively contain each digit at most
/// once (exactly once in a solved grid). Every cell belongs to exactly
/// three houses, one of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// All nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// All nine boxes, left to right, top to bottom.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// Cells are numbered left to right for rows, top to bottom for
    /// columns, and row-major within a box.
    ///
    /// # Panics
    ///
    /// Panics unless `cell` is in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, cell: u8) -> Position {
        assert!(cell < 9);
        match self {
            House::Row { y } => Position::new(cell, y),
            House::Column { x } => Position::new(x, cell),
            House::Box { index } => Position::from_box(index, cell),
        }
    }

    /// Returns the nine positions contained in this house.
    ///
    /// The mapping is served from tables built once in const context, so
    /// calling this in the candidate scan costs an array copy, not offset
    /// arithmetic.
    #[must_use]
    #[inline]
    pub fn positions(self) -> [Position; 9] {
        match self {
            House::Row { y } => ROW_POSITIONS[usize::from(y)],
            House::Column { x } => COLUMN_POSITIONS[usize::from(x)],
            House::Box { index } => BOX_POSITIONS[usize::from(index)],
        }
    }
}

const fn position_table(houses: [House; 9]) -> [[Position; 9]; 9] {
    let mut table = [[Position::new(0, 0); 9]; 9];
    let mut house = 0;
    while house < 9 {
        let mut cell = 0;
        #[expect(clippy::cast_possible_truncation)]
        while cell < 9 {
            table[house][cell] = houses[house].position_from_cell_index(cell as u8);
            cell += 1;
        }
        house += 1;
    }
    table
}

const ROW_POSITIONS: [[Position; 9]; 9] = position_table(House::ROWS);
const COLUMN_POSITIONS: [[Position; 9]; 9] = position_table(House::COLUMNS);
const BOX_POSITIONS: [[Position; 9]; 9] = position_table(House::BOXES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ordered_by_kind() {
        assert_eq!(House::ALL.len(), 27);
        for i in 0..9 {
            assert_eq!(House::ALL[i], House::ROWS[i]);
            assert_eq!(House::ALL[i + 9], House::COLUMNS[i]);
            assert_eq!(House::ALL[i + 18], House::BOXES[i]);
        }
    }

    #[test]
    fn test_positions_match_coordinates() {
        for (y, row) in House::ROWS.iter().enumerate() {
            for (x, pos) in row.positions().iter().enumerate() {
                assert_eq!(*pos, Position::new(x.try_into().unwrap(), y.try_into().unwrap()));
            }
        }
        for (x, column) in House::COLUMNS.iter().enumerate() {
            for (y, pos) in column.positions().iter().enumerate() {
                assert_eq!(*pos, Position::new(x.try_into().unwrap(), y.try_into().unwrap()));
            }
        }
        for (index, boxed) in House::BOXES.iter().enumerate() {
            for pos in boxed.positions() {
                assert_eq!(usize::from(pos.box_index()), index);
            }
        }
    }

    #[test]
    fn test_positions_agree_with_cell_index() {
        for house in House::ALL {
            for (cell, pos) in house.positions().iter().enumerate() {
                assert_eq!(*pos, house.position_from_cell_index(cell.try_into().unwrap()));
            }
        }
    }

    #[test]
    fn test_every_cell_in_exactly_three_houses() {
        for pos in Position::ALL {
            let containing = House::ALL
                .iter()
                .filter(|house| house.positions().contains(&pos))
                .count();
            assert_eq!(containing, 3, "{pos:?}");

            for house in pos.houses() {
                assert!(house.positions().contains(&pos), "{pos:?} not in {house:?}");
            }
        }
    }

    #[test]
    fn test_each_kind_covers_the_board() {
        for kind in [House::ROWS, House::COLUMNS, House::BOXES] {
            let mut seen = [false; 81];
            for house in kind {
                for pos in house.positions() {
                    assert!(!seen[pos.index()], "{pos:?} covered twice");
                    seen[pos.index()] = true;
                }
            }
            assert!(seen.iter().all(|covered| *covered));
        }
    }
}
