//! Board position (x, y) coordinates with row-major indexing.

use crate::house::House;

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions map to row-major cell indices via [`index`] and
/// [`from_index`]: index = y·9 + x.
///
/// [`index`]: Self::index
/// [`from_index`]: Self::from_index
///
/// # Examples
///
/// ```
/// use kaidoku_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 22);
/// assert_eq!(Position::from_index(22), pos);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (`ALL[i].index() == i`).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics unless both `x` and `y` are in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics unless `index` is in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within that box (0-8, same order).
    ///
    /// # Panics
    ///
    /// Panics unless both arguments are in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the cell index of this position within its box (0-8).
    #[must_use]
    #[inline]
    pub const fn box_cell(self) -> u8 {
        (self.y % 3) * 3 + self.x % 3
    }

    /// Returns the three houses containing this position: its row, its
    /// column, and its box.
    #[must_use]
    pub const fn houses(self) -> [House; 3] {
        [
            House::Row { y: self.y },
            House::Column { x: self.x },
            House::Box {
                index: self.box_index(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(1, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_arithmetic() {
        // Box cells sit at fixed offsets from the box's top-left index.
        const BOX_OFFSETS: [usize; 9] = [0, 1, 2, 9, 10, 11, 18, 19, 20];
        for box_index in 0..9u8 {
            let start = 27 * usize::from(box_index / 3) + 3 * usize::from(box_index % 3);
            for cell in 0..9u8 {
                let pos = Position::from_box(box_index, cell);
                assert_eq!(pos.index(), start + BOX_OFFSETS[usize::from(cell)]);
                assert_eq!(pos.box_index(), box_index);
                assert_eq!(pos.box_cell(), cell);
            }
        }
    }

    #[test]
    fn test_houses_contain_position() {
        for pos in Position::ALL {
            let [row, column, boxed] = pos.houses();
            assert_eq!(row, House::Row { y: pos.y() });
            assert_eq!(column, House::Column { x: pos.x() });
            assert_eq!(
                boxed,
                House::Box {
                    index: pos.box_index()
                }
            );
        }
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "index < 81")]
    fn test_from_index_rejects_out_of_range() {
        let _ = Position::from_index(81);
    }
}
