//! The 81-cell puzzle grid with parsing, formatting, and validity checks.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// Error returned when a grid cannot be built from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text form contained a character that is neither a digit, a blank
    /// marker (`.`, `_`, `0`), nor whitespace.
    #[display("invalid character {character:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The numeric form contained a value outside 0-9.
    #[display("invalid cell value {value} (expected 0-9)")]
    InvalidValue {
        /// The offending value.
        value: u8,
    },
    /// The input did not contain exactly 81 cells.
    #[display("grid has {count} cells (expected 81)")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9×9 Sudoku grid: 81 cells, each blank or holding a [`Digit`].
///
/// Cells are stored row-major and addressed by [`Position`]. A blank cell
/// is `None`. The grid itself enforces nothing about digit placement;
/// [`is_consistent`](Self::is_consistent) and
/// [`is_solved`](Self::is_solved) report whether the Sudoku constraints
/// hold.
///
/// # Text format
///
/// [`FromStr`] accepts 81 cells as the digits `1`-`9` for filled cells and
/// `.`, `_`, or `0` for blanks, with all whitespace ignored, so both the
/// compact one-line form and a 9-line layout parse:
///
/// ```
/// use kaidoku_core::Grid;
///
/// let compact: Grid =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()?;
/// let laid_out: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// assert_eq!(compact, laid_out);
/// # Ok::<(), kaidoku_core::ParseGridError>(())
/// ```
///
/// [`Display`] writes the compact form with `.` for blanks; the alternate
/// flag (`{:#}`) writes 9 lines of 9 characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from 81 numeric cell values in row-major order,
    /// where 0 means blank and 1-9 are digits.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::WrongCellCount`] unless `values` has
    /// exactly 81 elements, and [`ParseGridError::InvalidValue`] if any
    /// element is greater than 9.
    pub fn from_values(values: &[u8]) -> Result<Self, ParseGridError> {
        if values.len() != 81 {
            return Err(ParseGridError::WrongCellCount {
                count: values.len(),
            });
        }
        let mut grid = Self::new();
        for (pos, &value) in Position::ALL.iter().zip(values) {
            grid[*pos] = match value {
                0 => None,
                _ => Some(
                    Digit::try_from_value(value).ok_or(ParseGridError::InvalidValue { value })?,
                ),
            };
        }
        Ok(grid)
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the first blank cell in row-major scan order, or `None` if
    /// the grid is full.
    #[must_use]
    pub fn first_blank(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Computes the candidate set for a cell: the digits that appear in no
    /// filled cell of its row, column, or box.
    ///
    /// The cell's own value is excluded from the scan, so the result is
    /// well-defined for a filled cell too (it then answers "what could go
    /// here instead"). Candidates are recomputed from the current grid on
    /// every call; they are never cached, since any placement can change
    /// candidates anywhere in its houses.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaidoku_core::{Digit, DigitSet, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// assert_eq!(grid.candidates_at(Position::new(0, 0)), DigitSet::FULL);
    ///
    /// grid[Position::new(5, 0)] = Some(Digit::D3); // same row
    /// grid[Position::new(0, 7)] = Some(Digit::D4); // same column
    /// grid[Position::new(1, 1)] = Some(Digit::D5); // same box
    ///
    /// let candidates = grid.candidates_at(Position::new(0, 0));
    /// assert_eq!(
    ///     candidates,
    ///     DigitSet::from_iter([
    ///         Digit::D1,
    ///         Digit::D2,
    ///         Digit::D6,
    ///         Digit::D7,
    ///         Digit::D8,
    ///         Digit::D9,
    ///     ])
    /// );
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut seen = DigitSet::new();
        for house in pos.houses() {
            for peer in house.positions() {
                if peer == pos {
                    continue;
                }
                if let Some(digit) = self[peer] {
                    seen.insert(digit);
                }
            }
        }
        !seen
    }

    /// Returns whether no house contains the same digit twice.
    ///
    /// Blank cells are ignored, so this is defined for any fill level. A
    /// grid of givens that fails this check has no completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaidoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid[Position::new(0, 0)] = Some(Digit::D5);
    /// assert!(grid.is_consistent());
    ///
    /// grid[Position::new(8, 0)] = Some(Digit::D5); // same row
    /// assert!(!grid.is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.iter().all(|house| {
            let mut seen = DigitSet::new();
            house.positions().iter().all(|&pos| match self[pos] {
                Some(digit) => seen.insert(digit),
                None => true,
            })
        })
    }

    /// Returns whether the grid is completely and correctly solved.
    ///
    /// True iff there are no blanks and [`is_consistent`] holds, which for
    /// a full grid means every house is a permutation of 1-9.
    ///
    /// [`is_consistent`]: Self::is_consistent
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.first_blank().is_none() && self.is_consistent()
    }

    fn cell_from_char(c: char) -> Result<Option<Digit>, ParseGridError> {
        match c {
            '.' | '_' | '0' => Ok(None),
            _ => c
                .to_digit(10)
                .and_then(|value| u8::try_from(value).ok())
                .and_then(Digit::try_from_value)
                .map(Some)
                .ok_or(ParseGridError::InvalidCharacter { character: c }),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Self::cell_from_char(c)?;
            if let Some(slot) = grid.cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if f.alternate() && i > 0 && i % 9 == 0 {
                f.write_char('\n')?;
            }
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}
