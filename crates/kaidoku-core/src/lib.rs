//! Core data structures for the kaidoku Sudoku solver.
//!
//! This crate provides the domain types the solving engine is built on:
//! typed digits, candidate sets, board coordinates, houses (rows, columns,
//! and boxes), and the puzzle grid itself with parsing, formatting, and
//! validity checks.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of the digits 1-9
//! - [`digit_set`]: a bitset of digits, used for candidate sets
//! - [`position`]: board position (x, y) coordinates with row-major indexing
//! - [`house`]: the 27 constraint groups of a 9×9 board
//! - [`grid`]: the 81-cell puzzle grid and its candidate calculator
//!
//! # Examples
//!
//! ```
//! use kaidoku_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert!(grid.is_consistent());
//!
//! // Digits already present in the row, column, or box are not candidates.
//! let candidates = grid.candidates_at(Position::new(2, 0));
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! # Ok::<(), kaidoku_core::grid::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
};
