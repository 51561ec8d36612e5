//! Solving engine for kaidoku.
//!
//! The engine combines two layers:
//!
//! 1. [`sweep`] / [`propagate`] - fixed-point naked-single propagation:
//!    every blank cell whose candidate set has exactly one member is filled,
//!    repeatedly, until a full pass places nothing.
//! 2. [`BacktrackSolver`] - backtracking search for puzzles propagation
//!    cannot finish: guess a candidate at the first blank cell, re-propagate,
//!    and recurse, discarding the branch's grid copy when it dead-ends.
//!
//! Solving never mutates the caller's grid; the solver works on copies and
//! returns the solved grid (or a [`SolveError`]) along with [`SolveStats`]
//! describing how much work the search did.
//!
//! # Examples
//!
//! ```
//! use kaidoku_core::Grid;
//! use kaidoku_solver::BacktrackSolver;
//!
//! let puzzle: Grid = "
//!     ___ ___ _54
//!     __7 2__ __9
//!     _3_ 48_ 2__
//!     _6_ 8__ 49_
//!     ___ ___ ___
//!     _75 __4 _8_
//!     __8 _61 _2_
//!     1__ __3 5__
//!     59_ ___ ___
//! "
//! .parse()?;
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve(&puzzle)?;
//! assert!(solution.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, propagation::*};

mod backtrack;
mod propagation;
pub mod testing;
