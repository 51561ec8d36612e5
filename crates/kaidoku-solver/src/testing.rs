//! Test utilities for solver behavior.
//!
//! This module provides [`SolverTester`], a testing harness for verifying
//! propagation and search behavior on a puzzle.
//!
//! # Example
//!
//! ```
//! # use kaidoku_solver::testing::SolverTester;
//! SolverTester::from_str("
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! ")
//! .assert_solution("534678912672195348198342567859761423426853791713924856961537284287419635345286179")
//! .assert_solved_without_assumptions();
//! ```

use std::str::FromStr as _;

use kaidoku_core::Grid;

use crate::{BacktrackSolver, SolveError, SolveStats, propagation};

/// A test harness for verifying solver behavior.
///
/// `SolverTester` holds a grid and runs propagation or the full search on
/// it, asserting that each step produces the expected result.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolverTester {
    grid: Grid,
    stats: SolveStats,
}

impl SolverTester {
    /// Creates a new tester from a grid string.
    ///
    /// The string format matches [`Grid::from_str`]:
    /// - Digits 1-9 represent filled cells
    /// - `.`, `_`, or `0` represent blank cells
    /// - Whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::from_str(s).unwrap();
        Self {
            grid,
            stats: SolveStats::default(),
        }
    }

    /// Runs a single propagation pass and asserts how many cells it filled.
    ///
    /// # Panics
    ///
    /// Panics if the pass placed a different number of digits.
    #[track_caller]
    pub fn assert_sweep_places(mut self, expected: usize) -> Self {
        let placed = propagation::sweep(&mut self.grid);
        assert_eq!(
            placed, expected,
            "Expected a sweep to place {expected} digits, but it placed {placed}"
        );
        self
    }

    /// Propagates to a fixed point and asserts the resulting grid.
    ///
    /// # Panics
    ///
    /// Panics if the grid after propagation differs from `expected`.
    #[track_caller]
    pub fn assert_propagates_to(mut self, expected: &str) -> Self {
        let expected = Grid::from_str(expected).unwrap();
        propagation::propagate(&mut self.grid);
        assert_eq!(
            self.grid, expected,
            "Expected propagation to reach the given grid"
        );
        self
    }

    /// Solves the puzzle and asserts the solution.
    ///
    /// The tester's grid is replaced by the solution, and the solve's
    /// [`SolveStats`] are recorded for later assertions.
    ///
    /// # Panics
    ///
    /// Panics if the solve fails or finds a different solution.
    #[track_caller]
    pub fn assert_solution(mut self, expected: &str) -> Self {
        let expected = Grid::from_str(expected).unwrap();
        let (solved, stats) = match BacktrackSolver::new().solve_with_stats(&self.grid) {
            Ok(result) => result,
            Err(err) => panic!("Expected the puzzle to solve, but it failed: {err}"),
        };
        assert_eq!(
            solved, expected,
            "Expected the solver to find the given solution"
        );
        self.grid = solved;
        self.stats = stats;
        self
    }

    /// Asserts that solving the puzzle fails with the given error.
    ///
    /// # Panics
    ///
    /// Panics if the solve succeeds or fails with a different error.
    #[track_caller]
    pub fn assert_error(self, expected: SolveError) -> Self {
        match BacktrackSolver::new().solve(&self.grid) {
            Ok(_) => panic!("Expected the solve to fail with {expected:?}, but it succeeded"),
            Err(err) => assert_eq!(err, expected, "Expected a different solve failure"),
        }
        self
    }

    /// Asserts that the most recent [`assert_solution`](Self::assert_solution)
    /// needed no assumptions.
    ///
    /// # Panics
    ///
    /// Panics if the recorded solve made at least one assumption.
    #[track_caller]
    pub fn assert_solved_without_assumptions(self) -> Self {
        assert!(
            self.stats.solved_without_assumptions(),
            "Expected propagation alone to solve the puzzle, but the search made {} assumptions",
            self.stats.assumptions()
        );
        self
    }
}
