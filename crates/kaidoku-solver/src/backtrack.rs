//! Backtracking search for puzzles propagation cannot finish.

use kaidoku_core::Grid;

use crate::propagation;

/// Error returned when a puzzle cannot be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Two givens in the same row, column, or box hold the same digit, so
    /// no completion exists and the search is not attempted.
    #[display("puzzle givens conflict with each other")]
    InconsistentGivens,
    /// The givens are consistent but the search exhausted every branch
    /// without completing the grid.
    #[display("puzzle has no solution")]
    Unsolvable,
}

/// Counters describing how much work a solve did.
///
/// All counters are totals over the entire search, including branches that
/// were later abandoned.
///
/// # Examples
///
/// ```
/// use kaidoku_core::Grid;
/// use kaidoku_solver::BacktrackSolver;
///
/// let puzzle: Grid = "
///     ___ 37_ 65_
///     4_7 2__ ___
///     _3_ ___ ___
///     3__ 8__ __2
///     9__ ___ ___
///     ___ __4 _81
///     __8 _61 9__
///     _2_ _43 ___
///     5__ 7__ ___
/// "
/// .parse()?;
///
/// let (_, stats) = BacktrackSolver::new().solve_with_stats(&puzzle)?;
/// // This puzzle falls to naked singles alone.
/// assert!(stats.solved_without_assumptions());
/// assert_eq!(stats.singles(), 57);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    singles: usize,
    assumptions: usize,
    backtracks: usize,
}

impl SolveStats {
    /// Number of cells filled by naked-single propagation.
    #[must_use]
    pub fn singles(&self) -> usize {
        self.singles
    }

    /// Number of digits tried at branch points.
    #[must_use]
    pub fn assumptions(&self) -> usize {
        self.assumptions
    }

    /// Number of assumptions that were abandoned after their branch
    /// dead-ended.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns whether propagation alone solved the puzzle, with no
    /// guessing required.
    #[must_use]
    pub fn solved_without_assumptions(&self) -> bool {
        self.assumptions == 0
    }
}

/// A depth-first Sudoku solver: propagate, then guess and recurse.
///
/// Each level of the search first runs naked-single propagation to a fixed
/// point. If blanks remain, the solver takes the first blank cell in
/// row-major order and tries each of its candidate digits in ascending
/// order on a copy of the grid, recursing after each placement. The first
/// branch to complete the grid wins and unwinds the whole search; a branch
/// whose cell has no candidates fails immediately.
///
/// The branch order (first blank cell, ascending digits) is fixed, so on a
/// puzzle with several solutions the same one is always returned.
///
/// # Examples
///
/// ```
/// use kaidoku_core::Grid;
/// use kaidoku_solver::{BacktrackSolver, SolveError};
///
/// let puzzle: Grid = "
///     ___ ___ _54
///     __7 2__ __9
///     _3_ 48_ 2__
///     _6_ 8__ 49_
///     ___ ___ ___
///     _75 __4 _8_
///     __8 _61 _2_
///     1__ __3 5__
///     59_ ___ ___
/// "
/// .parse()?;
///
/// let solution = BacktrackSolver::new().solve(&puzzle)?;
/// assert!(solution.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves the puzzle and returns the completed grid.
    ///
    /// The input is not modified; the solution is returned as a new grid
    /// with zero blanks that satisfies every house constraint.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InconsistentGivens`] if two givens conflict,
    /// and [`SolveError::Unsolvable`] if the search exhausts every branch.
    pub fn solve(self, grid: &Grid) -> Result<Grid, SolveError> {
        self.solve_with_stats(grid).map(|(solved, _)| solved)
    }

    /// Solves the puzzle and additionally returns [`SolveStats`] for the
    /// search.
    ///
    /// # Errors
    ///
    /// Same conditions as [`solve`](Self::solve).
    pub fn solve_with_stats(self, grid: &Grid) -> Result<(Grid, SolveStats), SolveError> {
        if !grid.is_consistent() {
            return Err(SolveError::InconsistentGivens);
        }
        let mut stats = SolveStats::default();
        match Self::search(grid.clone(), &mut stats) {
            Some(solved) => Ok((solved, stats)),
            None => Err(SolveError::Unsolvable),
        }
    }

    // Consumes its grid: every call level owns an independent copy, so a
    // failed branch is discarded rather than undone.
    fn search(mut grid: Grid, stats: &mut SolveStats) -> Option<Grid> {
        stats.singles += propagation::propagate(&mut grid);
        let Some(pos) = grid.first_blank() else {
            debug_assert!(grid.is_solved());
            return Some(grid);
        };
        for digit in grid.candidates_at(pos) {
            stats.assumptions += 1;
            let mut hypothesis = grid.clone();
            hypothesis[pos] = Some(digit);
            if let Some(solved) = Self::search(hypothesis, stats) {
                return Some(solved);
            }
            stats.backtracks += 1;
        }
        None
    }
}
