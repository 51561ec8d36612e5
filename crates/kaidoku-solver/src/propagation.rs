//! Fixed-point naked-single propagation.

use kaidoku_core::{Grid, Position};

/// Runs one propagation pass, placing every naked single found.
///
/// Cells are scanned in row-major index order. A placement happens in
/// place, so cells later in the same pass already see it; a chain of naked
/// singles that enable one another left-to-right resolves in a single pass.
/// Returns the number of cells placed.
///
/// # Examples
///
/// ```
/// use kaidoku_core::{Digit, Grid, Position};
/// use kaidoku_solver::sweep;
///
/// // Row 0 is missing only 1 and 2; column 0 already holds a 2 below, so
/// // (0, 0) is forced to 1, which in turn forces (1, 0) to 2.
/// let mut grid: Grid = "
///     __3 456 789
///     ___ ___ ___
///     ___ ___ ___
///     2__ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
///
/// assert_eq!(sweep(&mut grid), 2);
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
/// assert_eq!(grid[Position::new(1, 0)], Some(Digit::D2));
/// # Ok::<(), kaidoku_core::ParseGridError>(())
/// ```
pub fn sweep(grid: &mut Grid) -> usize {
    let mut placed = 0;
    for pos in Position::ALL {
        if grid[pos].is_some() {
            continue;
        }
        if let Some(digit) = grid.candidates_at(pos).as_single() {
            grid[pos] = Some(digit);
            placed += 1;
        }
    }
    placed
}

/// Repeats [`sweep`] until a pass places nothing, and returns the total
/// number of cells placed.
///
/// The blank count strictly decreases across productive passes and is
/// bounded below by zero, so the loop terminates. The grid may still
/// contain blanks afterwards: propagation alone only resolves naked
/// singles, and puzzles that need more than that stall at a fixed point
/// for the backtracking layer to finish.
pub fn propagate(grid: &mut Grid) -> usize {
    let mut total = 0;
    loop {
        let placed = sweep(grid);
        if placed == 0 {
            return total;
        }
        total += placed;
    }
}
