//! Random placement of queens on distinct cells.

use queens_core::{BOARD_SIZE, Placement, Position};
use rand::{Rng, RngExt};

/// Fills a placement with eight queens on distinct random cells.
///
/// The placement is reset first, then cells are drawn uniformly from the full
/// 64-cell grid (*not* from a row/column permutation space) with rejection
/// sampling: an already-occupied cell is simply redrawn. Two queens may end
/// up sharing a row or a column; that is a conflict to be scored, not an
/// error. With at most 8 of 64 cells occupied the redraw loop terminates
/// quickly in practice, though no bound is part of the contract.
///
/// # Examples
///
/// ```
/// use queens_core::Placement;
/// use queens_solver::{SolveSeed, place_queens};
///
/// let mut placement = Placement::new();
/// place_queens(&mut placement, &mut SolveSeed::random().rng());
/// assert!(placement.is_full());
/// ```
pub fn place_queens<R>(placement: &mut Placement, rng: &mut R)
where
    R: Rng + ?Sized,
{
    placement.reset();
    while !placement.is_full() {
        let pos = Position::new(
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        if placement.board().is_occupied(pos) {
            continue;
        }
        placement.place(pos);
    }
}
