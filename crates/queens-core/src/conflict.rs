//! Counting attacking pairs over a queen sequence.

use crate::position::Position;

/// Counts the unordered pairs of queens that attack each other.
///
/// A pair attacks when the two queens share a row, a column, or a diagonal
/// (equal absolute row and column deltas). The count is over pairs, so three
/// queens on one row contribute three pairs, not one. The result does not
/// depend on the order of the sequence.
///
/// For `n` queens this performs `n * (n - 1) / 2` pair checks; at the full
/// eight queens that is 28.
///
/// # Examples
///
/// ```
/// use queens_core::{Position, attacking_pairs};
///
/// let queens = [Position::new(0, 0), Position::new(0, 5), Position::new(3, 3)];
/// // (0,0)-(0,5) share a row, (0,0)-(3,3) share a diagonal.
/// assert_eq!(attacking_pairs(&queens), 2);
/// ```
#[must_use]
pub fn attacking_pairs(queens: &[Position]) -> usize {
    let mut pairs = 0;
    for (i, &a) in queens.iter().enumerate() {
        for &b in &queens[i + 1..] {
            if a.attacks(b) {
                pairs += 1;
            }
        }
    }
    pairs
}
