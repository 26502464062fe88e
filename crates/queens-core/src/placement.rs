//! A board and its ordered queen sequence, kept consistent.

use tinyvec::ArrayVec;

use crate::{board::Board, conflict, position::Position};

/// The number of queens in a full placement.
pub const QUEEN_COUNT: usize = 8;

/// A board together with the ordered sequence of queens standing on it.
///
/// The two views are kept consistent through every mutation: a cell is
/// occupied exactly when some queen in the sequence stands on it. The
/// sequence is ordered (queen index matters to the hill-climbing move scan),
/// holds at most [`QUEEN_COUNT`] entries, and is filled by the solver crate's
/// random placer.
///
/// A `Placement` never leaves the engine alive: callers receive owned deep
/// copies via [`snapshot`](Self::snapshot), so mutating a returned value
/// cannot disturb engine state.
///
/// # Examples
///
/// ```
/// use queens_core::{Placement, Position};
///
/// let mut placement = Placement::new();
/// placement.place(Position::new(0, 0));
/// placement.place(Position::new(3, 0));
///
/// assert_eq!(placement.queen_count(), 2);
/// assert!(placement.board().is_occupied(Position::new(3, 0)));
/// assert_eq!(placement.attacking_pairs(), 1); // shared column
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    board: Board,
    queens: ArrayVec<[Position; QUEEN_COUNT]>,
}

impl Placement {
    /// Creates an empty placement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board and the queen sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.queens.clear();
    }

    /// Places a queen on an empty cell, appending it to the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied or the placement already holds
    /// [`QUEEN_COUNT`] queens. The random placer only ever calls this on
    /// empty cells of a non-full placement.
    pub fn place(&mut self, pos: Position) {
        assert!(!self.board.is_occupied(pos), "cell {pos} is occupied");
        assert!(self.queens.len() < QUEEN_COUNT, "placement is full");
        self.board.occupy(pos);
        self.queens.push(pos);
    }

    /// Returns the number of queens placed so far.
    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    /// Returns `true` if all [`QUEEN_COUNT`] queens are placed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.queens.len() == QUEEN_COUNT
    }

    /// Returns the position of the queen at `index` in placement order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn queen(&self, index: usize) -> Position {
        self.queens[index]
    }

    /// Returns the queen sequence in placement order.
    #[must_use]
    pub fn queens(&self) -> &[Position] {
        &self.queens
    }

    /// Returns the occupancy grid.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Counts the attacking pairs among the placed queens.
    #[must_use]
    pub fn attacking_pairs(&self) -> usize {
        conflict::attacking_pairs(&self.queens)
    }

    /// Scores a candidate move without touching the live placement.
    ///
    /// Returns the attacking-pair count the placement would have if the queen
    /// at `index` stood on `row` of its current column. The count is computed
    /// over a copied sequence, so the placement is bit-identical before and
    /// after the call.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `row` is not in 0-7.
    #[must_use]
    pub fn attacking_pairs_with_move(&self, index: usize, row: u8) -> usize {
        let mut trial = self.queens;
        trial[index] = Position::new(row, self.queens[index].col());
        conflict::attacking_pairs(&trial)
    }

    /// Moves the queen at `index` to `row` of its current column.
    ///
    /// The signature fixes the column: a move can never change it. The origin
    /// cell is vacated only if no other queen still stands on it, which keeps
    /// the board consistent even when two same-column queens end up sharing a
    /// cell.
    ///
    /// Returns the queen's new position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `row` is not in 0-7.
    pub fn move_queen(&mut self, index: usize, row: u8) -> Position {
        let from = self.queens[index];
        let to = Position::new(row, from.col());
        self.queens[index] = to;
        if !self.queens.iter().any(|&queen| queen == from) {
            self.board.vacate(from);
        }
        self.board.occupy(to);
        to
    }

    /// Returns an independent deep copy of the placement.
    ///
    /// The copy shares nothing with the engine state; mutating it has no
    /// effect on this placement.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal_placement() -> Placement {
        // All eight queens on the main diagonal: plenty of conflicts but
        // distinct cells.
        let mut placement = Placement::new();
        for i in 0..u8::try_from(QUEEN_COUNT).unwrap() {
            placement.place(Position::new(i, i));
        }
        placement
    }

    #[test]
    fn test_place_keeps_board_and_sequence_consistent() {
        let mut placement = Placement::new();
        placement.place(Position::new(2, 5));
        placement.place(Position::new(6, 1));

        assert_eq!(placement.queen_count(), 2);
        assert_eq!(placement.queens(), [Position::new(2, 5), Position::new(6, 1)]);
        for pos in Position::all() {
            let expected = placement.queens().contains(&pos);
            assert_eq!(placement.board().is_occupied(pos), expected);
        }
    }

    #[test]
    #[should_panic(expected = "is occupied")]
    fn test_place_rejects_occupied_cell() {
        let mut placement = Placement::new();
        placement.place(Position::new(0, 0));
        placement.place(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "placement is full")]
    fn test_place_rejects_ninth_queen() {
        let mut placement = diagonal_placement();
        placement.place(Position::new(0, 7));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut placement = diagonal_placement();
        placement.reset();

        assert_eq!(placement.queen_count(), 0);
        assert_eq!(placement.board().occupied_count(), 0);
        assert!(!placement.is_full());
    }

    #[test]
    fn test_move_queen_keeps_column() {
        let mut placement = Placement::new();
        placement.place(Position::new(0, 3));

        let moved = placement.move_queen(0, 6);
        assert_eq!(moved, Position::new(6, 3));
        assert_eq!(placement.queen(0), Position::new(6, 3));
        assert!(!placement.board().is_occupied(Position::new(0, 3)));
        assert!(placement.board().is_occupied(Position::new(6, 3)));
    }

    #[test]
    fn test_move_queen_onto_shared_cell_keeps_flag() {
        // Two queens in one column; moving one onto the other's cell must not
        // clear the flag when the first later moves away.
        let mut placement = Placement::new();
        placement.place(Position::new(0, 2));
        placement.place(Position::new(5, 2));

        placement.move_queen(0, 5);
        assert!(placement.board().is_occupied(Position::new(5, 2)));

        placement.move_queen(0, 1);
        assert!(placement.board().is_occupied(Position::new(5, 2)));
        assert!(placement.board().is_occupied(Position::new(1, 2)));
        assert!(!placement.board().is_occupied(Position::new(0, 2)));
    }

    #[test]
    fn test_trial_score_leaves_state_untouched() {
        let placement = diagonal_placement();
        let before = placement.clone();

        let current = placement.attacking_pairs();
        let trial = placement.attacking_pairs_with_move(0, 7);

        assert_eq!(placement, before);
        // Moving the first diagonal queen off the diagonal must change the
        // score relative to the all-diagonal baseline.
        assert_ne!(trial, current);
    }

    #[test]
    fn test_trial_score_matches_applied_move() {
        let mut placement = diagonal_placement();
        let predicted = placement.attacking_pairs_with_move(3, 7);
        placement.move_queen(3, 7);
        assert_eq!(placement.attacking_pairs(), predicted);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut placement = Placement::new();
        placement.place(Position::new(0, 0));

        let mut snapshot = placement.snapshot();
        snapshot.place(Position::new(4, 4));

        assert_eq!(placement.queen_count(), 1);
        assert!(!placement.board().is_occupied(Position::new(4, 4)));
    }
}
