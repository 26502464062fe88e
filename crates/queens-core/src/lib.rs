//! Core data structures for the eight-queens puzzle.
//!
//! This crate provides the board-level building blocks shared by the solvers
//! and the game session: positions, the occupancy grid, placements, and
//! conflict counting. It contains no randomness; generating placements is the
//! job of the solver crate.
//!
//! # Overview
//!
//! - [`position`]: a (row, column) coordinate on the 8×8 board, with the
//!   queen attack predicate.
//! - [`board`]: the 8×8 occupancy grid.
//! - [`placement`]: a board plus its ordered queen sequence, kept mutually
//!   consistent through every mutation.
//! - [`conflict`]: counting attacking pairs over a queen sequence.
//!
//! Queens are *not* restricted to one per row or column: any set of eight
//! distinct cells is a valid placement, and sharing a row or column is simply
//! scored as a conflict.
//!
//! # Examples
//!
//! ```
//! use queens_core::{Placement, Position, attacking_pairs};
//!
//! let mut placement = Placement::new();
//! placement.place(Position::new(0, 0));
//! placement.place(Position::new(0, 5));
//!
//! // Two queens on the same row attack each other.
//! assert_eq!(placement.attacking_pairs(), 1);
//! assert_eq!(attacking_pairs(placement.queens()), 1);
//! ```

pub mod board;
pub mod conflict;
pub mod placement;
pub mod position;

// Re-export commonly used items
pub use self::{
    board::{BOARD_SIZE, Board},
    conflict::attacking_pairs,
    placement::{Placement, QUEEN_COUNT},
    position::Position,
};
