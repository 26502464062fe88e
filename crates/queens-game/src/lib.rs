//! Game session facade for the eight-queens puzzle.
//!
//! This crate is the surface a presentation layer talks to. A [`Game`] owns
//! the current placement and a seeded random number generator, and exposes
//! the engine operations: random placement, conflict counting, and the two
//! solving strategies. Everything a caller receives is an owned snapshot;
//! the session's live state is never lent out mutably.
//!
//! # Examples
//!
//! ```
//! use queens_game::Game;
//!
//! let mut game = Game::new();
//! game.place_queens();
//! println!("{} attacking pairs", game.attacking_pairs());
//!
//! let outcome = game.solve_with_hill_climbing();
//! if outcome.termination().is_solved() {
//!     println!("solved in {} iterations", outcome.iterations());
//! }
//! ```

mod game;

pub use self::game::Game;
