use queens_core::{Placement, Position};
use queens_solver::{
    HillClimbOutcome, HillClimbingSolver, RandomSearchOutcome, RandomSearchSolver, SolveSeed,
    place_queens,
};
use rand_pcg::Pcg64;

/// An eight-queens game session.
///
/// Holds the placement currently on display and the seeded random number
/// generator every random operation draws from, so a whole session replays
/// from its seed. Solver runs build their own fresh placements (nothing is
/// shared between invocations); the session then adopts the final placement
/// so the caller can keep rendering it.
///
/// # Example
///
/// ```
/// use queens_game::Game;
/// use queens_solver::SolveSeed;
///
/// let seed = SolveSeed::random();
/// let mut a = Game::with_seed(seed);
/// let mut b = Game::with_seed(seed);
///
/// // Same seed, same session history.
/// assert_eq!(a.place_queens(), b.place_queens());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    seed: SolveSeed,
    rng: Pcg64,
    placement: Placement,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a session with a freshly drawn random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(SolveSeed::random())
    }

    /// Creates a session that replays deterministically from `seed`.
    #[must_use]
    pub fn with_seed(seed: SolveSeed) -> Self {
        Self {
            seed,
            rng: seed.rng(),
            placement: Placement::new(),
        }
    }

    /// Returns the seed this session was created with.
    #[must_use]
    pub const fn seed(&self) -> SolveSeed {
        self.seed
    }

    /// Clears the board back to an empty placement.
    pub fn reset(&mut self) {
        self.placement.reset();
    }

    /// Scatters eight queens over distinct random cells.
    ///
    /// Replaces the current placement and returns the new queen sequence.
    /// Queens may share rows or columns; that is scored as conflicts, not
    /// rejected.
    pub fn place_queens(&mut self) -> Vec<Position> {
        place_queens(&mut self.placement, &mut self.rng);
        self.placement.queens().to_vec()
    }

    /// Borrows the current placement.
    #[must_use]
    pub const fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns an independent deep copy of the current placement.
    ///
    /// Mutating the copy has no effect on the session.
    #[must_use]
    pub fn snapshot(&self) -> Placement {
        self.placement.snapshot()
    }

    /// Counts the attacking pairs in the current placement.
    #[must_use]
    pub fn attacking_pairs(&self) -> usize {
        self.placement.attacking_pairs()
    }

    /// Returns `true` if all eight queens are placed with no conflicts.
    ///
    /// An empty or partial board is not solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.placement.is_full() && self.attacking_pairs() == 0
    }

    /// Solves by pure random search with the default attempt budget.
    ///
    /// Runs on its own fresh placements, threaded with the session RNG; the
    /// session adopts the outcome's final placement.
    pub fn generate_random_solution(&mut self) -> RandomSearchOutcome {
        let outcome = RandomSearchSolver::new().solve_with_rng(&mut self.rng);
        self.placement = outcome.placement().clone();
        outcome
    }

    /// Solves by random-restart hill climbing with the default budget.
    ///
    /// Runs on its own fresh placements, threaded with the session RNG; the
    /// session adopts the outcome's final placement.
    pub fn solve_with_hill_climbing(&mut self) -> HillClimbOutcome {
        let outcome = HillClimbingSolver::new().solve_with_rng(&mut self.rng);
        self.placement = outcome.placement().clone();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use queens_core::QUEEN_COUNT;

    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let game = Game::new();
        assert_eq!(game.placement().queen_count(), 0);
        assert_eq!(game.attacking_pairs(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_place_queens_fills_the_board() {
        let mut game = Game::new();
        let queens = game.place_queens();

        assert_eq!(queens.len(), QUEEN_COUNT);
        assert_eq!(game.placement().queen_count(), QUEEN_COUNT);
        for &pos in &queens {
            assert!(game.placement().board().is_occupied(pos));
        }
    }

    #[test]
    fn test_reset_clears_the_board() {
        let mut game = Game::new();
        game.place_queens();
        game.reset();

        assert_eq!(game.placement().queen_count(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut game = Game::new();
        game.place_queens();

        let mut snapshot = game.snapshot();
        let before = game.snapshot();
        snapshot.reset();

        assert_eq!(game.snapshot(), before);
        assert_eq!(game.placement().queen_count(), QUEEN_COUNT);
    }

    #[test]
    fn test_session_replays_from_seed() {
        let seed = SolveSeed::random();
        let mut a = Game::with_seed(seed);
        let mut b = Game::with_seed(seed);

        assert_eq!(a.place_queens(), b.place_queens());

        let climb_a = a.solve_with_hill_climbing();
        let climb_b = b.solve_with_hill_climbing();
        assert_eq!(climb_a.iterations(), climb_b.iterations());
        assert_eq!(climb_a.queens(), climb_b.queens());
    }

    #[test]
    fn test_session_adopts_random_search_result() {
        let mut game = Game::new();
        let outcome = game.generate_random_solution();

        assert_eq!(game.placement().queens(), outcome.queens());
        assert_eq!(
            game.attacking_pairs(),
            outcome.residual_conflicts().unwrap_or(0)
        );
    }

    #[test]
    fn test_session_adopts_hill_climbing_result() {
        let mut game = Game::new();
        let outcome = game.solve_with_hill_climbing();

        assert_eq!(game.placement().queens(), outcome.queens());
        assert_eq!(game.attacking_pairs(), outcome.attacking_pairs());
        assert_eq!(game.is_solved(), outcome.termination().is_solved());
    }
}
