//! Pure random-restart search.

use log::debug;
use queens_core::{Board, Placement, Position};
use rand::Rng;

use crate::{placer::place_queens, seed::SolveSeed};

/// The default attempt budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// A solver that draws fresh random placements until one has no conflicts.
///
/// Each attempt is an independent placement over distinct cells; nothing is
/// carried from one attempt to the next. The search space is all
/// distinct-cell combinations rather than row/column permutations, so a
/// conflict-free draw is rare and exhausting the budget is the common
/// outcome, reported as an ordinary result rather than an error.
///
/// # Examples
///
/// ```
/// use queens_solver::RandomSearchSolver;
///
/// let outcome = RandomSearchSolver::new().solve();
/// if outcome.is_solved() {
///     assert_eq!(outcome.residual_conflicts(), None);
/// } else {
///     assert_eq!(outcome.attempts(), 1000);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomSearchSolver {
    max_attempts: usize,
}

impl Default for RandomSearchSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSearchSolver {
    /// Creates a solver with the default attempt budget of 1000.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a solver with a custom attempt budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        assert!(max_attempts > 0);
        Self { max_attempts }
    }

    /// Returns the attempt budget.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Runs the search with a freshly drawn random seed.
    #[must_use]
    pub fn solve(&self) -> RandomSearchOutcome {
        self.solve_with_seed(SolveSeed::random())
    }

    /// Runs the search with an explicit seed, reproducibly.
    #[must_use]
    pub fn solve_with_seed(&self, seed: SolveSeed) -> RandomSearchOutcome {
        self.solve_with_rng(&mut seed.rng())
    }

    /// Runs the search drawing randomness from the given generator.
    ///
    /// Attempts are numbered from 1. On success the outcome carries the
    /// number of the successful attempt and a zero-conflict placement; on
    /// exhaustion it carries exactly `max_attempts` and the last placement
    /// drawn, conflicts and all.
    #[must_use]
    pub fn solve_with_rng<R>(&self, rng: &mut R) -> RandomSearchOutcome
    where
        R: Rng + ?Sized,
    {
        let mut placement = Placement::new();
        for attempt in 1..=self.max_attempts {
            place_queens(&mut placement, rng);
            let attacking_pairs = placement.attacking_pairs();
            if attacking_pairs == 0 {
                debug!("random search solved on attempt {attempt}");
                return RandomSearchOutcome {
                    placement,
                    attempts: attempt,
                    attacking_pairs,
                };
            }
        }
        let attacking_pairs = placement.attacking_pairs();
        debug!(
            "random search exhausted {} attempts, {attacking_pairs} attacking pairs remain",
            self.max_attempts
        );
        RandomSearchOutcome {
            placement,
            attempts: self.max_attempts,
            attacking_pairs,
        }
    }
}

/// The result of a [`RandomSearchSolver`] run.
///
/// Owns a snapshot of the final placement; mutating anything obtained from
/// the outcome cannot reach solver or session state.
#[derive(Debug, Clone)]
pub struct RandomSearchOutcome {
    placement: Placement,
    attempts: usize,
    attacking_pairs: usize,
}

impl RandomSearchOutcome {
    /// Returns `true` if a conflict-free placement was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.attacking_pairs == 0
    }

    /// Returns the number of placements drawn (1 up to the attempt budget).
    ///
    /// On failure this is exactly the attempt budget.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the final placement snapshot.
    #[must_use]
    pub const fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns the final board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.placement.board()
    }

    /// Returns the final queen sequence.
    #[must_use]
    pub fn queens(&self) -> &[Position] {
        self.placement.queens()
    }

    /// Returns the residual conflict count, present only on failure.
    ///
    /// A solved outcome reports `None`; by definition it has no conflicts.
    #[must_use]
    pub const fn residual_conflicts(&self) -> Option<usize> {
        if self.attacking_pairs == 0 {
            None
        } else {
            Some(self.attacking_pairs)
        }
    }
}
