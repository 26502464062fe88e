//! Local search with random-restart hill climbing.

use derive_more::IsVariant;
use log::{debug, trace};
use queens_core::{BOARD_SIZE, Board, Placement, Position};
use rand::Rng;

use crate::{placer::place_queens, seed::SolveSeed};

/// The default iteration budget, global across restarts.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// A solver that improves a random placement one queen move at a time.
///
/// Starting from a fresh random placement, each iteration scans every queen
/// and every row of that queen's column (the column itself is never changed)
/// and applies the best strictly-improving move. When no move strictly
/// reduces the conflict count the placement is a local optimum and is
/// discarded for a fresh random one (a random restart), which consumes an
/// iteration like a move does. The iteration budget is global across all
/// restarts.
///
/// Because moves are row-only within a fixed column, two queens that start
/// in the same column are never separated by the search itself; only a
/// restart landing on a luckier placement resolves a column conflict.
///
/// # Examples
///
/// ```
/// use queens_solver::HillClimbingSolver;
///
/// let outcome = HillClimbingSolver::new().solve();
/// assert!(outcome.iterations() <= 1000);
/// assert_eq!(outcome.termination().is_solved(), outcome.attacking_pairs() == 0);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbingSolver {
    max_iterations: usize,
}

impl Default for HillClimbingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HillClimbingSolver {
    /// Creates a solver with the default iteration budget of 1000.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_iterations(DEFAULT_MAX_ITERATIONS)
    }

    /// Creates a solver with a custom iteration budget.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations` is zero.
    #[must_use]
    pub const fn with_max_iterations(max_iterations: usize) -> Self {
        assert!(max_iterations > 0);
        Self { max_iterations }
    }

    /// Returns the iteration budget.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Runs the climb with a freshly drawn random seed.
    #[must_use]
    pub fn solve(&self) -> HillClimbOutcome {
        self.solve_with_seed(SolveSeed::random())
    }

    /// Runs the climb with an explicit seed, reproducibly.
    #[must_use]
    pub fn solve_with_seed(&self, seed: SolveSeed) -> HillClimbOutcome {
        self.solve_with_rng(&mut seed.rng())
    }

    /// Runs the climb drawing randomness from the given generator.
    ///
    /// The returned outcome owns its placement snapshot. An initial
    /// placement that is already conflict-free terminates with zero
    /// iterations consumed.
    #[must_use]
    pub fn solve_with_rng<R>(&self, rng: &mut R) -> HillClimbOutcome
    where
        R: Rng + ?Sized,
    {
        let mut placement = Placement::new();
        place_queens(&mut placement, rng);
        let mut current = placement.attacking_pairs();
        let mut iterations = 0;

        while current > 0 && iterations < self.max_iterations {
            match best_move(&placement, current) {
                Some(mv) => {
                    placement.move_queen(mv.index, mv.row);
                    current = mv.attacking_pairs;
                }
                None => {
                    trace!("local optimum at {current} attacking pairs, restarting");
                    place_queens(&mut placement, rng);
                    current = placement.attacking_pairs();
                }
            }
            iterations += 1;
        }

        let termination = if current == 0 {
            ClimbTermination::Solved
        } else {
            ClimbTermination::Exhausted
        };
        debug!(
            "hill climbing {termination:?} after {iterations} iterations, \
             {current} attacking pairs"
        );
        HillClimbOutcome {
            placement,
            iterations,
            attacking_pairs: current,
            termination,
        }
    }
}

/// How a hill-climbing run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ClimbTermination {
    /// A conflict-free placement was reached.
    Solved,
    /// The iteration budget ran out with conflicts remaining.
    Exhausted,
}

/// The result of a [`HillClimbingSolver`] run.
///
/// Owns a snapshot of the final placement; mutating anything obtained from
/// the outcome cannot reach solver or session state.
#[derive(Debug, Clone)]
pub struct HillClimbOutcome {
    placement: Placement,
    iterations: usize,
    attacking_pairs: usize,
    termination: ClimbTermination,
}

impl HillClimbOutcome {
    /// Returns how the run ended.
    #[must_use]
    pub const fn termination(&self) -> ClimbTermination {
        self.termination
    }

    /// Returns the number of iterations consumed (0 up to the budget).
    ///
    /// Moves and restarts both count.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
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

    /// Returns the final attacking-pair count (zero when solved).
    #[must_use]
    pub const fn attacking_pairs(&self) -> usize {
        self.attacking_pairs
    }
}

#[derive(Debug, Clone, Copy)]
struct BestMove {
    index: usize,
    row: u8,
    attacking_pairs: usize,
}

/// Finds the best strictly-improving single-queen row move, if any.
///
/// Scans queens in ascending index order and candidate rows in ascending
/// order, skipping each queen's current row; the column is held fixed. A
/// candidate displaces the best only when its score is *strictly* lower than
/// the best seen so far, so ties go to the first improving move in scan
/// order. Candidates are scored copy-on-try; the placement is untouched.
fn best_move(placement: &Placement, current: usize) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;
    let mut best_pairs = current;
    for index in 0..placement.queen_count() {
        let origin = placement.queen(index);
        for row in 0..BOARD_SIZE {
            if row == origin.row() {
                continue;
            }
            let attacking_pairs = placement.attacking_pairs_with_move(index, row);
            if attacking_pairs < best_pairs {
                best_pairs = attacking_pairs;
                best = Some(BestMove {
                    index,
                    row,
                    attacking_pairs,
                });
            }
        }
    }
    best
}
