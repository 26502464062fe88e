//! Example demonstrating the eight-queens solvers.
//!
//! This example shows how to:
//! - Run either solving strategy, optionally from a fixed seed
//! - Display the final board, the seed, and the solver's effort
//! - Sample many runs in parallel to estimate a strategy's success rate
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve -- --strategy hill-climbing
//! ```
//!
//! Reproduce a run from its printed seed:
//!
//! ```sh
//! cargo run --example solve -- --strategy random \
//!     --seed 4b9d0a66e3c1527f4b9d0a66e3c1527f4b9d0a66e3c1527f4b9d0a66e3c1527f
//! ```
//!
//! Estimate the success rate over many runs (each run draws its own seed):
//!
//! ```sh
//! cargo run --example solve -- --strategy hill-climbing --runs 500
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use queens_solver::{HillClimbingSolver, RandomSearchSolver, SolveSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    Random,
    HillClimbing,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Solving strategy to run.
    #[arg(long, value_name = "STRATEGY", default_value = "hill-climbing")]
    strategy: Strategy,

    /// Seed as 64 hex digits; a fresh one is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of runs; more than one switches to success-rate sampling.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    runs: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed.as_deref() {
        Some(input) => match input.parse() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => SolveSeed::random(),
    };

    if args.runs == 0 {
        eprintln!("--runs must be at least 1.");
        process::exit(1);
    }

    if args.runs == 1 {
        run_once(args.strategy, seed);
    } else {
        if args.seed.is_some() {
            eprintln!("--seed only applies to a single run; ignoring it.");
        }
        sample_runs(args.strategy, args.runs);
    }
}

fn run_once(strategy: Strategy, seed: SolveSeed) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    match strategy {
        Strategy::Random => {
            let outcome = RandomSearchSolver::new().solve_with_seed(seed);
            print_board(&outcome.board().to_string());
            println!("Random search:");
            println!("  Solved: {}", outcome.is_solved());
            println!("  Attempts: {}", outcome.attempts());
            if let Some(conflicts) = outcome.residual_conflicts() {
                println!("  Remaining attacking pairs: {conflicts}");
            }
        }
        Strategy::HillClimbing => {
            let outcome = HillClimbingSolver::new().solve_with_seed(seed);
            print_board(&outcome.board().to_string());
            println!("Hill climbing:");
            println!("  Termination: {:?}", outcome.termination());
            println!("  Iterations: {}", outcome.iterations());
            println!("  Attacking pairs: {}", outcome.attacking_pairs());
        }
    }
}

fn sample_runs(strategy: Strategy, runs: usize) {
    let seeds: Vec<_> = (0..runs).map(|_| SolveSeed::random()).collect();
    let solved = seeds
        .into_par_iter()
        .filter(|&seed| match strategy {
            Strategy::Random => RandomSearchSolver::new().solve_with_seed(seed).is_solved(),
            Strategy::HillClimbing => HillClimbingSolver::new()
                .solve_with_seed(seed)
                .termination()
                .is_solved(),
        })
        .count();

    println!("Runs: {runs}");
    println!("Solved: {solved}");
    #[expect(clippy::cast_precision_loss)]
    let rate = solved as f64 / runs as f64 * 100.0;
    println!("Success rate: {rate:.1}%");
}

fn print_board(board: &str) {
    println!("Board:");
    for line in board.lines() {
        println!("  {line}");
    }
    println!();
}
