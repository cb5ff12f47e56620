//! Monty Logic
//!
//! Monte Carlo simulation of the Monty Hall problem: three doors, one
//! prize, a host who always opens a goat door the player did not pick.
//! The player's first pick is always door 0.
//!
//! This crate is compiled to:
//! - Native (for the `monty` command-line program)
//! - WASM (for running simulations in the browser)

mod error;
mod random;
mod game;
mod strategy;
mod tally;
mod run;

#[cfg(feature = "parallel")]
mod parallel;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::SimError;
pub use random::{expand_seed, RandomSource, SeededRng};
pub use game::{generate_batch, generate_game, reveal_goat, switch_target, Batch, Game, DOOR_COUNT, INITIAL_PICK};
pub use strategy::{count_random_wins, describe_strategy, evaluate_keep, evaluate_random, evaluate_switch, RandomOutcome, Strategy};
pub use tally::{RateHistory, WinTally};
pub use run::{iterations_from_f64, run, run_with_random, simulate, simulate_streaming, BatchMode, RunConfig, RunReport, DEFAULT_ITERATIONS};

#[cfg(feature = "parallel")]
pub use parallel::run_parallel;
