//! Player strategies and their batch evaluators

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::SimError;
use crate::game::{reveal_goat, switch_target, Game, INITIAL_PICK};
use crate::random::RandomSource;
use crate::tally::RateHistory;

/// What the player does once the host has opened a goat door
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Stay with the initial pick.
    Keep,
    /// Move to the remaining unopened door.
    Switch,
    /// Flip a fair coin between keeping and switching.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Keep, Strategy::Switch, Strategy::Random];

    /// Door the player ends up on
    ///
    /// Only `Random` draws from `rng`, one coin flip per game.
    pub fn final_choice<R: RandomSource>(&self, game: &Game, rng: &mut R) -> usize {
        match self {
            Strategy::Keep => INITIAL_PICK,
            Strategy::Switch => switch_target(reveal_goat(game)),
            Strategy::Random => {
                let goat = reveal_goat(game);
                if rng.next_bool() {
                    INITIAL_PICK
                } else {
                    switch_target(goat)
                }
            }
        }
    }

    pub fn is_win<R: RandomSource>(&self, game: &Game, rng: &mut R) -> bool {
        game.is_prize(self.final_choice(game, rng))
    }

    /// Long-run win rate predicted by probability theory
    pub fn expected_rate(&self) -> f64 {
        match self {
            Strategy::Keep => 1.0 / 3.0,
            Strategy::Switch => 2.0 / 3.0,
            Strategy::Random => 0.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Keep => "keep",
            Strategy::Switch => "switch",
            Strategy::Random => "random",
        }
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep" | "stay" => Ok(Strategy::Keep),
            "switch" => Ok(Strategy::Switch),
            "random" => Ok(Strategy::Random),
            _ => Err(SimError::invalid("strategy", s)),
        }
    }
}

/// Human-readable description of a strategy
pub fn describe_strategy(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Keep => "Never switches. Wins only when the first pick hides the prize.",
        Strategy::Switch => "Always switches to the unopened door. Wins whenever the first pick was a goat.",
        Strategy::Random => "Flips a coin after the reveal to decide whether to switch.",
    }
}

/// Wins and running win rate of the random strategy over one batch
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RandomOutcome {
    pub wins: u64,
    pub history: RateHistory,
}

/// Count games won by never switching
pub fn evaluate_keep(batch: &[Game]) -> u64 {
    batch.iter().filter(|game| game.is_prize(INITIAL_PICK)).count() as u64
}

/// Count games won by always switching
pub fn evaluate_switch(batch: &[Game]) -> u64 {
    batch
        .iter()
        .filter(|game| game.is_prize(switch_target(reveal_goat(game))))
        .count() as u64
}

/// Play the coin-flip strategy over `batch` in order
///
/// The history gets one entry per game: wins so far over games so far.
pub fn evaluate_random<R: RandomSource>(batch: &[Game], rng: &mut R) -> RandomOutcome {
    let mut wins = 0u64;
    let mut history = RateHistory::with_capacity(batch.len());

    for (attempt, game) in batch.iter().enumerate() {
        if Strategy::Random.is_win(game, rng) {
            wins += 1;
        }
        history.push(wins, attempt as u64 + 1);
    }

    RandomOutcome { wins, history }
}

/// Wins of the coin-flip strategy, without the history
///
/// Draws the same coin flips as [`evaluate_random`] for the same `rng`.
pub fn count_random_wins<R: RandomSource>(batch: &[Game], rng: &mut R) -> u64 {
    batch
        .iter()
        .filter(|game| Strategy::Random.is_win(game, rng))
        .count() as u64
}
