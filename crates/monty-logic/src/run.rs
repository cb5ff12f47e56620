//! Run orchestration: split an iteration budget between strategies,
//! generate games, evaluate, and collect tallies.

use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;
use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use crate::error::{check_count, SimError};
use crate::game::{generate_batch, generate_game, Batch, Game};
use crate::random::RandomSource;
use crate::strategy::{count_random_wins, evaluate_keep, evaluate_random, evaluate_switch, Strategy};
use crate::tally::{RateHistory, WinTally};

/// Default iteration budget for a run.
pub const DEFAULT_ITERATIONS: i64 = 10_000_000;

/// How games are shared between strategies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Each strategy plays its own freshly generated games.
    #[default]
    Separate,
    /// Every strategy plays the same games.
    Shared,
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMode::Separate => write!(f, "separate"),
            BatchMode::Shared => write!(f, "shared"),
        }
    }
}

impl FromStr for BatchMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "separate" => Ok(BatchMode::Separate),
            "shared" => Ok(BatchMode::Shared),
            _ => Err(SimError::invalid("batch mode", s)),
        }
    }
}

/// Parameters of one simulation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Total games across all strategies under test.
    pub iterations: i64,
    /// Seed for a reproducible run. Drawn from entropy when absent.
    pub seed: Option<u64>,
    pub batch_mode: BatchMode,
    /// Also evaluate the coin-flip strategy.
    pub include_random: bool,
    /// Keep the random strategy's cumulative win-rate history.
    pub record_history: bool,
    /// Generate one game at a time instead of materialising batches.
    pub streaming: bool,
    /// Worker threads for the parallel runner. 0 means one per logical CPU.
    pub workers: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            batch_mode: BatchMode::Separate,
            include_random: false,
            record_history: true,
            streaming: false,
            workers: None,
        }
    }
}

impl RunConfig {
    pub fn new(iterations: i64) -> Self {
        Self { iterations, ..Default::default() }
    }

    /// Parse a JSON run configuration; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: RunConfig = serde_json::from_str(json)
            .map_err(|e| SimError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        check_count("iteration count", self.iterations)?;
        Ok(())
    }

    pub fn strategies(&self) -> &'static [Strategy] {
        if self.include_random {
            &[Strategy::Switch, Strategy::Keep, Strategy::Random]
        } else {
            &[Strategy::Switch, Strategy::Keep]
        }
    }

    /// Even share of the budget per strategy; the remainder is not played
    pub fn games_per_strategy(&self) -> Result<u64, SimError> {
        let iterations = check_count("iteration count", self.iterations)? as u64;
        Ok(iterations / self.strategies().len() as u64)
    }
}

/// Tallies collected by a run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub games_per_strategy: u64,
    pub batch_mode: BatchMode,
    pub switch: WinTally,
    pub keep: WinTally,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<WinTally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<RateHistory>,
}

impl RunReport {
    pub fn empty(batch_mode: BatchMode, include_random: bool) -> Self {
        Self {
            games_per_strategy: 0,
            batch_mode,
            switch: WinTally::default(),
            keep: WinTally::default(),
            random: include_random.then(WinTally::default),
            history: None,
        }
    }

    pub fn switch_rate(&self) -> f64 {
        self.switch.rate()
    }

    pub fn keep_rate(&self) -> f64 {
        self.keep.rate()
    }

    pub fn random_rate(&self) -> Option<f64> {
        self.random.map(|tally| tally.rate())
    }

    pub fn tally(&self, strategy: Strategy) -> Option<WinTally> {
        match strategy {
            Strategy::Keep => Some(self.keep),
            Strategy::Switch => Some(self.switch),
            Strategy::Random => self.random,
        }
    }
}

/// Merges partial reports. Histories cannot be spliced and are dropped.
impl AddAssign for RunReport {
    fn add_assign(&mut self, other: Self) {
        self.games_per_strategy += other.games_per_strategy;
        self.switch += other.switch;
        self.keep += other.keep;
        self.random = match (self.random, other.random) {
            (Some(mut mine), Some(theirs)) => {
                mine += theirs;
                Some(mine)
            }
            (mine, theirs) => mine.or(theirs),
        };
        self.history = None;
    }
}

/// Convert a floating-point iteration count, as JavaScript supplies it
///
/// Rejects non-integral, non-finite and out-of-range values instead of
/// letting the cast saturate.
pub fn iterations_from_f64(value: f64) -> Result<i64, SimError> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value >= i64::MAX as f64 {
        return Err(SimError::invalid("iteration count", value));
    }
    Ok(value as i64)
}

/// Switch and keep win rates over `iterations` games, split evenly
///
/// Each strategy plays its own freshly generated batch.
pub fn run<R: RandomSource>(iterations: i64, rng: &mut R) -> Result<(f64, f64), SimError> {
    let report = simulate(&RunConfig::new(iterations), rng)?;
    Ok((report.switch_rate(), report.keep_rate()))
}

/// Like [`run`], with the random strategy as a third contender
pub fn run_with_random<R: RandomSource>(iterations: i64, rng: &mut R) -> Result<RunReport, SimError> {
    let config = RunConfig {
        include_random: true,
        ..RunConfig::new(iterations)
    };
    simulate(&config, rng)
}

/// Run a simulation as described by `config`
pub fn simulate<R: RandomSource>(config: &RunConfig, rng: &mut R) -> Result<RunReport, SimError> {
    if config.streaming {
        return simulate_streaming(config, rng);
    }
    let games = config.games_per_strategy()?;
    log::debug!("{:<32}{:<16}{}", "generating batches", config.batch_mode, games);

    let mut report = RunReport::empty(config.batch_mode, config.include_random);
    report.games_per_strategy = games;

    let shared = match config.batch_mode {
        BatchMode::Shared => Some(generate_batch(games as i64, rng)?),
        BatchMode::Separate => None,
    };

    // Each fresh batch is dropped as soon as its strategy is scored.
    {
        let batch = batch_for(&shared, games, rng)?;
        report.switch = WinTally::new(evaluate_switch(&batch), games);
    }
    {
        let batch = batch_for(&shared, games, rng)?;
        report.keep = WinTally::new(evaluate_keep(&batch), games);
    }
    if config.include_random {
        let batch = batch_for(&shared, games, rng)?;
        if config.record_history {
            let outcome = evaluate_random(&batch, rng);
            report.random = Some(WinTally::new(outcome.wins, games));
            report.history = Some(outcome.history);
        } else {
            report.random = Some(WinTally::new(count_random_wins(&batch, rng), games));
        }
    }

    log_report(&report);
    Ok(report)
}

/// Run without holding any batch in memory
///
/// Games are generated and scored one at a time. No history is kept.
pub fn simulate_streaming<R: RandomSource>(config: &RunConfig, rng: &mut R) -> Result<RunReport, SimError> {
    let games = config.games_per_strategy()?;
    log::debug!("{:<32}{:<16}{}", "streaming games", config.batch_mode, games);

    let report = stream_games(games, config.batch_mode, config.include_random, rng);
    log_report(&report);
    Ok(report)
}

/// Score `games` games per strategy, generating each on demand
pub(crate) fn stream_games<R: RandomSource>(
    games: u64,
    batch_mode: BatchMode,
    include_random: bool,
    rng: &mut R,
) -> RunReport {
    let mut report = RunReport::empty(batch_mode, include_random);
    report.games_per_strategy = games;

    for _ in 0..games {
        let game = generate_game(rng);
        report.switch.record(Strategy::Switch.is_win(&game, rng));

        let game = next_game(game, batch_mode, rng);
        report.keep.record(Strategy::Keep.is_win(&game, rng));

        if let Some(random) = report.random.as_mut() {
            let game = next_game(game, batch_mode, rng);
            random.record(Strategy::Random.is_win(&game, rng));
        }
    }

    report
}

fn next_game<R: RandomSource>(previous: Game, batch_mode: BatchMode, rng: &mut R) -> Game {
    match batch_mode {
        BatchMode::Shared => previous,
        BatchMode::Separate => generate_game(rng),
    }
}

fn batch_for<'a, R: RandomSource>(
    shared: &'a Option<Batch>,
    games: u64,
    rng: &mut R,
) -> Result<Cow<'a, [Game]>, SimError> {
    match shared {
        Some(batch) => Ok(Cow::Borrowed(batch.as_slice())),
        None => generate_batch(games as i64, rng).map(Cow::Owned),
    }
}

fn log_report(report: &RunReport) {
    log::info!(
        "{:<32}switch {:.4}  keep {:.4}  random {}",
        format!("played {} games/strategy", report.games_per_strategy),
        report.switch_rate(),
        report.keep_rate(),
        report.random_rate().map_or("-".to_string(), |r| format!("{:.4}", r)),
    );
}
