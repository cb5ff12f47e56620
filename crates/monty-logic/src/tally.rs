//! Win tallies and cumulative win-rate history

use core::ops::AddAssign;
use serde::{Deserialize, Serialize};

/// Wins and attempts for one strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    pub wins: u64,
    pub attempts: u64,
}

impl WinTally {
    pub fn new(wins: u64, attempts: u64) -> Self {
        debug_assert!(wins <= attempts);
        Self { wins, attempts }
    }

    pub fn record(&mut self, won: bool) {
        self.attempts += 1;
        if won {
            self.wins += 1;
        }
    }

    pub fn losses(&self) -> u64 {
        self.attempts - self.wins
    }

    /// Win ratio in [0, 1]; 0.0 before any attempt
    pub fn rate(&self) -> f64 {
        ratio(self.wins, self.attempts)
    }
}

impl AddAssign for WinTally {
    fn add_assign(&mut self, other: Self) {
        self.wins += other.wins;
        self.attempts += other.attempts;
    }
}

/// Running win rate after each attempt, in processing order
///
/// Append-only: entries are never removed or rewritten.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateHistory(Vec<f64>);

impl RateHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, wins: u64, attempts: u64) {
        self.0.push(ratio(wins, attempts));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn ratio(wins: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        wins as f64 / attempts as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_rate() {
        let mut tally = WinTally::default();
        assert_eq!(tally.rate(), 0.0);

        tally.record(true);
        tally.record(false);
        tally.record(false);
        tally.record(true);

        assert_eq!(tally, WinTally::new(2, 4));
        assert_eq!(tally.losses(), 2);
        assert_eq!(tally.rate(), 0.5);
    }

    #[test]
    fn test_merge() {
        let mut total = WinTally::new(1, 3);
        total += WinTally::new(2, 3);
        assert_eq!(total, WinTally::new(3, 6));
    }

    #[test]
    fn test_history_tracks_running_ratio() {
        let mut history = RateHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);

        history.push(1, 1);
        history.push(1, 2);
        history.push(2, 4);

        assert_eq!(history.as_slice(), &[1.0, 0.5, 0.5]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last(), Some(0.5));
    }

    #[test]
    fn test_history_serializes_as_list() {
        let mut history = RateHistory::with_capacity(2);
        history.push(0, 1);
        history.push(1, 2);
        assert_eq!(serde_json::to_string(&history).unwrap(), "[0.0,0.5]");
    }
}
