//! Multi-core runner
//!
//! Splits the per-strategy game budget across workers. Worker `i` streams
//! its share from a generator forked off the seed's root stream, so a fixed
//! seed and worker count always reproduce the same report.

use rayon::prelude::*;
use crate::error::SimError;
use crate::random::SeededRng;
use crate::run::{stream_games, RunConfig, RunReport};

/// Run `config` on `workers` threads (0 = one per logical CPU)
pub fn run_parallel(config: &RunConfig, seed: &[u8; 32], workers: usize) -> Result<RunReport, SimError> {
    let games = config.games_per_strategy()?;
    let workers = resolve_workers(workers);
    log::debug!("{:<32}{:<16}{}", "spawning workers", workers, games);

    let root = SeededRng::new(seed, 0);
    let report = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let mut rng = root.fork(worker as u32);
            stream_games(worker_share(games, workers, worker), config.batch_mode, config.include_random, &mut rng)
        })
        .reduce(
            || RunReport::empty(config.batch_mode, config.include_random),
            |mut total, part| {
                total += part;
                total
            },
        );

    log::info!(
        "{:<32}switch {:.4}  keep {:.4}",
        format!("{} workers finished", workers),
        report.switch_rate(),
        report.keep_rate(),
    );
    Ok(report)
}

fn resolve_workers(workers: usize) -> usize {
    if workers == 0 {
        num_cpus::get().max(1)
    } else {
        workers
    }
}

/// Games for `worker`; the remainder goes to the lowest-numbered workers
fn worker_share(games: u64, workers: usize, worker: usize) -> u64 {
    let workers = workers as u64;
    let worker = worker as u64;
    games / workers + u64::from(worker < games % workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::BatchMode;
    use crate::strategy::Strategy;

    #[test]
    fn test_worker_share_covers_budget() {
        for (games, workers) in [(0, 3), (10, 3), (7, 8), (1_000_001, 16)] {
            let total: u64 = (0..workers).map(|w| worker_share(games, workers, w)).sum();
            assert_eq!(total, games, "games={} workers={}", games, workers);
        }
        assert_eq!(worker_share(10, 3, 0), 4);
        assert_eq!(worker_share(10, 3, 2), 3);
    }

    #[test]
    fn test_resolve_workers() {
        assert_eq!(resolve_workers(5), 5);
        assert!(resolve_workers(0) >= 1);
    }

    #[test]
    fn test_parallel_is_deterministic() {
        let config = RunConfig {
            include_random: true,
            ..RunConfig::new(60_000)
        };
        let seed = [9u8; 32];
        let a = run_parallel(&config, &seed, 4).unwrap();
        let b = run_parallel(&config, &seed, 4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.games_per_strategy, 20_000);
        assert_eq!(a.random.unwrap().attempts, 20_000);
        assert!(a.history.is_none());
    }

    #[test]
    fn test_single_worker_uses_first_fork() {
        let config = RunConfig::new(5_000);
        let seed = [3u8; 32];

        let expected = stream_games(2_500, BatchMode::Separate, false, &mut SeededRng::new(&seed, 0).fork(0));
        let report = run_parallel(&config, &seed, 1).unwrap();

        assert_eq!(report, expected);
    }

    #[test]
    fn test_parallel_converges() {
        let config = RunConfig {
            include_random: true,
            batch_mode: BatchMode::Shared,
            ..RunConfig::new(600_000)
        };
        let report = run_parallel(&config, &[1u8; 32], 0).unwrap();

        assert_eq!(report.switch.wins + report.keep.wins, report.games_per_strategy);
        for strategy in Strategy::ALL {
            let rate = report.tally(strategy).unwrap().rate();
            assert!((rate - strategy.expected_rate()).abs() < 0.01, "{} rate {}", strategy.name(), rate);
        }
    }

    #[test]
    fn test_parallel_rejects_negative() {
        let err = run_parallel(&RunConfig::new(-1), &[0u8; 32], 2).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { what: "iteration count", .. }));
    }
}
