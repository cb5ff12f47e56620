use monty_logic::*;
use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

fn single(prize: usize) -> Vec<Game> {
    vec![Game::with_prize(prize).unwrap()]
}

#[test]
fn prize_at_initial_pick() {
    let batch = single(0);
    assert_eq!(reveal_goat(&batch[0]), 1);
    assert_eq!(evaluate_keep(&batch), 1);
    assert_eq!(evaluate_switch(&batch), 0);
}

#[test]
fn prize_at_door_one() {
    let batch = single(1);
    assert_eq!(reveal_goat(&batch[0]), 2);
    assert_eq!(evaluate_keep(&batch), 0);
    assert_eq!(evaluate_switch(&batch), 1);
}

#[test]
fn prize_at_door_two() {
    let batch = single(2);
    assert_eq!(reveal_goat(&batch[0]), 1);
    assert_eq!(evaluate_keep(&batch), 0);
    assert_eq!(evaluate_switch(&batch), 1);
}

#[test]
fn empty_batch_everywhere() {
    let mut rng = SeededRng::from_u64(0);
    let batch = generate_batch(0, &mut rng).unwrap();
    assert!(batch.is_empty());
    assert_eq!(evaluate_keep(&batch), 0);
    assert_eq!(evaluate_switch(&batch), 0);
    assert_eq!(evaluate_random(&batch, &mut rng), RandomOutcome::default());
}

#[test]
fn switching_beats_keeping() {
    let mut rng = SeededRng::from_u64(2024);
    let (switch, keep) = run(1_000_000, &mut rng).unwrap();

    assert!((switch - 2.0 / 3.0).abs() < 0.005, "switch rate {}", switch);
    assert!((keep - 1.0 / 3.0).abs() < 0.005, "keep rate {}", keep);
}

#[test]
fn random_sits_in_the_middle() {
    let mut rng = SeededRng::from_u64(31337);
    let report = run_with_random(900_000, &mut rng).unwrap();
    let random = report.random_rate().unwrap();

    assert!((random - 0.5).abs() < 0.005, "random rate {}", random);
    assert!(report.keep_rate() < random && random < report.switch_rate());
}

#[test]
fn negative_counts_are_rejected() {
    let mut rng = SeededRng::from_u64(0);
    assert!(matches!(generate_batch(-1, &mut rng), Err(SimError::InvalidArgument { .. })));
    assert!(matches!(run(-1, &mut rng), Err(SimError::InvalidArgument { .. })));
    assert!(matches!(run_with_random(-3, &mut rng), Err(SimError::InvalidArgument { .. })));
}

proptest! {
    #[test]
    fn keep_wins_iff_prize_behind_pick(prize in 0usize..3) {
        let batch = single(prize);
        prop_assert_eq!(evaluate_keep(&batch) == 1, prize == INITIAL_PICK);
        prop_assert_eq!(evaluate_switch(&batch) == 1, prize != INITIAL_PICK);
    }

    #[test]
    fn history_length_and_tail(n in 0i64..500, seed in any::<u64>()) {
        let mut rng = SeededRng::from_u64(seed);
        let batch = generate_batch(n, &mut rng).unwrap();
        let outcome = evaluate_random(&batch, &mut rng);

        prop_assert_eq!(outcome.history.len() as i64, n);
        if n > 0 {
            prop_assert_eq!(outcome.history.last(), Some(outcome.wins as f64 / n as f64));
        }
    }

    #[test]
    fn shared_batch_splits_wins(iterations in 0i64..5_000, seed in any::<u64>()) {
        let config = RunConfig { batch_mode: BatchMode::Shared, ..RunConfig::new(iterations) };
        let report = simulate(&config, &mut SeededRng::from_u64(seed)).unwrap();

        prop_assert_eq!(report.games_per_strategy, iterations as u64 / 2);
        prop_assert_eq!(report.switch.wins + report.keep.wins, report.games_per_strategy);
        prop_assert!(report.switch.wins <= report.switch.attempts);
    }
}
