//! Human-readable report lines

use std::time::Duration;
use monty_logic::RunReport;

/// Summary line in the classic format, percentages to two decimals
pub fn summary(iterations: i64, report: &RunReport) -> String {
    let mut text = format!(
        "Played {} times, winning {:.2}% of the time when switching and {:.2}% times when staying",
        iterations,
        report.switch_rate() * 100.,
        report.keep_rate() * 100.,
    );
    if let Some(random) = report.random_rate() {
        text.push_str(&format!(", and {:.2}% when choosing at random", random * 100.));
    }
    text
}

pub fn elapsed(took: Duration) -> String {
    format!("Took {:.4}s", took.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monty_logic::{BatchMode, WinTally};

    fn report(random: Option<WinTally>) -> RunReport {
        let mut report = RunReport::empty(BatchMode::Separate, random.is_some());
        report.games_per_strategy = 3;
        report.switch = WinTally::new(2, 3);
        report.keep = WinTally::new(1, 3);
        report.random = random;
        report
    }

    #[test]
    fn test_summary_two_strategies() {
        assert_eq!(
            summary(6, &report(None)),
            "Played 6 times, winning 66.67% of the time when switching and 33.33% times when staying"
        );
    }

    #[test]
    fn test_summary_with_random() {
        let text = summary(9, &report(Some(WinTally::new(1, 2))));
        assert!(text.ends_with(", and 50.00% when choosing at random"), "{}", text);
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(elapsed(Duration::from_millis(1500)), "Took 1.5000s");
    }
}
