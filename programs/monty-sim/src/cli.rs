//! Command-line arguments

use std::path::PathBuf;
use clap::Parser;
use monty_logic::BatchMode;

/// Monte Carlo simulator for the Monty Hall problem
#[derive(Parser, Debug, Default)]
#[command(name = "monty", author, version, about, long_about = None)]
pub struct Args {
    /// JSON run configuration; flags given here override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total games across all strategies
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,

    /// Seed for a reproducible run (drawn from OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// separate: fresh games per strategy; shared: one batch for all
    #[arg(short, long)]
    pub mode: Option<BatchMode>,

    /// Also evaluate the coin-flip strategy
    #[arg(short, long)]
    pub random: bool,

    /// Score games one at a time without holding a batch in memory
    #[arg(long)]
    pub streaming: bool,

    /// Run on this many threads (0 = one per CPU)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
