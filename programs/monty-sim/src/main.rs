//! `monty`: run a Monty Hall simulation from the command line

mod cli;
mod config;
mod output;

use std::time::Instant;
use anyhow::Result;
use clap::Parser;
use monty_logic::{simulate, RunConfig, RunReport, SeededRng};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();

    let config = config::load(&args)?;
    let seed = config::resolve_seed(&config)?;
    log::info!("{:<32}{}", "seed", seed);
    log::info!("{:<32}{}", "iterations", config.iterations);

    let start = Instant::now();
    let report = execute(&config, seed)?;
    let took = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output::summary(config.iterations, &report));
        println!("{}", output::elapsed(took));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn execute(config: &RunConfig, seed: u64) -> Result<RunReport> {
    match config.workers {
        Some(workers) if workers != 1 => {
            if config.record_history && config.include_random {
                log::warn!("parallel runs do not record win-rate history");
            }
            Ok(monty_logic::run_parallel(config, &monty_logic::expand_seed(seed), workers)?)
        }
        _ => Ok(simulate(config, &mut SeededRng::from_u64(seed))?),
    }
}

#[cfg(not(feature = "parallel"))]
fn execute(config: &RunConfig, seed: u64) -> Result<RunReport> {
    if config.workers.is_some_and(|w| w != 1) {
        log::warn!("built without the parallel feature; running on one thread");
    }
    Ok(simulate(config, &mut SeededRng::from_u64(seed))?)
}
