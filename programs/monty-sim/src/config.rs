//! Run configuration: optional JSON file, then command-line overrides

use std::fs;
use anyhow::{ensure, Context, Result};
use monty_logic::RunConfig;
use crate::cli::Args;

/// Build the run configuration for `args`
pub fn load(args: &Args) -> Result<RunConfig> {
    let base = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config = RunConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?;
            log::debug!("{:<32}{}", "loaded config", path.display());
            config
        }
        None => RunConfig::default(),
    };
    let config = merge(base, args);
    ensure!(
        config.iterations >= 0,
        "iteration count must not be negative, got {}",
        config.iterations
    );
    ensure!(
        !(config.streaming && config.workers.is_some_and(|w| w != 1)),
        "--streaming runs on one thread; drop --threads or set it to 1"
    );
    Ok(config)
}

fn merge(mut config: RunConfig, args: &Args) -> RunConfig {
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(mode) = args.mode {
        config.batch_mode = mode;
    }
    if let Some(threads) = args.threads {
        config.workers = Some(threads);
    }
    config.include_random |= args.random;
    config.streaming |= args.streaming;
    config
}

/// Seed from the config, or fresh OS entropy
pub fn resolve_seed(config: &RunConfig) -> Result<u64> {
    match config.seed {
        Some(seed) => Ok(seed),
        None => {
            let mut bytes = [0u8; 8];
            getrandom::fill(&mut bytes)
                .map_err(|e| anyhow::anyhow!("drawing seed from OS entropy: {}", e))?;
            Ok(u64::from_le_bytes(bytes))
        }
    }
}
