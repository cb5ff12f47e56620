//! WASM bindings for running simulations in the browser

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{describe_strategy, iterations_from_f64, simulate, BatchMode, RunConfig, SeededRng, Strategy};

fn seeded_rng(seed: &[u8]) -> Result<SeededRng, JsError> {
    let seed_arr: [u8; 32] = seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;
    Ok(SeededRng::new(&seed_arr, 0))
}

/// Run a simulation and return the full report
///
/// # Arguments
/// * `iterations` - Total games across all strategies
/// * `seed` - 32-byte randomness seed
/// * `shared` - Replay one batch through every strategy
/// * `include_random` - Also evaluate the coin-flip strategy
///
/// # Returns
/// JSON serialized RunReport
#[wasm_bindgen]
pub fn simulate_games(
    iterations: f64,
    seed: &[u8],
    shared: bool,
    include_random: bool,
) -> Result<JsValue, JsError> {
    let iterations = iterations_from_f64(iterations)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let config = RunConfig {
        batch_mode: if shared { BatchMode::Shared } else { BatchMode::Separate },
        include_random,
        ..RunConfig::new(iterations)
    };
    let mut rng = seeded_rng(seed)?;

    let report = simulate(&config, &mut rng)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run a simulation described by a JSON RunConfig
#[wasm_bindgen]
pub fn simulate_config(config_json: &str, seed: &[u8]) -> Result<JsValue, JsError> {
    let config = RunConfig::from_json(config_json)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let mut rng = seeded_rng(seed)?;

    let report = simulate(&config, &mut rng)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(name: &str) -> Result<String, JsError> {
    let strategy: Strategy = name.parse()
        .map_err(|e: crate::SimError| JsError::new(&e.to_string()))?;

    Ok(describe_strategy(strategy).to_string())
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: &'static str,
    description: &'static str,
    expected_rate: f64,
}

/// Get all available strategies with their theoretical win rates
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = Strategy::ALL
        .iter()
        .map(|s| StrategyInfo {
            id: s.name(),
            description: describe_strategy(*s),
            expected_rate: s.expected_rate(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
