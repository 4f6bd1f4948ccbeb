//! Typed accessors over the caller-supplied simulation configuration.
//!
//! The configuration mapping is owned by the simulation framework and only
//! read here, through the same slash-path traversal used for state
//! snapshots. Missing or mistyped keys surface as
//! [`GeoPlotError::ConfigKey`].

use serde_json::Value;

use crate::error::{GeoPlotError, Result};
use crate::state;

const METADATA: &str = "simulation_metadata";

/// Simulation name; output files are named `{name}.geojson` and `{name}.html`.
pub fn sim_name(config: &Value) -> Result<&str> {
    lookup(config, "name")?.as_str().ok_or_else(|| key_error("name"))
}

/// Configured episode count. Must be at least 1.
pub fn num_episodes(config: &Value) -> Result<u64> {
    positive_count(config, "num_episodes")
}

/// Configured steps per episode. Must be at least 1.
pub fn num_steps_per_episode(config: &Value) -> Result<u64> {
    positive_count(config, "num_steps_per_episode")
}

fn positive_count(config: &Value, key: &str) -> Result<u64> {
    match lookup(config, key)?.as_u64() {
        Some(count) if count >= 1 => Ok(count),
        _ => Err(key_error(key)),
    }
}

fn lookup<'a>(config: &'a Value, key: &str) -> Result<&'a Value> {
    state::resolve(config, &format!("{METADATA}/{key}")).map_err(|_| key_error(key))
}

fn key_error(key: &str) -> GeoPlotError {
    GeoPlotError::ConfigKey {
        key: format!("{METADATA}.{key}"),
    }
}
