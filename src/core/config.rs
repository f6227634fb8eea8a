/*!
 * Simulation Configuration
 * Safety and algorithm knobs with defaults from `limits` and env overrides
 */

use super::errors::SimulationError;
use super::limits::{FALLBACK_TIME_QUANTUM, MLQ_PRIORITY_THRESHOLD, WATCHDOG_TICK_CEILING};
use super::types::{Priority, SimResult, Tick};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENV_WATCHDOG_TICKS: &str = "SIM_WATCHDOG_TICKS";
pub const ENV_FALLBACK_QUANTUM: &str = "SIM_FALLBACK_QUANTUM";
pub const ENV_MLQ_THRESHOLD: &str = "SIM_MLQ_THRESHOLD";
pub const ENV_RECORD_EVERY_TICK: &str = "SIM_RECORD_EVERY_TICK";

/// Per-run engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    /// Tick at which an unfinished run is force-stopped
    pub watchdog_tick_ceiling: Tick,
    /// Quantum used when the caller passes none or zero
    pub fallback_time_quantum: Tick,
    /// Multilevel queue: priorities below this go to the high level
    pub mlq_priority_threshold: Priority,
    /// Emit an event for every executed tick, not only state changes
    pub record_every_tick: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            watchdog_tick_ceiling: WATCHDOG_TICK_CEILING,
            fallback_time_quantum: FALLBACK_TIME_QUANTUM,
            mlq_priority_threshold: MLQ_PRIORITY_THRESHOLD,
            record_every_tick: false,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn with_watchdog_tick_ceiling(mut self, ticks: Tick) -> Self {
        self.watchdog_tick_ceiling = ticks;
        self
    }

    /// Zero is ignored; the fallback itself must be a usable quantum
    #[must_use]
    pub fn with_fallback_time_quantum(mut self, quantum: Tick) -> Self {
        if quantum >= 1 {
            self.fallback_time_quantum = quantum;
        }
        self
    }

    #[must_use]
    pub fn with_mlq_priority_threshold(mut self, threshold: Priority) -> Self {
        self.mlq_priority_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_record_every_tick(mut self, enabled: bool) -> Self {
        self.record_every_tick = enabled;
        self
    }

    /// Build from defaults overridden by `SIM_*` environment variables
    ///
    /// Environment variables:
    /// - SIM_WATCHDOG_TICKS: watchdog tick ceiling
    /// - SIM_FALLBACK_QUANTUM: quantum used when none is supplied (≥1)
    /// - SIM_MLQ_THRESHOLD: multilevel queue priority threshold
    /// - SIM_RECORD_EVERY_TICK: `1`/`true` to log every executed tick
    pub fn from_env() -> SimResult<Self> {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<Tick>(ENV_WATCHDOG_TICKS)? {
            config.watchdog_tick_ceiling = ticks;
        }
        if let Some(quantum) = read_env::<Tick>(ENV_FALLBACK_QUANTUM)? {
            if quantum == 0 {
                return Err(SimulationError::Configuration(
                    format!("{} must be at least 1", ENV_FALLBACK_QUANTUM).into(),
                ));
            }
            config.fallback_time_quantum = quantum;
        }
        if let Some(threshold) = read_env::<Priority>(ENV_MLQ_THRESHOLD)? {
            config.mlq_priority_threshold = threshold;
        }
        if let Ok(value) = std::env::var(ENV_RECORD_EVERY_TICK) {
            config.record_every_tick = value == "1" || value.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

fn read_env<T: FromStr>(key: &str) -> SimResult<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            SimulationError::Configuration(format!("{} has invalid value '{}'", key, raw).into())
        }),
        Err(_) => Ok(None),
    }
}
