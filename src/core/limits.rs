/*!
 * Simulation Limits and Constants
 *
 * Centralized location for the simulator's thresholds and defaults.
 * Safety policy (watchdog) and algorithm parameters (quantum, multilevel
 * threshold) live here instead of inside the loop.
 */

use crate::core::types::Tick;

// =============================================================================
// TIME QUANTUM
// =============================================================================

/// Quantum the engine falls back to when the caller passes none or zero
pub const FALLBACK_TIME_QUANTUM: Tick = 1;

/// Quantum offered by front ends when the user has not chosen one
pub const DEFAULT_TIME_QUANTUM: Tick = 4;

// =============================================================================
// MULTILEVEL QUEUE
// =============================================================================

/// Priorities strictly below this go to the high-priority round-robin level;
/// everything else goes to the low-priority FCFS level
pub const MLQ_PRIORITY_THRESHOLD: u32 = 3;

// =============================================================================
// SAFETY
// =============================================================================

/// Watchdog tick ceiling
/// A run that has not completed every process by this tick is force-stopped
pub const WATCHDOG_TICK_CEILING: Tick = 2_000;

// =============================================================================
// SERIALIZATION
// =============================================================================

/// JSON SIMD threshold (1KB)
/// Workload files larger than this are parsed with simd-json
pub const JSON_SIMD_THRESHOLD: usize = 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_defaults_are_usable() {
        assert!(FALLBACK_TIME_QUANTUM >= 1);
        assert!(DEFAULT_TIME_QUANTUM >= FALLBACK_TIME_QUANTUM);
    }

    #[test]
    fn test_watchdog_exceeds_sample_workload() {
        // The built-in sample needs 44 busy ticks.
        assert!(WATCHDOG_TICK_CEILING > 44);
    }
}
