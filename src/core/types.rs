/*!
 * Core Types
 * Common types used across the simulator
 */

use super::data_structures::InlineString;

/// One unit of simulated time
pub type Tick = u64;

/// Process priority (lower number is more urgent)
pub type Priority = u32;

/// Stable, caller-supplied process identifier
pub type ProcessId = InlineString;

/// Common result type for fallible simulator surfaces
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
