/*!
 * CPU Scheduling Simulator Library
 *
 * Discrete-time simulation of eight classical CPU scheduling disciplines.
 * A run takes a list of process definitions, an algorithm and an optional
 * time quantum, and returns the Gantt timeline, per-process and aggregate
 * metrics, and a replayable log of snapshots.
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulation;

// Re-exports
pub use crate::core::{InlineString, SimResult, SimulationConfig, SimulationError, Tick};
pub use metrics::OverallMetrics;
pub use monitoring::init_tracing;
pub use process::{Process, ProcessDefinition, ProcessState, QueueLevel, Workload};
pub use scheduler::{Algorithm, SchedulingPolicy, TimeQuantum};
pub use simulation::{
    run_simulation, EventKind, GanttEntry, Outcome, SimulationEvent, SimulationResult, Simulator,
};
