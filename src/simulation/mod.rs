/*!
 * Simulation Module
 * Entry points for running a workload under one scheduling algorithm
 */

mod engine;
mod recorder;
pub mod types;

pub use types::{EventKind, GanttEntry, Outcome, SimulationEvent, SimulationResult};

use crate::core::config::SimulationConfig;
use crate::core::types::Tick;
use crate::monitoring::SimulationSpan;
use crate::process::ProcessDefinition;
use crate::scheduler::{for_algorithm, Algorithm, SchedulingPolicy, TimeQuantum};
use engine::Engine;
use tracing::{debug, info};

/// Runs simulations under a fixed configuration
///
/// Holds no state between runs; one instance may serve any number of calls,
/// from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `processes` under `algorithm`
    ///
    /// `time_quantum` is only read by round robin and the multilevel queue;
    /// a missing or zero quantum falls back to the configured default.
    pub fn run(
        &self,
        processes: &[ProcessDefinition],
        algorithm: Algorithm,
        time_quantum: Option<Tick>,
    ) -> SimulationResult {
        let quantum = TimeQuantum::normalize(time_quantum, self.config.fallback_time_quantum);
        if algorithm.uses_quantum() && time_quantum != Some(quantum.ticks()) {
            debug!(
                requested = ?time_quantum,
                quantum = quantum.ticks(),
                "Time quantum normalized"
            );
        }

        let policy = for_algorithm(algorithm, quantum, self.config.mlq_priority_threshold);
        self.run_with_policy(processes, policy)
    }

    /// Simulate `processes` under a caller-supplied policy
    pub fn run_with_policy(
        &self,
        processes: &[ProcessDefinition],
        policy: Box<dyn SchedulingPolicy>,
    ) -> SimulationResult {
        let algorithm = policy.algorithm();
        let span = SimulationSpan::new(algorithm.as_str(), processes.len());
        let _entered = span.enter();

        let result = Engine::new(self.config, policy, processes).run();

        let outcome = result.outcome();
        let metrics = &result.overall_metrics;
        span.record_outcome(
            outcome.as_str(),
            metrics.total_execution_time,
            result.simulation_log.len(),
        );
        info!(
            algorithm = %algorithm,
            outcome = outcome.as_str(),
            total_time = metrics.total_execution_time,
            avg_turnaround = metrics.average_turnaround_time,
            avg_waiting = metrics.average_waiting_time,
            cpu_utilization = metrics.cpu_utilization,
            "Simulation complete"
        );

        result
    }
}

/// Simulate `processes` with the default configuration
pub fn run_simulation(
    processes: &[ProcessDefinition],
    algorithm: Algorithm,
    time_quantum: Option<Tick>,
) -> SimulationResult {
    Simulator::default().run(processes, algorithm, time_quantum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessState;
    use pretty_assertions::assert_eq;

    fn spans(result: &SimulationResult) -> Vec<(&str, Tick, Tick)> {
        result
            .gantt_chart_data
            .iter()
            .map(|entry| (entry.process_id.as_str(), entry.start, entry.end))
            .collect()
    }

    #[test]
    fn test_fcfs_two_processes() {
        let processes = vec![ProcessDefinition::new("P1", 0, 5), ProcessDefinition::new("P2", 1, 3)];
        let result = run_simulation(&processes, Algorithm::Fcfs, None);

        assert_eq!(spans(&result), vec![("P1", 0, 5), ("P2", 5, 8)]);
        assert_eq!(result.outcome(), Outcome::Completed);
        assert_eq!(result.overall_metrics.total_execution_time, 8);
        assert!(result
            .detailed_process_info
            .iter()
            .all(|p| p.state == ProcessState::Completed && !p.force_completed));
    }

    #[test]
    fn test_log_brackets() {
        let processes = vec![ProcessDefinition::new("P1", 0, 2)];
        let result = run_simulation(&processes, Algorithm::Fcfs, None);

        let first = result.event_at(0).unwrap();
        assert_eq!(first.kind, EventKind::Started);
        assert_eq!(first.message, "Simulation started. Waiting for processes.");

        let last = result.simulation_log.last().unwrap();
        assert_eq!(last.kind, EventKind::Finished);
        assert_eq!(last.time, 2);
        assert_eq!(last.message, "All 1 processes completed. Total time: 2.");
    }

    #[test]
    fn test_empty_workload() {
        let result = run_simulation(&[], Algorithm::RoundRobin, Some(2));
        assert!(result.gantt_chart_data.is_empty());
        assert!(result.detailed_process_info.is_empty());
        assert_eq!(result.overall_metrics.total_execution_time, 0);
        assert_eq!(result.overall_metrics.cpu_utilization, 0.0);
        assert_eq!(result.simulation_log.len(), 2);
        assert_eq!(result.outcome(), Outcome::Completed);
    }

    #[test]
    fn test_caller_definitions_untouched() {
        let processes = vec![ProcessDefinition::new("P1", 0, 3)];
        let before = processes.clone();
        let _ = run_simulation(&processes, Algorithm::Srtf, None);
        assert_eq!(processes, before);
    }
}
