/*!
 * Workload Files
 * Loading, normalising and validating process sets
 */

use super::types::ProcessDefinition;
use crate::core::errors::SimulationError;
use crate::core::serialization::{from_json, skip_serializing_none};
use crate::core::types::{SimResult, Tick};
use crate::scheduler::Algorithm;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A process set plus optional run parameters
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
    #[serde(default)]
    pub time_quantum: Option<Tick>,
    pub processes: Vec<ProcessDefinition>,
}

/// Built-in demonstration set: (arrival, burst, priority)
const SAMPLE_PROCESSES: [(Tick, Tick, u32); 8] = [
    (0, 8, 2),
    (1, 4, 1),
    (2, 9, 4),
    (3, 5, 3),
    (4, 2, 5),
    (5, 6, 2),
    (10, 3, 1),
    (12, 7, 3),
];

impl Workload {
    #[must_use]
    pub fn new(processes: Vec<ProcessDefinition>) -> Self {
        Self {
            algorithm: None,
            time_quantum: None,
            processes,
        }
    }

    /// The eight-process demonstration set (`P1`..`P8`)
    #[must_use]
    pub fn sample() -> Self {
        let processes = SAMPLE_PROCESSES
            .iter()
            .enumerate()
            .map(|(index, &(arrival, burst, priority))| {
                ProcessDefinition::new(format!("P{}", index + 1), arrival, burst)
                    .with_name(format!("Process {}", index + 1))
                    .with_priority(priority)
            })
            .collect();
        Self::new(processes)
    }

    /// Parse a workload from JSON bytes, filling in missing names
    pub fn from_slice(bytes: &[u8]) -> SimResult<Self> {
        let mut workload: Workload = from_json(bytes)?;
        workload.fill_missing_names();
        debug!(
            processes = workload.processes.len(),
            "Workload parsed"
        );
        Ok(workload)
    }

    /// Read and parse a workload file
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SimulationError::Workload(format!("{}: {}", path.display(), e).into())
        })?;
        Self::from_slice(&bytes)
    }

    /// Reject input the engine would only handle by degrading
    ///
    /// - empty ids
    /// - duplicate ids
    /// - zero burst times
    pub fn validate(&self) -> SimResult<()> {
        let mut seen = AHashSet::with_capacity(self.processes.len());
        for process in &self.processes {
            if process.id.is_empty() {
                return Err(SimulationError::InvalidProcess {
                    id: process.id.clone(),
                    reason: "id must not be empty".into(),
                });
            }
            if process.burst_time == 0 {
                return Err(SimulationError::InvalidProcess {
                    id: process.id.clone(),
                    reason: "burst time must be at least 1".into(),
                });
            }
            if !seen.insert(process.id.as_str()) {
                return Err(SimulationError::DuplicateProcessId(process.id.clone()));
            }
        }
        Ok(())
    }

    fn fill_missing_names(&mut self) {
        for process in &mut self.processes {
            if process.name.is_empty() {
                process.name = process.id.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_workload() {
        let sample = Workload::sample();
        assert_eq!(sample.processes.len(), 8);
        assert_eq!(sample.processes[0].id, "P1");
        assert_eq!(sample.processes[6].arrival_time, 10);
        assert_eq!(sample.processes[7].name, "Process 8");
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_burst() {
        let workload = Workload::new(vec![ProcessDefinition::new("P1", 0, 0)]);
        assert!(matches!(
            workload.validate(),
            Err(SimulationError::InvalidProcess { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let workload = Workload::new(vec![
            ProcessDefinition::new("P1", 0, 2),
            ProcessDefinition::new("P1", 1, 3),
        ]);
        assert_eq!(
            workload.validate(),
            Err(SimulationError::DuplicateProcessId("P1".into()))
        );
    }

    #[test]
    fn test_from_slice_fills_names() {
        let json = br#"{"algorithm": "rr", "time_quantum": 2,
            "processes": [{"id": "A", "arrival_time": 0, "burst_time": 3}]}"#;
        let workload = Workload::from_slice(json).unwrap();
        assert_eq!(workload.algorithm, Some(Algorithm::RoundRobin));
        assert_eq!(workload.time_quantum, Some(2));
        assert_eq!(workload.processes[0].name, "A");
    }

    #[test]
    fn test_from_slice_rejects_unknown_algorithm() {
        let json = br#"{"algorithm": "lottery", "processes": []}"#;
        assert!(matches!(
            Workload::from_slice(json),
            Err(SimulationError::Workload(_))
        ));
    }
}
