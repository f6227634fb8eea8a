/*!
 * Simulation Types
 * Gantt segments, replay events and the run result
 */

use crate::core::data_structures::InlineString;
use crate::core::serialization::skip_serializing_none;
use crate::core::types::{ProcessId, Tick};
use crate::metrics::OverallMetrics;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// One uninterrupted run of a process over `[start, end)`
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GanttEntry {
    pub process_id: ProcessId,
    pub process_name: InlineString,
    pub start: Tick,
    pub end: Tick,
    pub color: Option<String>,
}

impl GanttEntry {
    #[inline]
    #[must_use]
    pub fn for_process(process: &Process, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process.id.clone(),
            process_name: process.name.clone(),
            start,
            end,
            color: process.color.clone(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn duration(&self) -> Tick {
        self.end.saturating_sub(self.start)
    }
}

/// What a log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Started,
    Arrived,
    Preempted,
    Dispatched,
    Executing,
    Completed,
    QuantumExpired,
    IdleFastForward,
    Idle,
    Stuck,
    ForcedStop,
    Finished,
}

impl EventKind {
    /// Whether the event ends a run
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Stuck | Self::ForcedStop | Self::Finished)
    }
}

/// Immutable snapshot of the run at one step
///
/// Every field is an independent copy; later steps never alter a recorded
/// event.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationEvent {
    pub time: Tick,
    pub kind: EventKind,
    pub running_process: Option<Process>,
    /// The single ready queue, or the low-priority level for the multilevel queue
    pub ready_queue: Vec<Process>,
    /// Multilevel queue only
    pub high_priority_queue: Option<Vec<Process>>,
    pub completed_processes: Vec<Process>,
    pub gantt_chart_snapshot: Vec<GanttEntry>,
    pub cpu_idle: bool,
    pub message: String,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every process ran to completion
    Completed,
    /// The watchdog ceiling was reached
    ForcedStop,
    /// The CPU went idle with nothing left to arrive
    Stuck,
}

impl Outcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::ForcedStop => "forced_stop",
            Self::Stuck => "stuck",
        }
    }
}

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub gantt_chart_data: Vec<GanttEntry>,
    /// Final process records, in input order
    pub detailed_process_info: Vec<Process>,
    pub overall_metrics: OverallMetrics,
    pub simulation_log: Vec<SimulationEvent>,
}

impl SimulationResult {
    /// Replay access to the `index`-th logged step
    #[inline]
    pub fn event_at(&self, index: usize) -> Option<&SimulationEvent> {
        self.simulation_log.get(index)
    }

    pub fn outcome(&self) -> Outcome {
        match self.simulation_log.last().map(|event| event.kind) {
            Some(EventKind::ForcedStop) => Outcome::ForcedStop,
            Some(EventKind::Stuck) => Outcome::Stuck,
            _ => Outcome::Completed,
        }
    }

    /// Summed Gantt time for one process
    pub fn busy_time_of(&self, id: &str) -> Tick {
        self.gantt_chart_data
            .iter()
            .filter(|entry| entry.process_id == id)
            .map(GanttEntry::duration)
            .sum()
    }
}
