/*!
 * Event Recorder
 * Append-only replay log of deep-copied run snapshots
 */

use super::types::{EventKind, GanttEntry, SimulationEvent};
use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::{ProcessIndex, ReadyQueues};

/// Borrowed view of the live run state at one step
pub(crate) struct RunView<'a> {
    pub now: Tick,
    pub processes: &'a [Process],
    pub running: Option<ProcessIndex>,
    pub queues: &'a ReadyQueues,
    pub completed_order: &'a [ProcessIndex],
    pub gantt: &'a [GanttEntry],
}

/// Snapshot log for one run
///
/// Each call to [`EventRecorder::record`] copies everything it stores out of
/// the view, so nothing in the log aliases engine state.
#[derive(Debug, Default)]
pub(crate) struct EventRecorder {
    events: Vec<SimulationEvent>,
    split_levels: bool,
}

impl EventRecorder {
    /// `split_levels` reports the high-priority level as its own queue
    pub fn new(split_levels: bool) -> Self {
        Self {
            events: Vec::new(),
            split_levels,
        }
    }

    pub fn record(
        &mut self,
        view: &RunView<'_>,
        kind: EventKind,
        message: String,
        idle_override: bool,
    ) {
        let copy_level = |level: QueueLevel| -> Vec<Process> {
            view.queues
                .level(level)
                .iter()
                .map(|&index| view.processes[index].clone())
                .collect()
        };

        let event = SimulationEvent {
            time: view.now,
            kind,
            running_process: view.running.map(|index| view.processes[index].clone()),
            ready_queue: copy_level(QueueLevel::Low),
            high_priority_queue: self.split_levels.then(|| copy_level(QueueLevel::High)),
            completed_processes: view
                .completed_order
                .iter()
                .map(|&index| view.processes[index].clone())
                .collect(),
            gantt_chart_snapshot: view.gantt.to_vec(),
            cpu_idle: view.running.is_none() || idle_override,
            message,
        };
        self.events.push(event);
    }

    #[inline]
    pub fn last_kind(&self) -> Option<EventKind> {
        self.events.last().map(|event| event.kind)
    }

    pub fn into_events(self) -> Vec<SimulationEvent> {
        self.events
    }
}
