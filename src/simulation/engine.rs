/*!
 * Simulation Engine
 *
 * Discrete-clock loop driving one run. Each iteration, in order:
 * admit arrivals, check preemption, dispatch, execute one tick, then
 * complete or requeue. An idle CPU with empty queues fast-forwards to the
 * next arrival; a watchdog ceiling bounds the run.
 */

use super::recorder::{EventRecorder, RunView};
use super::types::{EventKind, GanttEntry, Outcome, SimulationResult};
use crate::core::config::SimulationConfig;
use crate::core::types::Tick;
use crate::metrics;
use crate::process::{Process, ProcessDefinition, ProcessState, QueueLevel};
use crate::scheduler::{ProcessIndex, ReadyQueues, SchedulingPolicy};
use tracing::{debug, error, warn};

/// The process holding the CPU and its open Gantt segment
#[derive(Debug, Clone, Copy)]
struct Running {
    index: ProcessIndex,
    segment_start: Tick,
    /// Ticks left in the current quantum, `None` when unbounded
    slice_remaining: Option<Tick>,
}

/// State owned by a single run
pub(crate) struct Engine {
    config: SimulationConfig,
    policy: Box<dyn SchedulingPolicy>,
    processes: Vec<Process>,
    queues: ReadyQueues,
    running: Option<Running>,
    gantt: Vec<GanttEntry>,
    recorder: EventRecorder,
    now: Tick,
    completed: usize,
    completed_order: Vec<ProcessIndex>,
    idle_time: Tick,
}

impl Engine {
    pub fn new(
        config: SimulationConfig,
        policy: Box<dyn SchedulingPolicy>,
        definitions: &[ProcessDefinition],
    ) -> Self {
        let processes: Vec<Process> = definitions.iter().map(Process::from_definition).collect();
        let split_levels = policy.algorithm().uses_levels();

        Self {
            config,
            policy,
            completed_order: Vec::with_capacity(processes.len()),
            processes,
            queues: ReadyQueues::new(),
            running: None,
            gantt: Vec::new(),
            recorder: EventRecorder::new(split_levels),
            now: 0,
            completed: 0,
            idle_time: 0,
        }
    }

    pub fn run(mut self) -> SimulationResult {
        self.record(
            EventKind::Started,
            "Simulation started. Waiting for processes.".to_string(),
            false,
        );

        let outcome = loop {
            if self.completed == self.processes.len() {
                break Outcome::Completed;
            }
            if self.now >= self.config.watchdog_tick_ceiling {
                self.force_stop();
                break Outcome::ForcedStop;
            }

            if self.admit_arrivals() > 0 {
                self.check_preemption();
            }
            if self.running.is_none() {
                self.dispatch();
            }
            if self.running.is_some() {
                self.execute_tick();
                continue;
            }

            if !self.queues.is_empty() {
                self.idle_tick();
                continue;
            }
            match self.next_arrival() {
                Some(next) => self.fast_forward(next),
                None => {
                    self.mark_stuck();
                    break Outcome::Stuck;
                }
            }
        };

        if outcome == Outcome::Completed {
            let message = format!(
                "All {} processes completed. Total time: {}.",
                self.processes.len(),
                self.now
            );
            self.record(EventKind::Finished, message, false);
        }

        let (detailed_process_info, overall_metrics) =
            metrics::calculate(&self.processes, self.now, self.idle_time);

        SimulationResult {
            gantt_chart_data: self.gantt,
            detailed_process_info,
            overall_metrics,
            simulation_log: self.recorder.into_events(),
        }
    }

    /// Move every process arriving by now onto its ready queue, in input order
    fn admit_arrivals(&mut self) -> usize {
        let mut admitted = 0;
        for index in 0..self.processes.len() {
            let process = &self.processes[index];
            if process.state != ProcessState::NotArrived || process.arrival_time > self.now {
                continue;
            }

            let level = self.policy.assign_level(process);
            let process = &mut self.processes[index];
            process.queue_level = level;
            process.state = ProcessState::Ready;

            let message = match level {
                Some(level) => format!(
                    "Process {} (Prio {}) arrived, assigned to MQS {} Queue.",
                    process.id,
                    process.priority,
                    level.label()
                ),
                None => format!(
                    "Process {} (BT: {}, Prio: {}) arrived.",
                    process.id, process.burst_time, process.priority
                ),
            };

            self.queues.push(level.unwrap_or(QueueLevel::Low), index);
            admitted += 1;
            self.record(EventKind::Arrived, message, false);
        }
        admitted
    }

    fn check_preemption(&mut self) {
        let Some(running) = self.running else {
            return;
        };
        let index = running.index;
        if !self
            .policy
            .should_preempt(&self.processes[index], &self.queues, &self.processes)
        {
            return;
        }

        self.running = None;
        if self.now > running.segment_start {
            self.gantt.push(GanttEntry::for_process(
                &self.processes[index],
                running.segment_start,
                self.now,
            ));
        }

        let process = &mut self.processes[index];
        process.state = ProcessState::Ready;
        let level = process.queue_level.unwrap_or(QueueLevel::Low);
        let message = match process.queue_level {
            Some(level) => format!(
                "Process {} preempted by a high-priority arrival, returned to MQS {} Queue (Rem BT: {}).",
                process.id,
                level.label(),
                process.remaining_burst_time
            ),
            None => format!(
                "Process {} preempted at t={} (Rem BT: {}).",
                process.id, self.now, process.remaining_burst_time
            ),
        };

        self.queues.push(level, index);
        self.record(EventKind::Preempted, message, false);
    }

    fn dispatch(&mut self) {
        let Some(index) = self
            .policy
            .select(&mut self.queues, &self.processes, self.now)
        else {
            return;
        };

        let Some(process) = self
            .processes
            .get_mut(index)
            .filter(|process| process.state == ProcessState::Ready)
        else {
            warn!(index, time = self.now, "Policy selected a process that is not ready");
            return;
        };

        if process.start_time.is_none() {
            process.start_time = Some(self.now);
        }
        process.state = ProcessState::Running;
        let slice_remaining = self.policy.quantum_for(process);

        let message = match process.queue_level {
            Some(level) => format!(
                "Process {} (from MQS Q{}) starts/resumes execution (Rem BT: {}).",
                process.id,
                level.as_number(),
                process.remaining_burst_time
            ),
            None => format!(
                "Process {} starts/resumes execution (Rem BT: {}).",
                process.id, process.remaining_burst_time
            ),
        };

        self.running = Some(Running {
            index,
            segment_start: self.now,
            slice_remaining,
        });
        self.record(EventKind::Dispatched, message, false);
    }

    /// Run the current process for one tick, then complete or requeue it
    fn execute_tick(&mut self) {
        let Some(mut running) = self.running.take() else {
            return;
        };
        let index = running.index;
        let end = self.now + 1;

        let process = &mut self.processes[index];
        process.remaining_burst_time = process.remaining_burst_time.saturating_sub(1);
        if let Some(slice) = running.slice_remaining.as_mut() {
            *slice = slice.saturating_sub(1);
        }

        if process.remaining_burst_time == 0 {
            process.state = ProcessState::Completed;
            process.completion_time = Some(end);
            let message = format!("Process {} completed at t={}.", process.id, end);

            self.gantt
                .push(GanttEntry::for_process(process, running.segment_start, end));
            self.completed += 1;
            self.completed_order.push(index);
            self.record(EventKind::Completed, message, false);
        } else if running.slice_remaining == Some(0) {
            process.state = ProcessState::Ready;
            let level = process.queue_level.unwrap_or(QueueLevel::Low);
            let message = format!(
                "Process {} time quantum expired. Moved to ready queue (Rem BT: {}).",
                process.id, process.remaining_burst_time
            );

            self.gantt
                .push(GanttEntry::for_process(process, running.segment_start, end));
            self.queues.push(level, index);
            self.record(EventKind::QuantumExpired, message, false);
        } else {
            let message = self.config.record_every_tick.then(|| {
                format!(
                    "Process {} continues execution (Rem BT: {}).",
                    process.id, process.remaining_burst_time
                )
            });
            self.running = Some(running);
            if let Some(message) = message {
                self.record(EventKind::Executing, message, false);
            }
        }

        self.now = end;
    }

    /// Queued work but nothing dispatched; only a misbehaving policy gets here
    fn idle_tick(&mut self) {
        if self.recorder.last_kind() != Some(EventKind::Idle) {
            self.record(
                EventKind::Idle,
                "CPU Idle. Waiting for next process or arrival.".to_string(),
                true,
            );
        }
        self.idle_time += 1;
        self.now += 1;
    }

    fn next_arrival(&self) -> Option<Tick> {
        self.processes
            .iter()
            .filter(|process| process.state == ProcessState::NotArrived)
            .map(|process| process.arrival_time)
            .min()
    }

    /// Skip the idle span `[now, next)` in one step
    fn fast_forward(&mut self, next: Tick) {
        let skipped = next.saturating_sub(self.now);
        let message = format!(
            "CPU Idle. Fast-forwarding by {} unit(s) to next arrival at t={}.",
            skipped, next
        );
        self.record(EventKind::IdleFastForward, message, true);
        self.idle_time += skipped;
        self.now = self.now.max(next);
    }

    fn force_stop(&mut self) {
        let forced = self.force_complete_remaining();
        warn!(
            time = self.now,
            ceiling = self.config.watchdog_tick_ceiling,
            forced,
            "Watchdog stopped the simulation"
        );
        let message = format!(
            "Simulation force stopped at t={} after reaching the {}-tick ceiling.",
            self.now, self.config.watchdog_tick_ceiling
        );
        self.record(EventKind::ForcedStop, message, false);
    }

    fn mark_stuck(&mut self) {
        let forced = self.force_complete_remaining();
        error!(time = self.now, forced, "Simulation stuck with unfinished processes");
        self.record(
            EventKind::Stuck,
            "Error: CPU idle, no new arrivals, but not all processes completed. Simulation stuck."
                .to_string(),
            true,
        );
    }

    /// Close the open segment and complete every unfinished process at now
    ///
    /// No start time is invented for processes that never ran.
    fn force_complete_remaining(&mut self) -> usize {
        if let Some(running) = self.running.take() {
            if self.now > running.segment_start {
                self.gantt.push(GanttEntry::for_process(
                    &self.processes[running.index],
                    running.segment_start,
                    self.now,
                ));
            }
        }
        self.queues.clear();

        let mut forced = 0;
        for (index, process) in self.processes.iter_mut().enumerate() {
            if process.is_completed() {
                continue;
            }
            process.state = ProcessState::Completed;
            process.completion_time = Some(self.now);
            process.force_completed = true;
            self.completed_order.push(index);
            forced += 1;
        }
        self.completed += forced;
        forced
    }

    fn record(&mut self, kind: EventKind, message: String, idle_override: bool) {
        debug!(time = self.now, kind = ?kind, "{}", message);
        let view = RunView {
            now: self.now,
            processes: &self.processes,
            running: self.running.map(|running| running.index),
            queues: &self.queues,
            completed_order: &self.completed_order,
            gantt: &self.gantt,
        };
        self.recorder.record(&view, kind, message, idle_override);
    }
}
