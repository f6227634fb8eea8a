/*!
 * Multilevel Queue
 *
 * Two fixed levels: high priority runs round robin, low priority runs FCFS.
 * A process's level is assigned once, on first admission, by comparing its
 * priority against a threshold. High preempts low on arrival, never the
 * reverse.
 */

use super::arrives_before;
use crate::core::types::{Priority, Tick};
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::{Algorithm, TimeQuantum};

#[derive(Debug, Clone, Copy)]
pub struct MultilevelQueuePolicy {
    quantum: TimeQuantum,
    threshold: Priority,
}

impl MultilevelQueuePolicy {
    pub fn new(quantum: TimeQuantum, threshold: Priority) -> Self {
        Self { quantum, threshold }
    }
}

impl SchedulingPolicy for MultilevelQueuePolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MultilevelQueue
    }

    fn assign_level(&self, process: &Process) -> Option<QueueLevel> {
        if process.priority < self.threshold {
            Some(QueueLevel::High)
        } else {
            Some(QueueLevel::Low)
        }
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.pop_front(QueueLevel::High).or_else(|| {
            queues.take_best(QueueLevel::Low, |a, b| {
                arrives_before(&processes[a], &processes[b])
            })
        })
    }

    fn should_preempt(&self, running: &Process, queues: &ReadyQueues, _processes: &[Process]) -> bool {
        running.queue_level == Some(QueueLevel::Low) && !queues.level(QueueLevel::High).is_empty()
    }

    fn quantum_for(&self, process: &Process) -> Option<Tick> {
        match process.queue_level {
            Some(QueueLevel::High) => Some(self.quantum.ticks()),
            _ => None,
        }
    }
}
