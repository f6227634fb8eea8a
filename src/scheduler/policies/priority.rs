/*!
 * Priority Scheduling
 * Lower priority number wins; optionally preemptive on arrival
 */

use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

#[derive(Debug, Clone, Copy)]
pub struct PriorityPolicy {
    preemptive: bool,
}

impl PriorityPolicy {
    pub const fn non_preemptive() -> Self {
        Self { preemptive: false }
    }

    pub const fn preemptive() -> Self {
        Self { preemptive: true }
    }
}

fn more_urgent(a: &Process, b: &Process) -> bool {
    (a.priority, a.arrival_time) < (b.priority, b.arrival_time)
}

impl SchedulingPolicy for PriorityPolicy {
    fn algorithm(&self) -> Algorithm {
        if self.preemptive {
            Algorithm::PriorityPreemptive
        } else {
            Algorithm::PriorityNonPreemptive
        }
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.take_best(QueueLevel::Low, |a, b| more_urgent(&processes[a], &processes[b]))
    }

    fn should_preempt(&self, running: &Process, queues: &ReadyQueues, processes: &[Process]) -> bool {
        self.preemptive
            && queues
                .peek_best(QueueLevel::Low, |a, b| more_urgent(&processes[a], &processes[b]))
                .is_some_and(|best| processes[best].priority < running.priority)
    }
}
