/*!
 * Shortest Remaining Time First
 * Preemptive SJF: an arrival may take the CPU from the running process
 */

use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

#[derive(Debug, Default, Clone, Copy)]
pub struct SrtfPolicy;

fn shorter_remaining(a: &Process, b: &Process) -> bool {
    (a.remaining_burst_time, a.arrival_time) < (b.remaining_burst_time, b.arrival_time)
}

impl SchedulingPolicy for SrtfPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.take_best(QueueLevel::Low, |a, b| {
            shorter_remaining(&processes[a], &processes[b])
        })
    }

    fn should_preempt(&self, running: &Process, queues: &ReadyQueues, processes: &[Process]) -> bool {
        queues
            .peek_best(QueueLevel::Low, |a, b| {
                shorter_remaining(&processes[a], &processes[b])
            })
            .is_some_and(|best| processes[best].remaining_burst_time < running.remaining_burst_time)
    }
}
