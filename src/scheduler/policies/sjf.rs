/*!
 * Shortest Job First (non-preemptive)
 */

use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

/// Dispatches the smallest total burst, ties to the earliest arrival
#[derive(Debug, Default, Clone, Copy)]
pub struct SjfPolicy;

impl SchedulingPolicy for SjfPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.take_best(QueueLevel::Low, |a, b| {
            let (a, b) = (&processes[a], &processes[b]);
            (a.burst_time, a.arrival_time) < (b.burst_time, b.arrival_time)
        })
    }
}
