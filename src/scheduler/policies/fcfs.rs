/*!
 * First-Come, First-Served
 */

use super::arrives_before;
use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;

/// Dispatches the earliest arrival and runs it to completion
#[derive(Debug, Default, Clone, Copy)]
pub struct FcfsPolicy;

impl SchedulingPolicy for FcfsPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.take_best(QueueLevel::Low, |a, b| {
            arrives_before(&processes[a], &processes[b])
        })
    }
}
