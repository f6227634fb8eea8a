/*!
 * Round Robin
 * Circular ready queue with a fixed time quantum
 */

use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::{Algorithm, TimeQuantum};

/// Dispatches the queue head; expired processes rejoin at the tail
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinPolicy {
    quantum: TimeQuantum,
}

impl RoundRobinPolicy {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobinPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        _processes: &[Process],
        _now: Tick,
    ) -> Option<ProcessIndex> {
        queues.pop_front(QueueLevel::Low)
    }

    fn quantum_for(&self, _process: &Process) -> Option<Tick> {
        Some(self.quantum.ticks())
    }
}
