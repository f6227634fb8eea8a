/*!
 * Scheduling Policy Trait
 * Interface separating per-algorithm selection rules from the simulation loop
 */

use super::queues::{ProcessIndex, ReadyQueues};
use super::types::Algorithm;
use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};

/// Selection rules for one scheduling algorithm
///
/// The simulation loop owns the process table and the queues; a policy only
/// decides. One implementation exists per [`Algorithm`], chosen once per run.
pub trait SchedulingPolicy: Send + Sync {
    /// Algorithm implemented by this policy
    fn algorithm(&self) -> Algorithm;

    /// Queue level for a process on its first admission
    ///
    /// Returning `None` places the process on the single ready queue and
    /// leaves its `queue_level` unset.
    fn assign_level(&self, _process: &Process) -> Option<QueueLevel> {
        None
    }

    /// Remove and return the next process to dispatch
    ///
    /// `now` is the current tick, for policies whose ranking depends on it.
    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        now: Tick,
    ) -> Option<ProcessIndex>;

    /// Whether the queued processes justify suspending `running`
    ///
    /// Only consulted on ticks that admitted at least one arrival.
    fn should_preempt(
        &self,
        _running: &Process,
        _queues: &ReadyQueues,
        _processes: &[Process],
    ) -> bool {
        false
    }

    /// Slice length for a dispatch of `process`, or `None` to run to completion
    fn quantum_for(&self, _process: &Process) -> Option<Tick> {
        None
    }
}
