/*!
 * Scheduling Policies
 * One implementation per algorithm, selected once per run
 */

mod fcfs;
mod hrrn;
mod multilevel;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::FcfsPolicy;
pub use hrrn::{compare_ratios, response_ratio, HrrnPolicy};
pub use multilevel::MultilevelQueuePolicy;
pub use priority::PriorityPolicy;
pub use round_robin::RoundRobinPolicy;
pub use sjf::SjfPolicy;
pub use srtf::SrtfPolicy;

use super::traits::SchedulingPolicy;
use super::types::{Algorithm, TimeQuantum};
use crate::core::types::Priority;
use crate::process::Process;

/// Build the policy for `algorithm`
///
/// `quantum` is only read by round robin and the multilevel queue,
/// `mlq_threshold` only by the multilevel queue.
pub fn for_algorithm(
    algorithm: Algorithm,
    quantum: TimeQuantum,
    mlq_threshold: Priority,
) -> Box<dyn SchedulingPolicy> {
    match algorithm {
        Algorithm::Fcfs => Box::new(FcfsPolicy),
        Algorithm::Sjf => Box::new(SjfPolicy),
        Algorithm::Srtf => Box::new(SrtfPolicy),
        Algorithm::PriorityNonPreemptive => Box::new(PriorityPolicy::non_preemptive()),
        Algorithm::PriorityPreemptive => Box::new(PriorityPolicy::preemptive()),
        Algorithm::RoundRobin => Box::new(RoundRobinPolicy::new(quantum)),
        Algorithm::Hrrn => Box::new(HrrnPolicy),
        Algorithm::MultilevelQueue => Box::new(MultilevelQueuePolicy::new(quantum, mlq_threshold)),
    }
}

/// FCFS ordering shared by several policies
#[inline]
pub(crate) fn arrives_before(a: &Process, b: &Process) -> bool {
    a.arrival_time < b.arrival_time
}
