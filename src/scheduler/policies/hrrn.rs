/*!
 * Highest Response Ratio Next
 *
 * Ratio `(wait + burst) / burst`, recomputed against the clock at every
 * selection. Ratios are compared by cross-multiplication so ties are exact.
 */

use crate::core::types::Tick;
use crate::process::{Process, QueueLevel};
use crate::scheduler::queues::{ProcessIndex, ReadyQueues};
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::Algorithm;
use std::cmp::Ordering;

#[derive(Debug, Default, Clone, Copy)]
pub struct HrrnPolicy;

/// Response ratio of `process` at `now` as (numerator, denominator)
#[inline]
pub fn response_ratio(process: &Process, now: Tick) -> (u128, u128) {
    let burst = process.burst_time.max(1) as u128;
    let wait = process.waited_until(now) as u128;
    (wait + burst, burst)
}

/// Exact comparison of two response ratios
pub fn compare_ratios(a: (u128, u128), b: (u128, u128)) -> Ordering {
    (a.0 * b.1).cmp(&(b.0 * a.1))
}

impl SchedulingPolicy for HrrnPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hrrn
    }

    fn select(
        &self,
        queues: &mut ReadyQueues,
        processes: &[Process],
        now: Tick,
    ) -> Option<ProcessIndex> {
        queues.take_best(QueueLevel::Low, |a, b| {
            let (a, b) = (&processes[a], &processes[b]);
            match compare_ratios(response_ratio(a, now), response_ratio(b, now)) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => a.arrival_time < b.arrival_time,
            }
        })
    }
}
