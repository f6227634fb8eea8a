/*!
 * Metrics Calculator
 * Per-process turnaround, waiting and response times plus run aggregates
 */

use crate::core::types::Tick;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one run, over processes that reached completion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OverallMetrics {
    pub average_turnaround_time: f64,
    pub average_waiting_time: f64,
    pub average_response_time: f64,
    /// Busy share of the run, in percent
    pub cpu_utilization: f64,
    /// Completed processes per tick
    pub throughput: f64,
    pub total_execution_time: Tick,
}

/// Fill in derived metrics and compute the aggregates
///
/// Returns fresh copies in input order. Processes without a completion time
/// pass through with their metric fields untouched.
pub fn calculate(processes: &[Process], total_time: Tick, idle_time: Tick) -> (Vec<Process>, OverallMetrics) {
    let mut detailed = processes.to_vec();

    let mut completed = 0u64;
    let mut turnaround_sum = 0u64;
    let mut waiting_sum = 0u64;
    let mut response_sum = 0u64;

    for process in &mut detailed {
        let Some(completion) = process.completion_time else {
            continue;
        };

        let turnaround = completion.saturating_sub(process.arrival_time);
        let waiting = turnaround.saturating_sub(process.burst_time);
        // Only synthetic completions can lack a start time
        let response = match process.start_time {
            Some(start) => start.saturating_sub(process.arrival_time),
            None => waiting,
        };

        process.turnaround_time = Some(turnaround);
        process.waiting_time = Some(waiting);
        process.response_time = Some(response);

        completed += 1;
        turnaround_sum += turnaround;
        waiting_sum += waiting;
        response_sum += response;
    }

    let average = |sum: u64| {
        if completed > 0 {
            sum as f64 / completed as f64
        } else {
            0.0
        }
    };

    let (cpu_utilization, throughput) = if total_time > 0 {
        let busy = total_time.saturating_sub(idle_time) as f64;
        (
            (busy / total_time as f64 * 100.0).clamp(0.0, 100.0),
            completed as f64 / total_time as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let metrics = OverallMetrics {
        average_turnaround_time: average(turnaround_sum),
        average_waiting_time: average(waiting_sum),
        average_response_time: average(response_sum),
        cpu_utilization,
        throughput,
        total_execution_time: total_time,
    };

    (detailed, metrics)
}
