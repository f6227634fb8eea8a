/*!
 * Metrics Tests
 * Aggregates on the sample workload and the standalone calculator
 */

use cpu_sched_sim::metrics::calculate;
use cpu_sched_sim::{run_simulation, Algorithm, Process, ProcessDefinition, Workload};
use pretty_assertions::assert_eq;

#[test]
fn test_sample_workload_fcfs_metrics() {
    let workload = Workload::sample();
    let result = run_simulation(&workload.processes, Algorithm::Fcfs, None);
    let metrics = result.overall_metrics;

    assert_eq!(metrics.total_execution_time, 44);
    assert_eq!(metrics.average_turnaround_time, 21.625);
    assert_eq!(metrics.average_waiting_time, 16.125);
    assert_eq!(metrics.average_response_time, 16.125);
    assert_eq!(metrics.cpu_utilization, 100.0);
    assert_eq!(metrics.throughput, 8.0 / 44.0);
}

#[test]
fn test_detailed_info_keeps_input_order() {
    let processes = vec![
        ProcessDefinition::new("late", 3, 1),
        ProcessDefinition::new("early", 0, 2),
    ];
    let result = run_simulation(&processes, Algorithm::Fcfs, None);
    let ids: Vec<_> = result
        .detailed_process_info
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["late", "early"]);
}

#[test]
fn test_metric_identities_hold_for_every_algorithm() {
    let workload = Workload::sample();
    for algorithm in Algorithm::ALL {
        let result = run_simulation(&workload.processes, algorithm, Some(3));
        for p in &result.detailed_process_info {
            let completion = p.completion_time.unwrap();
            let start = p.start_time.unwrap();
            assert_eq!(p.turnaround_time, Some(completion - p.arrival_time));
            assert_eq!(p.waiting_time, Some(completion - p.arrival_time - p.burst_time));
            assert_eq!(p.response_time, Some(start - p.arrival_time));
            assert_eq!(p.remaining_burst_time, 0);
            assert_eq!(result.busy_time_of(&p.id), p.burst_time, "{}", algorithm);
        }
    }
}

#[test]
fn test_calculate_does_not_mutate_input() {
    let mut finished = Process::from_definition(&ProcessDefinition::new("P1", 0, 2));
    finished.start_time = Some(0);
    finished.completion_time = Some(2);
    let input = vec![finished];

    let (detailed, metrics) = calculate(&input, 2, 0);
    assert_eq!(input[0].turnaround_time, None);
    assert_eq!(detailed[0].turnaround_time, Some(2));
    assert_eq!(metrics.average_turnaround_time, 2.0);
}
