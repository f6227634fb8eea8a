/*!
 * Watchdog and Stuck Run Tests
 * Runs that cannot finish normally still return a complete result
 */

use cpu_sched_sim::scheduler::{ProcessIndex, ReadyQueues};
use cpu_sched_sim::{
    Algorithm, EventKind, Outcome, Process, ProcessDefinition, QueueLevel, SchedulingPolicy,
    SimulationConfig, Simulator, Tick,
};
use pretty_assertions::assert_eq;

/// Dequeues and then discards every selection
struct DroppingPolicy;

impl SchedulingPolicy for DroppingPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn select(&self, queues: &mut ReadyQueues, _: &[Process], _: Tick) -> Option<ProcessIndex> {
        queues.pop_front(QueueLevel::Low);
        None
    }
}

/// Never selects anything
struct IdlePolicy;

impl SchedulingPolicy for IdlePolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn select(&self, _: &mut ReadyQueues, _: &[Process], _: Tick) -> Option<ProcessIndex> {
        None
    }
}

fn simulator_with_ceiling(ticks: Tick) -> Simulator {
    Simulator::new(SimulationConfig::default().with_watchdog_tick_ceiling(ticks))
}

#[test]
fn test_watchdog_stops_long_run() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 50),
        ProcessDefinition::new("P2", 3, 5),
    ];
    let result = simulator_with_ceiling(10).run(&processes, Algorithm::Fcfs, None);

    assert_eq!(result.outcome(), Outcome::ForcedStop);
    assert_eq!(result.gantt_chart_data.len(), 1);
    assert_eq!(result.gantt_chart_data[0].start, 0);
    assert_eq!(result.gantt_chart_data[0].end, 10);
    assert_eq!(result.overall_metrics.total_execution_time, 10);

    let last = result.simulation_log.last().unwrap();
    assert_eq!(last.kind, EventKind::ForcedStop);
    assert_eq!(last.time, 10);

    for p in &result.detailed_process_info {
        assert!(p.force_completed);
        assert_eq!(p.completion_time, Some(10));
    }
    let p2 = &result.detailed_process_info[1];
    assert_eq!(p2.start_time, None);
    assert_eq!(p2.waiting_time, Some(2));
    assert_eq!(p2.response_time, Some(2));
}

#[test]
fn test_fast_forward_past_ceiling_stops_at_arrival() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 2),
        ProcessDefinition::new("P2", 100, 3),
    ];
    let result = simulator_with_ceiling(10).run(&processes, Algorithm::Fcfs, None);

    assert_eq!(result.outcome(), Outcome::ForcedStop);
    assert_eq!(result.overall_metrics.total_execution_time, 100);
    assert!(!result.detailed_process_info[0].force_completed);
    assert!(result.detailed_process_info[1].force_completed);
    assert_eq!(result.detailed_process_info[1].turnaround_time, Some(0));
}

#[test]
fn test_default_ceiling_is_two_thousand_ticks() {
    let processes = vec![ProcessDefinition::new("P1", 0, 5_000)];
    let result = Simulator::default().run(&processes, Algorithm::RoundRobin, Some(100));

    assert_eq!(result.outcome(), Outcome::ForcedStop);
    assert_eq!(result.overall_metrics.total_execution_time, 2_000);
    assert_eq!(result.busy_time_of("P1"), 2_000);
}

#[test]
fn test_stuck_run_completes_synthetically() {
    let processes = vec![ProcessDefinition::new("P1", 0, 3)];
    let result = Simulator::default().run_with_policy(&processes, Box::new(DroppingPolicy));

    assert_eq!(result.outcome(), Outcome::Stuck);
    let last = result.simulation_log.last().unwrap();
    assert_eq!(
        last.message,
        "Error: CPU idle, no new arrivals, but not all processes completed. Simulation stuck."
    );
    assert!(last.cpu_idle);

    let p1 = &result.detailed_process_info[0];
    assert!(p1.force_completed);
    assert_eq!(p1.completion_time, Some(0));
    assert_eq!(result.overall_metrics.cpu_utilization, 0.0);
    assert_eq!(result.overall_metrics.throughput, 0.0);
}

#[test]
fn test_idle_policy_is_bounded_by_watchdog() {
    let processes = vec![ProcessDefinition::new("P1", 0, 3)];
    let result = simulator_with_ceiling(5).run_with_policy(&processes, Box::new(IdlePolicy));

    let kinds: Vec<_> = result.simulation_log.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Started,
            EventKind::Arrived,
            EventKind::Idle,
            EventKind::ForcedStop,
        ]
    );
    assert_eq!(result.overall_metrics.total_execution_time, 5);
    assert_eq!(result.overall_metrics.cpu_utilization, 0.0);
    assert!(result.gantt_chart_data.is_empty());
}
