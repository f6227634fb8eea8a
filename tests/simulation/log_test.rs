/*!
 * Replay Log Tests
 * Event ordering, messages and snapshot independence
 */

use cpu_sched_sim::{
    run_simulation, Algorithm, EventKind, ProcessDefinition, SimulationConfig, Simulator,
};
use pretty_assertions::assert_eq;

fn kinds(events: &[cpu_sched_sim::SimulationEvent]) -> Vec<EventKind> {
    events.iter().map(|event| event.kind).collect()
}

#[test]
fn test_fcfs_event_sequence() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 2),
        ProcessDefinition::new("P2", 4, 1),
    ];
    let result = run_simulation(&processes, Algorithm::Fcfs, None);

    assert_eq!(
        kinds(&result.simulation_log),
        vec![
            EventKind::Started,
            EventKind::Arrived,
            EventKind::Dispatched,
            EventKind::Completed,
            EventKind::IdleFastForward,
            EventKind::Arrived,
            EventKind::Dispatched,
            EventKind::Completed,
            EventKind::Finished,
        ]
    );

    let log = &result.simulation_log;
    assert_eq!(log[1].message, "Process P1 (BT: 2, Prio: 0) arrived.");
    assert_eq!(log[2].message, "Process P1 starts/resumes execution (Rem BT: 2).");
    assert_eq!(log[3].message, "Process P1 completed at t=2.");
    assert_eq!(log[3].time, 1);
    assert_eq!(
        log[4].message,
        "CPU Idle. Fast-forwarding by 2 unit(s) to next arrival at t=4."
    );
    assert_eq!(log[4].time, 2);
    assert!(log[4].cpu_idle);
    assert_eq!(log[8].message, "All 2 processes completed. Total time: 5.");
    assert_eq!(log[8].time, 5);
}

#[test]
fn test_event_times_never_decrease() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 3),
        ProcessDefinition::new("P2", 1, 2),
        ProcessDefinition::new("P3", 7, 2),
    ];
    let result = run_simulation(&processes, Algorithm::RoundRobin, Some(1));
    for pair in result.simulation_log.windows(2) {
        assert!(pair[0].time <= pair[1].time);
    }
}

#[test]
fn test_snapshots_capture_state_at_their_step() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 3),
        ProcessDefinition::new("P2", 0, 2),
    ];
    let result = run_simulation(&processes, Algorithm::Fcfs, None);

    let dispatch = result
        .simulation_log
        .iter()
        .find(|event| event.kind == EventKind::Dispatched)
        .unwrap();
    let running = dispatch.running_process.as_ref().unwrap();
    assert_eq!(running.id, "P1");
    assert_eq!(running.remaining_burst_time, 3);
    assert_eq!(dispatch.ready_queue.len(), 1);
    assert_eq!(dispatch.ready_queue[0].id, "P2");
    assert!(dispatch.gantt_chart_snapshot.is_empty());
    assert!(dispatch.completed_processes.is_empty());

    let final_event = result.simulation_log.last().unwrap();
    assert_eq!(final_event.gantt_chart_snapshot, result.gantt_chart_data);
    assert_eq!(final_event.completed_processes.len(), 2);
}

#[test]
fn test_gantt_snapshots_grow_as_prefixes() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 4),
        ProcessDefinition::new("P2", 1, 3),
        ProcessDefinition::new("P3", 2, 2),
    ];
    let result = run_simulation(&processes, Algorithm::RoundRobin, Some(2));
    for event in &result.simulation_log {
        let len = event.gantt_chart_snapshot.len();
        assert_eq!(event.gantt_chart_snapshot[..], result.gantt_chart_data[..len]);
    }
}

#[test]
fn test_multilevel_reports_both_queues() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 4).with_priority(1),
        ProcessDefinition::new("P2", 0, 2).with_priority(4),
    ];
    let result = run_simulation(&processes, Algorithm::MultilevelQueue, Some(2));

    let log = &result.simulation_log;
    assert_eq!(
        log[1].message,
        "Process P1 (Prio 1) arrived, assigned to MQS High-Prio (RR) Queue."
    );
    assert_eq!(
        log[2].message,
        "Process P2 (Prio 4) arrived, assigned to MQS Low-Prio (FCFS) Queue."
    );
    assert_eq!(log[2].high_priority_queue.as_ref().map(Vec::len), Some(1));
    assert_eq!(log[2].ready_queue.len(), 1);
    assert_eq!(
        log[3].message,
        "Process P1 (from MQS Q1) starts/resumes execution (Rem BT: 4)."
    );
    assert!(log.iter().all(|event| event.high_priority_queue.is_some()));
}

#[test]
fn test_single_queue_algorithms_omit_high_queue() {
    let processes = vec![ProcessDefinition::new("P1", 0, 1)];
    let result = run_simulation(&processes, Algorithm::Hrrn, None);
    assert!(result
        .simulation_log
        .iter()
        .all(|event| event.high_priority_queue.is_none()));
}

#[test]
fn test_preemption_is_logged() {
    let processes = vec![
        ProcessDefinition::new("P1", 0, 8),
        ProcessDefinition::new("P2", 1, 4),
    ];
    let result = run_simulation(&processes, Algorithm::Srtf, None);
    let preempted: Vec<_> = result
        .simulation_log
        .iter()
        .filter(|event| event.kind == EventKind::Preempted)
        .collect();

    assert_eq!(preempted.len(), 1);
    assert_eq!(preempted[0].time, 1);
    assert_eq!(preempted[0].message, "Process P1 preempted at t=1 (Rem BT: 7).");
    assert!(preempted[0].running_process.is_none());
}

#[test]
fn test_record_every_tick_adds_execution_frames() {
    let processes = vec![ProcessDefinition::new("P1", 0, 3)];
    let simulator = Simulator::new(SimulationConfig::default().with_record_every_tick(true));
    let result = simulator.run(&processes, Algorithm::Fcfs, None);

    assert_eq!(
        kinds(&result.simulation_log),
        vec![
            EventKind::Started,
            EventKind::Arrived,
            EventKind::Dispatched,
            EventKind::Executing,
            EventKind::Executing,
            EventKind::Completed,
            EventKind::Finished,
        ]
    );
    assert_eq!(
        result.simulation_log[3].message,
        "Process P1 continues execution (Rem BT: 2)."
    );
}

#[test]
fn test_result_serializes_to_json() {
    let processes = vec![ProcessDefinition::new("P1", 0, 1).with_color("#FF6384")];
    let result = run_simulation(&processes, Algorithm::Fcfs, None);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["gantt_chart_data"][0]["color"], "#FF6384");
    assert_eq!(json["simulation_log"][0]["kind"], "started");
    assert_eq!(json["overall_metrics"]["total_execution_time"], 1);
    assert!(json["simulation_log"][0].get("running_process").is_none());
}
