/*!
 * Dispatcher Tests
 * Algorithm routing, dispatch policies, fresh runs and reports
 */

use cpu_sched_sim::{
    render_comparison, AgingFactor, Algorithm, Dispatcher, DispatchPolicy, Process, ProcessSpec,
    ProcessState, SimConfig, SimulationError, TimeQuantum,
};
use pretty_assertions::assert_eq;

fn specs() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 5).with_priority(2),
        ProcessSpec::new("P2", 2, 3).with_priority(1),
    ]
}

#[test]
fn test_every_identifier_dispatches() {
    let dispatcher = Dispatcher::new(DispatchPolicy::Strict);
    for algorithm in Algorithm::ALL {
        let mut processes: Vec<Process> = specs().iter().map(Process::from).collect();
        let timeline = dispatcher
            .dispatch(algorithm.as_str(), &mut processes)
            .unwrap();
        assert_eq!(timeline.busy_time(), 8, "{algorithm}");
        assert!(processes.iter().all(Process::is_completed), "{algorithm}");
    }
}

#[test]
fn test_strict_policy_rejects_unknown_identifier() {
    let mut processes: Vec<Process> = specs().iter().map(Process::from).collect();
    let err = Dispatcher::new(DispatchPolicy::Strict)
        .dispatch("mlfq", &mut processes)
        .unwrap_err();
    assert_eq!(err, SimulationError::UnknownAlgorithm("mlfq".to_string()));
}

#[test]
fn test_permissive_policy_returns_empty_timeline() {
    let mut processes: Vec<Process> = specs().iter().map(Process::from).collect();
    let timeline = Dispatcher::default()
        .dispatch("mlfq", &mut processes)
        .unwrap();
    assert!(timeline.is_empty());
    assert!(processes.iter().all(|p| p.end_time.is_none()));
}

#[test]
fn test_quantum_changes_round_robin_schedule() {
    let specs = [ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 0, 3)];
    let short = Dispatcher::default()
        .with_quantum(TimeQuantum::new(1).unwrap())
        .run_fresh(Algorithm::RoundRobin, &specs);
    let long = Dispatcher::default()
        .with_quantum(TimeQuantum::new(5).unwrap())
        .run_fresh(Algorithm::RoundRobin, &specs);

    assert_eq!(
        short.timeline.to_string(),
        "[P1:0-1, P2:1-2, P1:2-3, P2:3-4, P1:4-5, P2:5-6, P1:6-8]"
    );
    assert_eq!(long.timeline.to_string(), "[P1:0-5, P2:5-8]");
}

#[test]
fn test_aging_factor_zero_matches_preemptive_priority() {
    let specs = specs();
    let aged = Dispatcher::default()
        .with_aging_factor(AgingFactor::new(0.0).unwrap())
        .run_fresh(Algorithm::Aging, &specs);
    let plain = Dispatcher::default().run_fresh(Algorithm::PriorityPreemptive, &specs);
    assert_eq!(aged.timeline, plain.timeline);
}

#[test]
fn test_from_config_carries_settings() {
    let config = SimConfig {
        dispatch_policy: DispatchPolicy::Strict,
        quantum: TimeQuantum::new(3).unwrap(),
        aging_factor: AgingFactor::new(1.5).unwrap(),
        trace_json: false,
    };
    let dispatcher = Dispatcher::from_config(&config);
    assert_eq!(dispatcher.policy(), DispatchPolicy::Strict);
    assert_eq!(dispatcher.quantum().ticks(), 3);
    assert_eq!(dispatcher.aging_factor().get(), 1.5);
}

#[test]
fn test_run_fresh_leaves_specs_reusable() {
    let specs = specs();
    let dispatcher = Dispatcher::default();
    let first = dispatcher.run_fresh(Algorithm::Srtf, &specs);
    let second = dispatcher.run_fresh(Algorithm::Srtf, &specs);
    assert_eq!(first, second);
}

#[test]
fn test_report_for_fcfs_run() {
    let run = Dispatcher::default().run_fresh(Algorithm::Fcfs, &specs());
    let report = run.report();

    assert_eq!(report.average_waiting_time, 1.5);
    assert_eq!(report.average_turnaround_time, 5.5);
    assert_eq!(report.makespan, 8);
    assert_eq!(report.rows[1].completion_time, Some(8));
}

#[test]
fn test_state_transitions_during_run() {
    let run = Dispatcher::default().run_fresh(Algorithm::PriorityPreemptive, &specs());
    assert_eq!(run.state_at(0, 1), Some(ProcessState::Running));
    assert_eq!(run.state_at(0, 3), Some(ProcessState::Ready));
    assert_eq!(run.state_at(1, 1), Some(ProcessState::Unarrived));
    assert_eq!(run.state_at(1, 4), Some(ProcessState::Running));
    assert_eq!(run.state_at(1, 5), Some(ProcessState::Completed));
}

#[test]
fn test_comparison_table() {
    let runs = Dispatcher::default().compare(&specs());
    let text = render_comparison(&runs);
    for algorithm in Algorithm::ALL {
        assert!(text.contains(algorithm.as_str()), "{algorithm}");
    }
}

#[test]
fn test_simulation_serializes_timeline_and_metrics() {
    let run = Dispatcher::default().run_fresh(Algorithm::Fcfs, &specs());
    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(json["algorithm"], "fcfs");
    assert_eq!(json["timeline"][1]["process_id"], "P2");
    assert_eq!(json["timeline"][1]["start_time"], 5);
    assert_eq!(json["processes"][1]["waiting_time"], 3);
}
