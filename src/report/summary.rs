/*!
 * Run Summary
 * Per-process table rows and aggregate statistics for a finished run
 */

use crate::core::types::{ProcessId, Ticks};
use crate::process::Process;
use crate::scheduler::Timeline;
use serde::Serialize;

/// One row of the per-process summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRow {
    pub id: ProcessId,
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
    pub completion_time: Option<Ticks>,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    /// `-1` when the process never ran
    pub response_time: i64,
}

impl From<&Process> for ProcessRow {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id.clone(),
            burst_time: p.burst_time,
            arrival_time: p.arrival_time,
            completion_time: p.end_time,
            turnaround_time: p.turnaround_time,
            waiting_time: p.waiting_time,
            response_time: p.response_time_or_sentinel(),
        }
    }
}

/// Aggregate metrics of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub rows: Vec<ProcessRow>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    pub makespan: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    /// Busy share of the makespan, in `[0, 1]`
    pub cpu_utilization: f64,
    /// Completed processes per tick
    pub throughput: f64,
    pub context_switches: usize,
}

impl SimulationReport {
    pub fn new(processes: &[Process], timeline: &Timeline) -> Self {
        let makespan = timeline.end_time();
        let busy_time = timeline.busy_time();
        let completed = processes.iter().filter(|p| p.is_completed()).count();

        Self {
            rows: processes.iter().map(ProcessRow::from).collect(),
            average_waiting_time: mean(processes.iter().map(|p| p.waiting_time)),
            average_turnaround_time: mean(processes.iter().map(|p| p.turnaround_time)),
            average_response_time: mean(processes.iter().filter_map(|p| p.response_time)),
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization: ratio(busy_time as f64, makespan),
            throughput: ratio(completed as f64, makespan),
            context_switches: timeline.context_switches(),
        }
    }
}

fn mean(values: impl Iterator<Item = Ticks>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn ratio(value: f64, makespan: Ticks) -> f64 {
    if makespan == 0 {
        0.0
    } else {
        value / makespan as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::policies;

    #[test]
    fn test_fcfs_report() {
        let mut processes = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
        let timeline = policies::fcfs(&mut processes);
        let report = SimulationReport::new(&processes, &timeline);

        assert_eq!(report.average_waiting_time, 1.5);
        assert_eq!(report.average_turnaround_time, 5.5);
        assert_eq!(report.average_response_time, 1.5);
        assert_eq!(report.makespan, 8);
        assert_eq!(report.idle_time, 0);
        assert_eq!(report.cpu_utilization, 1.0);
        assert_eq!(report.throughput, 0.25);
        assert_eq!(report.context_switches, 1);
        assert_eq!(report.rows[1].completion_time, Some(8));
        assert_eq!(report.rows[1].response_time, 3);
    }

    #[test]
    fn test_report_with_idle_gap() {
        let mut processes = vec![Process::new("P1", 3, 2)];
        let timeline = policies::fcfs(&mut processes);
        let report = SimulationReport::new(&processes, &timeline);
        assert_eq!(report.idle_time, 3);
        assert_eq!(report.cpu_utilization, 0.4);
        assert_eq!(report.context_switches, 0);
    }

    #[test]
    fn test_report_for_unrun_processes() {
        let processes = vec![Process::new("P1", 0, 2)];
        let report = SimulationReport::new(&processes, &Timeline::new());
        assert_eq!(report.average_response_time, 0.0);
        assert_eq!(report.cpu_utilization, 0.0);
        assert_eq!(report.rows[0].response_time, -1);
        assert_eq!(report.rows[0].completion_time, None);
    }
}
