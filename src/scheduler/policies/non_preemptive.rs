/*!
 * Non-Preemptive Policies
 * FCFS, SJF, and Priority: the selected process runs to completion
 */

use crate::process::Process;
use crate::scheduler::engine::{simulate_by, Granularity};
use crate::scheduler::timeline::Timeline;

/// First come, first served
pub fn fcfs(processes: &mut [Process]) -> Timeline {
    simulate_by(processes, Granularity::ToCompletion, |_, a, b| {
        a.arrival_time.cmp(&b.arrival_time)
    })
}

/// Shortest job first
pub fn sjf(processes: &mut [Process]) -> Timeline {
    simulate_by(processes, Granularity::ToCompletion, |_, a, b| {
        a.burst_time.cmp(&b.burst_time)
    })
}

/// Priority scheduling; lower value runs first
pub fn priority(processes: &mut [Process]) -> Timeline {
    simulate_by(processes, Granularity::ToCompletion, |_, a, b| {
        a.priority.cmp(&b.priority)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_runs_in_arrival_order() {
        let mut processes = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
        let timeline = fcfs(&mut processes);
        assert_eq!(timeline.to_string(), "[P1:0-5, P2:5-8]");
        assert_eq!(processes[0].waiting_time, 0);
        assert_eq!(processes[1].waiting_time, 3);
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let mut processes = vec![Process::new("P1", 0, 6), Process::new("P2", 2, 3)];
        let timeline = sjf(&mut processes);
        assert_eq!(timeline.to_string(), "[P1:0-6, P2:6-9]");
    }

    #[test]
    fn test_sjf_picks_shortest_among_ready() {
        let mut processes = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 1, 6),
            Process::new("P3", 2, 2),
        ];
        let timeline = sjf(&mut processes);
        assert_eq!(timeline.to_string(), "[P1:0-3, P3:3-5, P2:5-11]");
    }

    #[test]
    fn test_priority_runs_lowest_value_first() {
        let mut processes = vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 0, 3).with_priority(1),
        ];
        let timeline = priority(&mut processes);
        assert_eq!(timeline.to_string(), "[P2:0-3, P1:3-8]");
        assert_eq!(processes[0].response_time, Some(3));
    }
}
