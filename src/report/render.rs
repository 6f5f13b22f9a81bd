/*!
 * Text Rendering
 * Plain-text timeline, summary table, and comparison output
 */

use super::summary::SimulationReport;
use crate::scheduler::{Simulation, Timeline};
use std::fmt;

/// Text Gantt chart: a bar of labelled segments over a tick axis
///
/// Each tick is `scale` characters wide.
pub fn render_gantt(timeline: &Timeline, scale: usize) -> String {
    let scale = scale.max(1);
    let mut bar = String::from("|");
    let mut axis = String::from("0");

    for entry in timeline {
        let width = entry.duration() as usize * scale;
        let label = entry.process_id.as_str();
        let cell = if label.len() <= width {
            format!("{label:^width$}")
        } else {
            "#".repeat(width)
        };
        bar.push_str(&cell);
        bar.push('|');

        let mark = entry.end_time.to_string();
        let pad = (width + 1).saturating_sub(mark.len());
        axis.push_str(&" ".repeat(pad));
        axis.push_str(&mark);
    }

    format!("{bar}\n{axis}")
}

/// Per-process table followed by the averages
pub fn render_table(report: &SimulationReport) -> String {
    report.to_string()
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>6} {:>8} {:>11} {:>11} {:>8} {:>9}",
            "Process", "Burst", "Arrival", "Completion", "Turnaround", "Waiting", "Response"
        )?;
        for row in &self.rows {
            let completion = row
                .completion_time
                .map_or_else(|| "-".to_string(), |t| t.to_string());
            writeln!(
                f,
                "{:<8} {:>6} {:>8} {:>11} {:>11} {:>8} {:>9}",
                row.id.as_str(),
                row.burst_time,
                row.arrival_time,
                completion,
                row.turnaround_time,
                row.waiting_time,
                row.response_time
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Average Waiting Time:    {:.2}", self.average_waiting_time)?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.average_turnaround_time)?;
        writeln!(f, "Average Response Time:   {:.2}", self.average_response_time)?;
        write!(
            f,
            "CPU Utilization:         {:.1}%  ({} context switches)",
            self.cpu_utilization * 100.0,
            self.context_switches
        )
    }
}

/// One line of averages per algorithm
pub fn render_comparison(runs: &[Simulation]) -> String {
    let mut out = format!(
        "{:<12} {:>12} {:>15} {:>13} {:>9}\n",
        "Algorithm", "Avg Waiting", "Avg Turnaround", "Avg Response", "Switches"
    );
    for run in runs {
        let report = run.report();
        out.push_str(&format!(
            "{:<12} {:>12.2} {:>15.2} {:>13.2} {:>9}\n",
            run.algorithm.as_str(),
            report.average_waiting_time,
            report.average_turnaround_time,
            report.average_response_time,
            report.context_switches
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Process, ProcessSpec};
    use crate::scheduler::{policies, Dispatcher};

    #[test]
    fn test_gantt_layout() {
        let mut processes = vec![Process::new("P1", 1, 2), Process::new("P2", 1, 1)];
        let timeline = policies::fcfs(&mut processes);
        let gantt = render_gantt(&timeline, 2);
        let mut lines = gantt.lines();
        assert_eq!(lines.next(), Some("|##| P1 |P2|"));
        assert_eq!(lines.next(), Some("0  1    3  4"));
    }

    #[test]
    fn test_table_contains_rows_and_averages() {
        let mut processes = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
        let timeline = policies::fcfs(&mut processes);
        let table = render_table(&SimulationReport::new(&processes, &timeline));
        assert!(table.lines().nth(1).unwrap().starts_with("P1"));
        assert!(table.contains("Average Waiting Time:    1.50"));
        assert!(table.contains("Average Turnaround Time: 5.50"));
    }

    #[test]
    fn test_table_matches_report_display() {
        let mut processes = vec![Process::new("P1", 0, 2), Process::new("P2", 4, 1)];
        let timeline = policies::sjf(&mut processes);
        let report = SimulationReport::new(&processes, &timeline);
        let table = render_table(&report);
        assert_eq!(table, report.to_string());
        assert!(table.ends_with("CPU Utilization:         60.0%  (1 context switches)"));
    }

    #[test]
    fn test_comparison_lists_every_run() {
        let specs = [ProcessSpec::new("P1", 0, 3)];
        let runs = Dispatcher::default().compare(&specs);
        let text = render_comparison(&runs);
        assert_eq!(text.lines().count(), runs.len() + 1);
        assert!(text.contains("priority_p"));
    }
}
