/*!
 * Dispatcher
 * Routes an algorithm identifier to its simulation procedure
 */

use super::policies;
use super::timeline::Timeline;
use super::types::{AgingFactor, Algorithm, DispatchPolicy, TimeQuantum};
use crate::config::SimConfig;
use crate::core::types::{SimResult, Ticks};
use crate::monitoring::simulation_span;
use crate::process::{Process, ProcessSpec, ProcessState};
use crate::report::SimulationReport;
use serde::Serialize;
use tracing::{info, warn};

/// Run `algorithm_id` over `processes` with permissive dispatch
///
/// Unknown identifiers return an empty timeline and leave `processes`
/// untouched. `quantum` only matters for `rr`; a missing or zero quantum
/// falls back to 2.
pub fn simulate(algorithm_id: &str, processes: &mut [Process], quantum: Option<u32>) -> Timeline {
    Dispatcher::new(DispatchPolicy::Permissive)
        .with_quantum(TimeQuantum::coerce(quantum))
        .dispatch(algorithm_id, processes)
        .unwrap_or_default()
}

/// Scheduling parameters plus the unknown-identifier policy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dispatcher {
    policy: DispatchPolicy,
    quantum: TimeQuantum,
    aging_factor: AgingFactor,
}

impl Dispatcher {
    pub fn new(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            policy: config.dispatch_policy,
            quantum: config.quantum,
            aging_factor: config.aging_factor,
        }
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = quantum;
        self
    }

    #[must_use]
    pub fn with_aging_factor(mut self, aging_factor: AgingFactor) -> Self {
        self.aging_factor = aging_factor;
        self
    }

    #[inline]
    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    #[inline]
    pub fn aging_factor(&self) -> AgingFactor {
        self.aging_factor
    }

    /// Resolve `algorithm_id` and run it over `processes` in place
    ///
    /// # Errors
    /// `SimulationError::UnknownAlgorithm` under the strict policy only.
    pub fn dispatch(&self, algorithm_id: &str, processes: &mut [Process]) -> SimResult<Timeline> {
        match algorithm_id.parse::<Algorithm>() {
            Ok(algorithm) => Ok(self.run(algorithm, processes)),
            Err(err) => match self.policy {
                DispatchPolicy::Strict => Err(err),
                DispatchPolicy::Permissive => {
                    warn!(algorithm = algorithm_id, "unknown algorithm, returning empty timeline");
                    Ok(Timeline::default())
                }
            },
        }
    }

    /// Run `algorithm` over `processes` in place
    ///
    /// Processes are reset first, so a list reused from an earlier run
    /// yields the same result as a fresh one.
    pub fn run(&self, algorithm: Algorithm, processes: &mut [Process]) -> Timeline {
        let span = simulation_span(algorithm, processes.len());
        let _entered = span.enter();

        let timeline = match algorithm {
            Algorithm::Fcfs => policies::fcfs(processes),
            Algorithm::Sjf => policies::sjf(processes),
            Algorithm::Srtf => policies::srtf(processes),
            Algorithm::RoundRobin => policies::round_robin(processes, self.quantum),
            Algorithm::Priority => policies::priority(processes),
            Algorithm::PriorityPreemptive => policies::priority_preemptive(processes),
            Algorithm::Aging => policies::aging(processes, self.aging_factor),
            Algorithm::Hrrn => policies::hrrn(processes),
        };

        info!(
            algorithm = algorithm.as_str(),
            processes = processes.len(),
            entries = timeline.len(),
            makespan = timeline.end_time(),
            "simulation complete"
        );

        timeline
    }

    /// Run `algorithm` on a fresh process list built from `specs`
    pub fn run_fresh(&self, algorithm: Algorithm, specs: &[ProcessSpec]) -> Simulation {
        let mut processes: Vec<Process> = specs.iter().map(Process::from).collect();
        let timeline = self.run(algorithm, &mut processes);
        Simulation {
            algorithm,
            processes,
            timeline,
        }
    }

    /// Run every algorithm, each on its own fresh copy of `specs`
    pub fn compare(&self, specs: &[ProcessSpec]) -> Vec<Simulation> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| self.run_fresh(algorithm, specs))
            .collect()
    }
}

/// Result of one run: the finished processes and their timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub algorithm: Algorithm,
    pub processes: Vec<Process>,
    pub timeline: Timeline,
}

impl Simulation {
    /// Aggregate metrics for this run
    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(&self.processes, &self.timeline)
    }

    /// Lifecycle state of the process at `index` at tick `tick`
    pub fn state_at(&self, index: usize, tick: Ticks) -> Option<ProcessState> {
        let process = self.processes.get(index)?;
        let state = match process.state_at(tick) {
            ProcessState::Ready
                if self
                    .timeline
                    .occupant_at(tick)
                    .is_some_and(|e| e.process_index == Some(index)) =>
            {
                ProcessState::Running
            }
            other => other,
        };
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SimulationError;

    fn workload() -> Vec<Process> {
        vec![Process::new("P1", 0, 5), Process::new("P2", 0, 3)]
    }

    #[test]
    fn test_simulate_routes_by_identifier() {
        let mut processes = workload();
        let timeline = simulate("rr", &mut processes, Some(2));
        assert_eq!(timeline.to_string(), "[P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8]");

        let mut processes = workload();
        let timeline = simulate("sjf", &mut processes, None);
        assert_eq!(timeline.to_string(), "[P2:0-3, P1:3-8]");
    }

    #[test]
    fn test_invalid_quantum_falls_back_to_default() {
        let mut a = workload();
        let mut b = workload();
        assert_eq!(simulate("rr", &mut a, Some(0)), simulate("rr", &mut b, Some(2)));
    }

    #[test]
    fn test_unknown_algorithm_is_permissive_by_default() {
        let mut processes = workload();
        let timeline = simulate("lottery", &mut processes, None);
        assert!(timeline.is_empty());
        assert_eq!(processes, workload());
    }

    #[test]
    fn test_strict_dispatch_reports_unknown_algorithm() {
        let mut processes = workload();
        let result = Dispatcher::new(DispatchPolicy::Strict).dispatch("lottery", &mut processes);
        assert_eq!(
            result,
            Err(SimulationError::UnknownAlgorithm("lottery".to_string()))
        );
        assert_eq!(processes, workload());
    }

    #[test]
    fn test_rerun_on_same_list_is_identical() {
        let mut processes = workload();
        let dispatcher = Dispatcher::default();
        let first = dispatcher.run(Algorithm::Srtf, &mut processes);
        let snapshot = processes.clone();
        let second = dispatcher.run(Algorithm::Srtf, &mut processes);
        assert_eq!(first, second);
        assert_eq!(snapshot, processes);
    }

    #[test]
    fn test_compare_covers_every_algorithm() {
        let specs = [ProcessSpec::new("P1", 0, 5), ProcessSpec::new("P2", 2, 3)];
        let runs = Dispatcher::default().compare(&specs);
        assert_eq!(runs.len(), Algorithm::ALL.len());
        for run in &runs {
            assert_eq!(run.timeline.busy_time(), 8, "{}", run.algorithm);
        }
    }

    #[test]
    fn test_state_at_reports_running() {
        let specs = [ProcessSpec::new("P1", 0, 6), ProcessSpec::new("P2", 2, 3)];
        let sim = Dispatcher::default().run_fresh(Algorithm::Srtf, &specs);
        assert_eq!(sim.state_at(1, 0), Some(ProcessState::Unarrived));
        assert_eq!(sim.state_at(0, 1), Some(ProcessState::Running));
        assert_eq!(sim.state_at(0, 3), Some(ProcessState::Ready));
        assert_eq!(sim.state_at(1, 3), Some(ProcessState::Running));
        assert_eq!(sim.state_at(1, 5), Some(ProcessState::Completed));
        assert_eq!(sim.state_at(2, 0), None);
    }
}
