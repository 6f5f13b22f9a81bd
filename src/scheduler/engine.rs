/*!
 * Simulation Engine
 * Discrete-time loop state shared by every scheduling procedure
 */

use super::timeline::Timeline;
use crate::core::types::Ticks;
use crate::process::Process;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// How long a selected process keeps the CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Granularity {
    /// Until its remaining burst is exhausted
    ToCompletion,
    /// One tick, then selection is re-evaluated
    Tick,
}

/// State of one simulation run
///
/// Holds the exclusive borrow of the process list for the whole run. Every
/// process is reset on entry so metrics from an earlier run never leak in.
pub(super) struct Run<'a> {
    processes: &'a mut [Process],
    timeline: Timeline,
    now: Ticks,
    completed: usize,
    running: Option<usize>,
}

impl<'a> Run<'a> {
    pub fn new(processes: &'a mut [Process]) -> Self {
        for process in processes.iter_mut() {
            process.reset();
        }

        Self {
            processes,
            timeline: Timeline::new(),
            now: 0,
            completed: 0,
            running: None,
        }
    }

    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.now
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.completed == self.processes.len()
    }

    #[inline(always)]
    pub fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    #[inline]
    pub fn processes(&self) -> &[Process] {
        &*self.processes
    }

    /// Indices of processes eligible at the current tick, in input order
    pub fn ready(&self) -> impl Iterator<Item = usize> + '_ {
        let now = self.now;
        self.processes
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_ready_at(now))
            .map(|(i, _)| i)
    }

    /// Pick the ready process that sorts first under `order`
    ///
    /// Ties fall back to the earliest arrival, then to input order.
    pub fn pick_by<F>(&self, order: F) -> Option<usize>
    where
        F: Fn(Ticks, &Process, &Process) -> Ordering,
    {
        let now = self.now;
        self.ready().min_by(|&a, &b| {
            let (pa, pb) = (&self.processes[a], &self.processes[b]);
            order(now, pa, pb)
                .then_with(|| pa.arrival_time.cmp(&pb.arrival_time))
                .then_with(|| a.cmp(&b))
        })
    }

    /// Advance one tick with no eligible process
    pub fn idle_tick(&mut self) {
        if let Some(previous) = self.running.take() {
            trace!(tick = self.now, process = %self.processes[previous].id, "cpu released");
        }
        self.timeline.push_idle(self.now, 1);
        self.now += 1;
    }

    /// Give the process at `index` the CPU for `ticks` ticks
    ///
    /// Returns `true` when the process completes within the slice.
    pub fn execute(&mut self, index: usize, ticks: Ticks) -> bool {
        let now = self.now;
        let slice = ticks.min(self.processes[index].remaining_time);
        debug_assert!(slice > 0, "executing a finished process");
        debug_assert!(
            self.processes[index].is_ready_at(now),
            "executing a process that is not ready"
        );

        if self.running != Some(index) {
            match self.running {
                Some(previous) if self.processes[previous].remaining_time > 0 => debug!(
                    tick = now,
                    preempted = %self.processes[previous].id,
                    next = %self.processes[index].id,
                    "preemption"
                ),
                _ => debug!(tick = now, process = %self.processes[index].id, "dispatch"),
            }
            self.running = Some(index);
        }

        // Every other unfinished process is waiting for each tick of the
        // slice it has already arrived for.
        let end = now + slice;
        for (i, other) in self.processes.iter_mut().enumerate() {
            if i != index && other.remaining_time > 0 && other.arrival_time < end {
                other.waiting_time += end - other.arrival_time.max(now);
            }
        }

        let process = &mut self.processes[index];
        if process.start_time.is_none() {
            process.start_time = Some(now);
            process.response_time = Some(now - process.arrival_time);
        }
        process.remaining_time -= slice;
        self.timeline.push_process(index, &process.id, now, slice);
        self.now = end;

        if process.remaining_time == 0 {
            self.complete(index);
            true
        } else {
            false
        }
    }

    fn complete(&mut self, index: usize) {
        let now = self.now;
        let process = &mut self.processes[index];
        let turnaround = now - process.arrival_time;
        let waiting = turnaround - process.burst_time;
        debug_assert_eq!(
            process.waiting_time, waiting,
            "incremental waiting time for {} diverged",
            process.id
        );

        process.end_time = Some(now);
        process.turnaround_time = turnaround;
        process.waiting_time = waiting;
        self.completed += 1;
        self.running = None;

        debug!(
            tick = now,
            process = %process.id,
            turnaround,
            waiting,
            "process completed"
        );
    }

    pub fn finish(self) -> Timeline {
        debug_assert!(self.is_done(), "run finished with unfinished processes");
        self.timeline
    }
}

/// Shared loop for the "pick the best ready process" family
pub(super) fn simulate_by<F>(processes: &mut [Process], granularity: Granularity, order: F) -> Timeline
where
    F: Fn(Ticks, &Process, &Process) -> Ordering,
{
    let mut run = Run::new(processes);

    while !run.is_done() {
        let Some(index) = run.pick_by(&order) else {
            run.idle_tick();
            continue;
        };

        let ticks = match granularity {
            Granularity::ToCompletion => run.process(index).remaining_time,
            Granularity::Tick => 1,
        };
        run.execute(index, ticks);
    }

    run.finish()
}
