/*!
 * Process Types
 * Process records and derived timing metrics
 */

use crate::core::types::{Priority, ProcessId, Ticks};
use serde::{Deserialize, Serialize};

/// Process lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not reached yet
    Unarrived,
    /// Arrived and waiting for the CPU
    Ready,
    /// Holding the CPU
    Running,
    /// All burst ticks consumed
    Completed,
}

/// Immutable definition of a process, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProcessId>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Simulated process with its run-time bookkeeping
///
/// Identity fields (`id`, `arrival_time`, `burst_time`, `priority`) are set
/// by the caller; every other field is owned by the simulation engine.
///
/// # Preconditions
/// Engine procedures assume `burst_time >= 1`. Use
/// [`sanitize`](super::validation::sanitize) on raw input first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub remaining_time: Ticks,
    pub start_time: Option<Ticks>,
    pub end_time: Option<Ticks>,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub response_time: Option<Ticks>,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProcessId>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self::from(ProcessSpec::new(id, arrival_time, burst_time))
    }

    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Identity of this process without run-time state
    pub fn spec(&self) -> ProcessSpec {
        ProcessSpec {
            id: self.id.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
        }
    }

    /// Restore the pre-run state, discarding metrics from a previous run
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.end_time = None;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.response_time = None;
    }

    /// Eligible for the CPU at `now`
    ///
    /// # Performance
    /// Hot path - evaluated for every process on every tick
    #[inline(always)]
    #[must_use]
    pub const fn is_ready_at(&self, now: Ticks) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Response time with `-1` standing in for "never scheduled"
    #[inline]
    pub fn response_time_or_sentinel(&self) -> i64 {
        self.response_time.map_or(-1, |r| r as i64)
    }

    /// Lifecycle state at `now`, ignoring whether the process holds the CPU
    ///
    /// Callers that know the CPU occupant upgrade `Ready` to `Running`
    /// (see `Simulation::state_at`).
    pub fn state_at(&self, now: Ticks) -> ProcessState {
        match self.end_time {
            Some(end) if now >= end => ProcessState::Completed,
            _ if now < self.arrival_time => ProcessState::Unarrived,
            _ => ProcessState::Ready,
        }
    }
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            remaining_time: spec.burst_time,
            start_time: None,
            end_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
        }
    }
}

impl From<&ProcessSpec> for Process {
    fn from(spec: &ProcessSpec) -> Self {
        Self::from(spec.clone())
    }
}
