/*!
 * Scheduler Types
 * Algorithm identifiers and scheduling parameters
 */

use crate::core::errors::SimulationError;
use crate::core::types::{SimResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use tracing::warn;

/// Default round robin quantum, in ticks
pub const DEFAULT_QUANTUM: u32 = 2;

/// Default aging factor (priority units per waited tick)
pub const DEFAULT_AGING_FACTOR: f64 = 0.5;

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time first
    Srtf,
    /// Round robin with a fixed quantum
    RoundRobin,
    /// Priority (non-preemptive)
    Priority,
    /// Priority (preemptive)
    PriorityPreemptive,
    /// Preemptive priority with aging
    Aging,
    /// Highest response ratio next
    Hrrn,
}

impl Algorithm {
    /// Every algorithm, in catalog order
    pub const ALL: [Algorithm; 8] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::RoundRobin,
        Self::Priority,
        Self::PriorityPreemptive,
        Self::Aging,
        Self::Hrrn,
    ];

    /// Canonical short identifier
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_p",
            Self::Aging => "aging",
            Self::Hrrn => "hrrn",
        }
    }

    /// Whether a running process can lose the CPU before it finishes
    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive | Self::Aging
        )
    }

    /// Whether the process `priority` field influences selection
    #[inline]
    pub const fn uses_priority(&self) -> bool {
        matches!(
            self,
            Self::Priority | Self::PriorityPreemptive | Self::Aging
        )
    }

    /// Whether the time quantum influences selection
    #[inline]
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_serve" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            "priority_p" | "priority_preemptive" => Ok(Self::PriorityPreemptive),
            "aging" => Ok(Self::Aging),
            "hrrn" | "highest_response_ratio_next" => Ok(Self::Hrrn),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round robin time quantum, in ticks (always at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeQuantum(NonZeroU32);

impl TimeQuantum {
    /// Create a quantum, rejecting zero
    pub fn new(ticks: u32) -> SimResult<Self> {
        NonZeroU32::new(ticks)
            .map(Self)
            .ok_or(SimulationError::InvalidQuantum(ticks))
    }

    /// Coerce an optional caller value, falling back to the default quantum
    pub fn coerce(ticks: Option<u32>) -> Self {
        match ticks {
            None => Self::default(),
            Some(value) => Self::new(value).unwrap_or_else(|_| {
                warn!(quantum = value, "invalid quantum, using default {}", DEFAULT_QUANTUM);
                Self::default()
            }),
        }
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0.get() as Ticks
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(DEFAULT_QUANTUM - 1))
    }
}

impl Serialize for TimeQuantum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0.get())
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = u32::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Priority units added per tick a process has spent in the system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgingFactor(f64);

impl AgingFactor {
    /// Create an aging factor, rejecting negative and non-finite values
    pub fn new(factor: f64) -> SimResult<Self> {
        if factor.is_finite() && factor >= 0.0 {
            Ok(Self(factor))
        } else {
            Err(SimulationError::InvalidAgingFactor(factor))
        }
    }

    #[inline(always)]
    pub const fn get(&self) -> f64 {
        self.0
    }
}

impl Default for AgingFactor {
    fn default() -> Self {
        Self(DEFAULT_AGING_FACTOR)
    }
}

impl<'de> Deserialize<'de> for AgingFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let factor = f64::deserialize(deserializer)?;
        Self::new(factor).map_err(serde::de::Error::custom)
    }
}

/// How the dispatcher treats unknown algorithm identifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Unknown identifiers produce an empty timeline
    #[default]
    Permissive,
    /// Unknown identifiers are reported as errors
    Strict,
}

impl FromStr for DispatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Invalid dispatch policy '{}'. Valid: strict, permissive",
                s
            )),
        }
    }
}
