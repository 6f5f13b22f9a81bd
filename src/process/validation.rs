/*!
 * Process Input Validation
 * Coercion of raw user input and workload-level consistency checks
 */

use super::types::ProcessSpec;
use crate::core::errors::SimulationError;
use crate::core::types::{Priority, ProcessId, SimResult, Ticks};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Process definition as typed by a user; every field may be missing or out of range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawProcess {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<i64>,
    #[serde(default)]
    pub burst_time: Option<i64>,
    #[serde(default)]
    pub priority: Option<i64>,
}

/// Coerce raw input into engine-safe process definitions
///
/// Missing ids become `P<n>` (1-based input position), arrival is clamped
/// to `>= 0`, burst to `>= 1` and priority to `>= 0`. Coercions are logged,
/// never reported as errors.
pub fn sanitize(raw: &[RawProcess]) -> Vec<ProcessSpec> {
    raw.iter()
        .enumerate()
        .map(|(index, input)| {
            let id = match input.id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => ProcessId::new(id),
                _ => ProcessId::numbered(index),
            };

            let arrival_time = clamp_ticks(input.arrival_time, 0, 0);
            let burst_time = clamp_ticks(input.burst_time, 1, 1);
            let priority = clamp_ticks(input.priority, 0, 0).min(Priority::MAX as Ticks) as Priority;

            if input.arrival_time.is_some_and(|v| v < 0)
                || input.burst_time.is_some_and(|v| v < 1)
                || input.priority.is_some_and(|v| v < 0)
            {
                warn!(
                    process = %id,
                    arrival_time,
                    burst_time,
                    priority,
                    "coerced out-of-range process input"
                );
            }

            ProcessSpec {
                id,
                arrival_time,
                burst_time,
                priority,
            }
        })
        .collect()
}

fn clamp_ticks(value: Option<i64>, min: i64, default: Ticks) -> Ticks {
    match value {
        Some(v) => v.max(min) as Ticks,
        None => default,
    }
}

/// Validate a workload before it reaches the engine
///
/// Rejects empty workloads, empty or reserved ids and duplicate ids.
pub fn validate(specs: &[ProcessSpec]) -> SimResult<()> {
    if specs.is_empty() {
        return Err(SimulationError::EmptyWorkload);
    }

    let mut seen: HashSet<&str, RandomState> =
        HashSet::with_capacity_and_hasher(specs.len(), RandomState::new());

    for (index, spec) in specs.iter().enumerate() {
        if spec.id.is_empty() {
            return Err(SimulationError::EmptyProcessId(index));
        }
        if spec.id.is_reserved() {
            return Err(SimulationError::ReservedProcessId(spec.id.clone()));
        }
        if !seen.insert(spec.id.as_str()) {
            return Err(SimulationError::DuplicateProcessId(spec.id.clone()));
        }
    }

    Ok(())
}
