/*!
 * Workload Files
 * JSON process lists with optional algorithm parameters
 */

use crate::core::errors::{WorkloadError, WorkloadResult};
use crate::process::{sanitize, validate, ProcessSpec, RawProcess};
use crate::scheduler::AgingFactor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Workload as written on disk
///
/// ```json
/// { "algorithm": "rr", "quantum": 2,
///   "processes": [ { "id": "P1", "arrival_time": 0, "burst_time": 5 } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aging_factor: Option<AgingFactor>,
    pub processes: Vec<RawProcess>,
}

impl Workload {
    /// Parse a workload from JSON text
    pub fn from_json(text: &str) -> WorkloadResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a workload file
    pub fn from_path(path: impl AsRef<Path>) -> WorkloadResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WorkloadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "workload loaded");
        Self::from_json(&text)
    }

    /// Sanitized and validated process definitions
    pub fn specs(&self) -> WorkloadResult<Vec<ProcessSpec>> {
        let specs = sanitize(&self.processes);
        validate(&specs)?;
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SimulationError;

    #[test]
    fn test_parse_full_workload() {
        let workload = Workload::from_json(
            r#"{
                "algorithm": "rr",
                "quantum": 3,
                "aging_factor": 0.25,
                "processes": [
                    { "id": "A", "arrival_time": 0, "burst_time": 4, "priority": 2 },
                    { "arrival_time": 1, "burst_time": 2 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(workload.algorithm.as_deref(), Some("rr"));
        assert_eq!(workload.quantum, Some(3));
        assert_eq!(workload.aging_factor.map(|f| f.get()), Some(0.25));

        let specs = workload.specs().unwrap();
        assert_eq!(specs[0], ProcessSpec::new("A", 0, 4).with_priority(2));
        assert_eq!(specs[1], ProcessSpec::new("P2", 1, 2));
    }

    #[test]
    fn test_empty_workload_is_rejected() {
        let workload = Workload::from_json(r#"{ "processes": [] }"#).unwrap();
        assert!(matches!(
            workload.specs(),
            Err(WorkloadError::Invalid(SimulationError::EmptyWorkload))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Workload::from_json("{ processes: "),
            Err(WorkloadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Workload::from_path("/nonexistent/workload.json").unwrap_err();
        assert!(matches!(err, WorkloadError::Io { .. }));
    }
}
