/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Simulation errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Use one of: fcfs, sjf, srtf, rr, priority, priority_p, aging, hrrn.")
    )]
    UnknownAlgorithm(String),

    #[error("Workload contains no processes")]
    #[diagnostic(
        code(workload::empty),
        help("Add at least one process before running a simulation.")
    )]
    EmptyWorkload,

    #[error("Process at position {0} has an empty id")]
    #[diagnostic(
        code(workload::empty_process_id),
        help("Give every process a non-empty label such as P1.")
    )]
    EmptyProcessId(usize),

    #[error("Process id '{0}' is used more than once")]
    #[diagnostic(
        code(workload::duplicate_process_id),
        help("Process ids must be unique within a run.")
    )]
    DuplicateProcessId(ProcessId),

    #[error("Process id '{0}' is reserved")]
    #[diagnostic(
        code(workload::reserved_process_id),
        help("IDLE marks ticks with no eligible process and cannot label a process.")
    )]
    ReservedProcessId(ProcessId),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("The round robin quantum must be a positive number of ticks.")
    )]
    InvalidQuantum(u32),

    #[error("Invalid aging factor: {0}")]
    #[diagnostic(
        code(scheduler::invalid_aging_factor),
        help("The aging factor must be a finite, non-negative number.")
    )]
    InvalidAgingFactor(f64),
}

/// Workload loading errors
///
/// Not serializable: wraps I/O and parser errors.
#[derive(Error, Debug, Diagnostic)]
pub enum WorkloadError {
    #[error("Failed to read workload file {path}")]
    #[diagnostic(
        code(workload::io_error),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed workload JSON")]
    #[diagnostic(
        code(workload::parse_error),
        help("Expected an object with a \"processes\" array.")
    )]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] SimulationError),
}

/// Workload operation result
pub type WorkloadResult<T> = Result<T, WorkloadError>;
