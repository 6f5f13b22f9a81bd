/*!
 * CPU Scheduling Simulator Library
 * Discrete-time simulation of classic uniprocessor scheduling algorithms
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use config::SimConfig;
pub use crate::core::{ProcessId, SimResult, SimulationError, Ticks, WorkloadError, WorkloadResult};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessSpec, ProcessState};
pub use report::{render_comparison, render_gantt, render_table, SimulationReport};
pub use scheduler::{
    simulate, AgingFactor, Algorithm, AllocationEntry, DispatchPolicy, Dispatcher, Simulation,
    TimeQuantum, Timeline,
};
pub use workload::Workload;
