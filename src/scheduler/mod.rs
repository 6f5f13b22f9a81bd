/*!
 * Scheduler Module
 * Discrete-time simulation of CPU scheduling algorithms
 */

mod engine;

pub mod dispatcher;
pub mod info;
pub mod policies;
pub mod timeline;
pub mod types;

// Re-export public API
pub use dispatcher::{simulate, Dispatcher, Simulation};
pub use info::AlgorithmInfo;
pub use timeline::{AllocationEntry, Color, Timeline, IDLE_COLOR, PALETTE};
pub use types::{
    AgingFactor, Algorithm, DispatchPolicy, TimeQuantum, DEFAULT_AGING_FACTOR, DEFAULT_QUANTUM,
};
