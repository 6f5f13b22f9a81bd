/*!
 * Scheduling Policies
 * One simulation procedure per algorithm
 */

mod hrrn;
mod non_preemptive;
mod preemptive;
mod round_robin;

pub use hrrn::hrrn;
pub use non_preemptive::{fcfs, priority, sjf};
pub use preemptive::{aging, priority_preemptive, srtf};
pub use round_robin::round_robin;
