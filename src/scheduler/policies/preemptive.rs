/*!
 * Preemptive Policies
 * SRTF, preemptive Priority, and Aging: selection re-evaluated every tick
 */

use crate::core::types::Ticks;
use crate::process::Process;
use crate::scheduler::engine::{simulate_by, Granularity};
use crate::scheduler::timeline::Timeline;
use crate::scheduler::types::AgingFactor;

/// Shortest remaining time first
pub fn srtf(processes: &mut [Process]) -> Timeline {
    simulate_by(processes, Granularity::Tick, |_, a, b| {
        a.remaining_time.cmp(&b.remaining_time)
    })
}

/// Preemptive priority scheduling; lower value runs first
pub fn priority_preemptive(processes: &mut [Process]) -> Timeline {
    simulate_by(processes, Granularity::Tick, |_, a, b| {
        a.priority.cmp(&b.priority)
    })
}

/// Priority with aging: the smallest effective priority runs each tick
pub fn aging(processes: &mut [Process], factor: AgingFactor) -> Timeline {
    simulate_by(processes, Granularity::Tick, |now, a, b| {
        effective_priority(a, now, factor).total_cmp(&effective_priority(b, now, factor))
    })
}

/// `priority + (now - arrival) * factor`, recomputed per tick
#[inline]
fn effective_priority(process: &Process, now: Ticks, factor: AgingFactor) -> f64 {
    process.priority as f64 + (now - process.arrival_time) as f64 * factor.get()
}
