/*!
 * Highest Response Ratio Next
 * Non-preemptive selection by (waiting + burst) / burst
 */

use crate::core::types::Ticks;
use crate::process::Process;
use crate::scheduler::engine::Run;
use crate::scheduler::timeline::Timeline;
use std::cmp::Ordering;

/// Response ratio of a ready process at a given tick
///
/// Kept as an exact fraction; comparisons cross-multiply instead of
/// dividing so equal ratios tie exactly.
#[derive(Debug, Clone, Copy)]
struct ResponseRatio {
    numerator: Ticks,
    burst: Ticks,
}

impl ResponseRatio {
    fn at(process: &Process, now: Ticks) -> Self {
        Self {
            numerator: now - process.arrival_time + process.burst_time,
            burst: process.burst_time,
        }
    }

    #[cfg(test)]
    fn value(&self) -> f64 {
        self.numerator as f64 / self.burst as f64
    }
}

impl PartialEq for ResponseRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ResponseRatio {}

impl Ord for ResponseRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator as u128 * other.burst as u128)
            .cmp(&(other.numerator as u128 * self.burst as u128))
    }
}

impl PartialOrd for ResponseRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Highest response ratio next
///
/// The CPU advances one tick at a time, but a process that holds the CPU
/// keeps it until its burst is exhausted. Ratios are recomputed every time
/// the CPU becomes free, when the waiting time `now - arrival` is exact.
pub fn hrrn(processes: &mut [Process]) -> Timeline {
    let mut run = Run::new(processes);
    let mut current: Option<usize> = None;

    while !run.is_done() {
        let selected = current.or_else(|| {
            // Highest ratio first
            run.pick_by(|now, a, b| ResponseRatio::at(b, now).cmp(&ResponseRatio::at(a, now)))
        });

        let Some(index) = selected else {
            run.idle_tick();
            continue;
        };

        current = if run.execute(index, 1) {
            None
        } else {
            Some(index)
        };
    }

    run.finish()
}
