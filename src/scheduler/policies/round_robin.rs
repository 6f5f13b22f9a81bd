/*!
 * Round Robin
 * Cyclic FIFO ready queue with a fixed time quantum
 */

use crate::process::Process;
use crate::scheduler::engine::Run;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::types::TimeQuantum;
use std::collections::VecDeque;
use tracing::trace;

/// Arrival feed: process indices sorted by arrival, then input order
struct Arrivals {
    order: Vec<usize>,
    cursor: usize,
}

impl Arrivals {
    fn new(processes: &[Process]) -> Self {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, i));
        Self { order, cursor: 0 }
    }

    /// Enqueue every process that has arrived by the current tick
    fn admit(&mut self, run: &Run<'_>, queue: &mut VecDeque<usize>) {
        while let Some(&index) = self.order.get(self.cursor) {
            if run.process(index).arrival_time > run.now() {
                break;
            }
            trace!(tick = run.now(), process = %run.process(index).id, "enqueued");
            queue.push_back(index);
            self.cursor += 1;
        }
    }
}

/// Round robin
///
/// The head of the queue runs for at most one quantum. Processes that
/// arrive during that slice are enqueued before the preempted process
/// rejoins the tail.
pub fn round_robin(processes: &mut [Process], quantum: TimeQuantum) -> Timeline {
    let mut run = Run::new(processes);
    let mut arrivals = Arrivals::new(run.processes());
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(arrivals.order.len());

    arrivals.admit(&run, &mut queue);

    while !run.is_done() {
        let Some(index) = queue.pop_front() else {
            run.idle_tick();
            arrivals.admit(&run, &mut queue);
            continue;
        };

        let finished = run.execute(index, quantum.ticks());
        arrivals.admit(&run, &mut queue);
        if !finished {
            queue.push_back(index);
        }
    }

    run.finish()
}
