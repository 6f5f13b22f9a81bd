/*!
 * Allocation Timeline
 * Ordered, contiguous Gantt sequence of CPU assignments
 */

use crate::core::types::{ProcessId, Ticks};
use serde::Serialize;
use std::fmt;

/// Display colors cycled by process input index
pub const PALETTE: [Color; 6] = [
    Color("#4361ee"),
    Color("#3a0ca3"),
    Color("#4cc9f0"),
    Color("#f72585"),
    Color("#7209b7"),
    Color("#560bad"),
];

/// Display color of IDLE entries
pub const IDLE_COLOR: Color = Color("#cccccc");

/// Hex display color attached to timeline entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    /// Deterministic color for the process at `index` in input order
    #[inline]
    pub const fn for_index(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One contiguous CPU assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocationEntry {
    pub process_id: ProcessId,
    pub start_time: Ticks,
    pub end_time: Ticks,
    pub color: Color,
    /// Input index of the process; `None` for IDLE
    #[serde(skip)]
    pub process_index: Option<usize>,
}

impl AllocationEntry {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_index.is_none()
    }

    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }

    /// Whether `tick` falls inside `[start_time, end_time)`
    #[inline]
    pub fn covers(&self, tick: Ticks) -> bool {
        self.start_time <= tick && tick < self.end_time
    }
}

impl fmt::Display for AllocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.process_id, self.start_time, self.end_time)
    }
}

/// Allocation sequence produced by one simulation run
///
/// Entries are appended only at the current end of the timeline, so the
/// sequence is contiguous from tick 0. A run extending the previous entry's
/// occupant is merged into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<AllocationEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ticks` ticks of CPU time for the process at `index`
    pub(crate) fn push_process(&mut self, index: usize, id: &ProcessId, start: Ticks, ticks: Ticks) {
        self.push(Some(index), start, ticks, || id.clone());
    }

    /// Record `ticks` ticks with no eligible process
    pub(crate) fn push_idle(&mut self, start: Ticks, ticks: Ticks) {
        self.push(None, start, ticks, ProcessId::idle);
    }

    fn push(
        &mut self,
        index: Option<usize>,
        start: Ticks,
        ticks: Ticks,
        label: impl FnOnce() -> ProcessId,
    ) {
        debug_assert!(ticks > 0, "empty allocation at tick {start}");
        debug_assert_eq!(start, self.end_time(), "allocation must extend the timeline");

        if let Some(last) = self.entries.last_mut() {
            if last.process_index == index && last.end_time == start {
                last.end_time += ticks;
                return;
            }
        }

        self.entries.push(AllocationEntry {
            process_id: label(),
            start_time: start,
            end_time: start + ticks,
            color: index.map_or(IDLE_COLOR, Color::for_index),
            process_index: index,
        });
    }

    #[inline]
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocationEntry> {
        self.entries.iter()
    }

    /// Tick at which the last entry closes (0 for an empty timeline)
    pub fn end_time(&self) -> Ticks {
        self.entries.last().map_or(0, |e| e.end_time)
    }

    /// Ticks spent running processes
    pub fn busy_time(&self) -> Ticks {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(AllocationEntry::duration)
            .sum()
    }

    /// Ticks spent idle
    pub fn idle_time(&self) -> Ticks {
        self.end_time() - self.busy_time()
    }

    /// Entry covering `tick`, if the timeline reaches it
    pub fn occupant_at(&self, tick: Ticks) -> Option<&AllocationEntry> {
        let pos = self.entries.partition_point(|e| e.end_time <= tick);
        self.entries.get(pos).filter(|e| e.covers(tick))
    }

    /// Number of times the CPU passes from one process to a different one
    ///
    /// Idle gaps between two runs of the same process do not count.
    pub fn context_switches(&self) -> usize {
        let mut running = self.entries.iter().filter_map(|e| e.process_index);
        let Some(mut previous) = running.next() else {
            return 0;
        };
        let mut switches = 0;
        for index in running {
            if index != previous {
                switches += 1;
                previous = index;
            }
        }
        switches
    }

    /// Entries belonging to the process with input index `index`
    pub fn entries_for(&self, index: usize) -> impl Iterator<Item = &AllocationEntry> {
        self.entries
            .iter()
            .filter(move |e| e.process_index == Some(index))
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
