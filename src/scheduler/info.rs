/*!
 * Algorithm Catalog
 * Static descriptive information for each scheduling algorithm
 */

use super::types::Algorithm;
use serde::Serialize;
use std::fmt;

/// Human-facing description of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub preemptive: bool,
    pub formula: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

impl Algorithm {
    /// Catalog entry for this algorithm
    pub const fn info(&self) -> &'static AlgorithmInfo {
        match self {
            Self::Fcfs => &FCFS,
            Self::Sjf => &SJF,
            Self::Srtf => &SRTF,
            Self::RoundRobin => &ROUND_ROBIN,
            Self::Priority => &PRIORITY,
            Self::PriorityPreemptive => &PRIORITY_PREEMPTIVE,
            Self::Aging => &AGING,
            Self::Hrrn => &HRRN,
        }
    }
}

const FCFS: AlgorithmInfo = AlgorithmInfo {
    name: "First Come First Serve (FCFS)",
    description: "Processes run to completion in the order they arrive.",
    preemptive: false,
    formula: "Waiting Time = Start Time - Arrival Time",
    advantages: &["Easy to understand", "No starvation"],
    disadvantages: &["High average waiting time", "Short jobs wait behind long ones"],
};

const SJF: AlgorithmInfo = AlgorithmInfo {
    name: "Shortest Job First (SJF)",
    description: "When the CPU is free, the ready process with the shortest burst runs to completion.",
    preemptive: false,
    formula: "Average Waiting Time = Σ(Waiting Time) / n",
    advantages: &["Minimizes average waiting time", "Suits batch workloads"],
    disadvantages: &["Needs burst times in advance", "Long jobs may starve"],
};

const SRTF: AlgorithmInfo = AlgorithmInfo {
    name: "Shortest Remaining Time First (SRTF)",
    description: "Preemptive SJF: every tick the ready process with the least remaining time runs.",
    preemptive: true,
    formula: "Response Time = First CPU Allocation - Arrival Time",
    advantages: &["Better responsiveness than SJF", "High throughput"],
    disadvantages: &["More context switches", "Needs burst estimates"],
};

const ROUND_ROBIN: AlgorithmInfo = AlgorithmInfo {
    name: "Round Robin (RR)",
    description: "Processes take turns in FIFO order, each for at most one time quantum.",
    preemptive: true,
    formula: "Turnaround Time = Completion Time - Arrival Time",
    advantages: &["No starvation", "Good response time"],
    disadvantages: &["Context switch overhead", "Throughput drops with small quanta"],
};

const PRIORITY: AlgorithmInfo = AlgorithmInfo {
    name: "Priority Scheduling (Non-Preemptive)",
    description: "When the CPU is free, the ready process with the lowest priority value runs to completion.",
    preemptive: false,
    formula: "Priority = Assigned Value (0 = highest)",
    advantages: &["Critical work runs first", "Easy to implement"],
    disadvantages: &["Low-priority processes may starve", "Priority inversion"],
};

const PRIORITY_PREEMPTIVE: AlgorithmInfo = AlgorithmInfo {
    name: "Priority Scheduling (Preemptive)",
    description: "Every tick the ready process with the lowest priority value runs, interrupting the current one.",
    preemptive: true,
    formula: "New Priority < Current Priority → Preemption",
    advantages: &["Responsive to urgent work", "Fits real-time style workloads"],
    disadvantages: &["More context switches", "Low-priority processes may starve"],
};

const AGING: AlgorithmInfo = AlgorithmInfo {
    name: "Aging",
    description: "Preemptive priority where each process's effective priority is adjusted by the time it has spent in the system.",
    preemptive: true,
    formula: "Effective Priority = Priority + (Now - Arrival) × Aging Factor",
    advantages: &["Dynamic priority adjustment", "Time in system influences selection"],
    disadvantages: &["Aging factor needs tuning", "Unfair when badly tuned"],
};

const HRRN: AlgorithmInfo = AlgorithmInfo {
    name: "Highest Response Ratio Next (HRRN)",
    description: "When the CPU is free, the ready process with the highest response ratio runs to completion.",
    preemptive: false,
    formula: "Response Ratio = (Waiting Time + Burst Time) / Burst Time",
    advantages: &["Favors short jobs", "Long waiters eventually win"],
    disadvantages: &["Needs burst times in advance", "Not suited to real-time systems"],
};

impl fmt::Display for AlgorithmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(
            f,
            "  Preemptive: {}",
            if self.preemptive { "yes" } else { "no" }
        )?;
        writeln!(f, "  Formula: {}", self.formula)?;
        writeln!(f, "  Advantages: {}", self.advantages.join("; "))?;
        write!(f, "  Disadvantages: {}", self.disadvantages.join("; "))
    }
}
