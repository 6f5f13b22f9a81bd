/*!
 * sched-sim - Command Line Entry Point
 *
 * Loads a JSON workload and prints:
 * - Gantt chart of the allocation timeline
 * - Per-process summary table and averages
 * - Optional side-by-side comparison of every algorithm
 */

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use cpu_sched_sim::{
    init_tracing, render_comparison, render_gantt, render_table, AgingFactor, Algorithm,
    DispatchPolicy, Dispatcher, SimConfig, Simulation, SimulationReport, TimeQuantum, Workload,
};

/// Characters per tick in the Gantt chart
const GANTT_SCALE: usize = 3;

/// sched-sim: CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(version)]
#[command(about = "Simulate CPU scheduling algorithms over a JSON workload", long_about = None)]
struct Cli {
    /// Workload file
    workload: PathBuf,

    /// Algorithm id (fcfs, sjf, srtf, rr, priority, priority_p, aging, hrrn)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Round robin time quantum in ticks
    #[arg(short, long)]
    quantum: Option<u32>,

    /// Aging factor for the aging algorithm
    #[arg(long)]
    aging_factor: Option<f64>,

    /// Print the run as JSON
    #[arg(long)]
    json: bool,

    /// Run every algorithm and compare averages
    #[arg(long)]
    compare: bool,

    /// Fail on unknown algorithm ids instead of producing an empty schedule
    #[arg(long)]
    strict: bool,

    /// Print the algorithm description after the results
    #[arg(long)]
    info: bool,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    #[serde(flatten)]
    simulation: &'a Simulation,
    report: SimulationReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = SimConfig::from_env();

    init_tracing(config.trace_json);

    let workload = Workload::from_path(&cli.workload)?;
    let specs = workload.specs()?;
    info!(path = %cli.workload.display(), processes = specs.len(), "workload ready");

    // CLI flags win over the workload file, which wins over the environment
    if cli.strict {
        config.dispatch_policy = DispatchPolicy::Strict;
    }
    if let Some(ticks) = cli.quantum.or(workload.quantum) {
        config.quantum = TimeQuantum::coerce(Some(ticks));
    }
    if let Some(factor) = cli.aging_factor {
        config.aging_factor = AgingFactor::new(factor)?;
    } else if let Some(factor) = workload.aging_factor {
        config.aging_factor = factor;
    }
    let dispatcher = Dispatcher::from_config(&config);

    if cli.compare {
        let runs = dispatcher.compare(&specs);
        if cli.json {
            let outputs: Vec<RunOutput<'_>> = runs
                .iter()
                .map(|simulation| RunOutput {
                    simulation,
                    report: simulation.report(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&outputs).into_diagnostic()?);
        } else {
            print!("{}", render_comparison(&runs));
        }
        return Ok(());
    }

    let algorithm_id = cli
        .algorithm
        .as_deref()
        .or(workload.algorithm.as_deref())
        .unwrap_or(Algorithm::Fcfs.as_str());

    let algorithm = match algorithm_id.parse::<Algorithm>() {
        Ok(algorithm) => algorithm,
        Err(e) if dispatcher.policy() == DispatchPolicy::Strict => return Err(e.into()),
        Err(e) => {
            warn!(error = %e, "no schedule produced");
            println!("No schedule produced for '{algorithm_id}'");
            return Ok(());
        }
    };

    let simulation = dispatcher.run_fresh(algorithm, &specs);
    let report = simulation.report();

    if cli.json {
        let output = RunOutput {
            simulation: &simulation,
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        return Ok(());
    }

    println!("{}", algorithm.info().name);
    println!();
    println!("{}", render_gantt(&simulation.timeline, GANTT_SCALE));
    println!();
    println!("{}", render_table(&report));
    if cli.info {
        println!();
        println!("{}", algorithm.info());
    }

    Ok(())
}
