/*!
 * Scheduling Simulator - Command Line Entry Point
 *
 * Usage: sched-sim [ALGORITHM] [WORKLOAD.json]
 *
 * Runs one simulation and prints the result as JSON on stdout. Without a
 * workload file the built-in eight-process sample is used.
 */

use cpu_sched_sim::core::limits::DEFAULT_TIME_QUANTUM;
use cpu_sched_sim::core::serialization::to_json_pretty;
use cpu_sched_sim::{
    init_tracing, Algorithm, SimulationConfig, SimulationError, Simulator, Tick, Workload,
};
use miette::Result;
use tracing::info;

const ENV_TIME_QUANTUM: &str = "SIM_TIME_QUANTUM";

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let cli_algorithm = args.next().map(|raw| raw.parse::<Algorithm>()).transpose()?;
    let workload = match args.next() {
        Some(path) => {
            info!(path = %path, "Loading workload");
            Workload::from_path(&path)?
        }
        None => Workload::sample(),
    };
    workload.validate()?;

    let algorithm = cli_algorithm
        .or(workload.algorithm)
        .unwrap_or(Algorithm::Fcfs);
    let quantum = match workload.time_quantum {
        Some(quantum) => quantum,
        None => quantum_from_env()?,
    };
    let config = SimulationConfig::from_env()?;

    info!(
        algorithm = %algorithm,
        label = algorithm.label(),
        processes = workload.processes.len(),
        quantum,
        "Starting simulation"
    );

    let result = Simulator::new(config).run(&workload.processes, algorithm, Some(quantum));

    let metrics = &result.overall_metrics;
    info!(
        "{}: total={} avg_tat={:.2} avg_wt={:.2} avg_rt={:.2} cpu={:.1}% throughput={:.3}",
        algorithm.label(),
        metrics.total_execution_time,
        metrics.average_turnaround_time,
        metrics.average_waiting_time,
        metrics.average_response_time,
        metrics.cpu_utilization,
        metrics.throughput
    );

    let json = to_json_pretty(&result).map_err(SimulationError::from)?;
    println!("{}", json);
    Ok(())
}

fn quantum_from_env() -> Result<Tick, SimulationError> {
    match std::env::var(ENV_TIME_QUANTUM) {
        Ok(raw) => raw.trim().parse::<Tick>().map_err(|_| {
            SimulationError::Configuration(
                format!("{} has invalid value '{}'", ENV_TIME_QUANTUM, raw).into(),
            )
        }),
        Err(_) => Ok(DEFAULT_TIME_QUANTUM),
    }
}
