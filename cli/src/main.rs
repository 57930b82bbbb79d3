//! ps-sim - Probabilistic serial allocation from the command line
//!
//! Draws a random profile for the given number of agents and houses, runs
//! the simultaneous eating algorithm, and prints each agent's expected Borda
//! utility.
//!
//! ```text
//! $ ps-sim 2 2 --seed 42 --show-matrix
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to watch the eating phases on stderr.

mod output;

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use probabilistic_serial_core_rs::{run, Arithmetic, RunConfig, RunError, SimulatorConfig};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use output::{render, OutputFormat, RenderOptions};

/// Probabilistic serial allocation with Borda utilities
#[derive(Parser, Debug)]
#[command(name = "ps-sim")]
#[command(about = "Simulate the probabilistic serial mechanism on a random profile")]
struct Args {
    /// Number of agents
    agents: usize,

    /// Number of houses
    houses: usize,

    /// Random seed for profile generation (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Use exact fractions instead of floating point
    #[arg(long)]
    exact: bool,

    /// Supply at or below this counts as eaten (floating point only)
    #[arg(long, default_value_t = probabilistic_serial_core_rs::simulator::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the allocation matrix
    #[arg(long)]
    show_matrix: bool,

    /// Also print the generated profile
    #[arg(long)]
    show_profile: bool,

    /// Log eating phases to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Run(#[from] RunError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn execute(args: &Args) -> Result<String, CliError> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, agents = args.agents, houses = args.houses, "starting run");

    let config = RunConfig {
        agents: args.agents,
        houses: args.houses,
        rng_seed: seed,
        simulator: SimulatorConfig {
            tolerance: args.tolerance,
            arithmetic: if args.exact {
                Arithmetic::Exact
            } else {
                Arithmetic::Float
            },
            record_phases: args.verbose || args.format == OutputFormat::Json,
        },
    };

    let report = run(&config)?;

    let options = RenderOptions {
        format: args.format,
        show_matrix: args.show_matrix,
        show_profile: args.show_profile,
    };
    Ok(render(&report, &options)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match execute(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
