//! Orchestrator - one complete allocation run
//!
//! Wires the pipeline together:
//!
//! ```text
//! 1. Generate a profile (seeded RNG)      generation
//! 2. Simulate simultaneous eating          simulator
//! 3. Score the allocation with Borda       evaluation
//! 4. Bundle everything into a RunReport
//! ```
//!
//! Callers with their own profile skip step 1 via [`run_profile`].
//!
//! # Example
//!
//! ```rust
//! use probabilistic_serial_core_rs::orchestrator::{run, RunConfig};
//!
//! let report = run(&RunConfig::new(3, 3, 12345)).unwrap();
//!
//! assert_eq!(report.utilities.len(), 3);
//! assert!(report.matrix.is_consistent(1e-6));
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::evaluation::{evaluate, EvaluationError};
use crate::generation::{generate_profile, GenerationError};
use crate::models::{AllocationMatrix, PhaseLog, Profile, UtilityVector};
use crate::rng::RngManager;
use crate::simulator::{SimulationError, Simulator, SimulatorConfig};

/// Complete run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Number of agents (rows)
    pub agents: usize,

    /// Number of houses (columns)
    pub houses: usize,

    /// RNG seed for profile generation
    pub rng_seed: u64,

    /// Simulator settings
    pub simulator: SimulatorConfig,
}

impl RunConfig {
    /// Configuration with default simulator settings
    pub fn new(agents: usize, houses: usize, rng_seed: u64) -> Self {
        Self {
            agents,
            houses,
            rng_seed,
            simulator: SimulatorConfig::default(),
        }
    }
}

/// Any failure along the pipeline
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Seed the profile was drawn with (`None` for caller-supplied profiles)
    pub rng_seed: Option<u64>,
    pub profile: Profile,
    pub matrix: AllocationMatrix,
    pub utilities: UtilityVector,
    pub phases: PhaseLog,
    pub elapsed: f64,
}

/// Generate a random profile and run it through the pipeline
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let simulator = Simulator::new(config.simulator.clone())?;

    let mut rng = RngManager::new(config.rng_seed);
    let profile = generate_profile(config.agents, config.houses, &mut rng)?;

    let mut report = run_profile(profile, &simulator)?;
    report.rng_seed = Some(config.rng_seed);
    Ok(report)
}

/// Simulate and evaluate a caller-supplied profile
pub fn run_profile(profile: Profile, simulator: &Simulator) -> Result<RunReport, RunError> {
    let outcome = simulator.run(&profile)?;
    let utilities = evaluate(&outcome.matrix, &profile)?;

    info!(
        agents = profile.agent_count(),
        houses = profile.house_count(),
        phases = outcome.phases.len(),
        welfare = utilities.total(),
        "allocation run complete"
    );

    Ok(RunReport {
        rng_seed: None,
        profile,
        matrix: outcome.matrix,
        utilities,
        phases: outcome.phases,
        elapsed: outcome.elapsed,
    })
}
