//! Probabilistic Serial Core - Rust Engine
//!
//! Fractional house allocation via the simultaneous eating algorithm, with
//! Borda-based expected utility scoring.
//!
//! # Architecture
//!
//! - **core**: Clock and arithmetic (float and exact fractions)
//! - **models**: Domain types (Profile, AllocationMatrix, UtilityVector, PhaseLog)
//! - **simulator**: The eating loop (THE core computation)
//! - **evaluation**: Borda utilities
//! - **generation**: Random and enumerated profiles
//! - **orchestrator**: Generation → simulation → evaluation in one call
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Every ranking is a permutation of `0..H`, checked once at construction
//! 2. The simulator is deterministic; randomness only enters via a seeded RNG
//! 3. Every house is fully allocated (column sums are 1)
//!
//! # Example
//!
//! ```rust
//! use probabilistic_serial_core_rs::{evaluate, simulate, Profile};
//!
//! let profile = Profile::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
//! let matrix = simulate(&profile).unwrap();
//! let utilities = evaluate(&matrix, &profile).unwrap();
//!
//! assert_eq!(matrix.rows(), &[vec![1.0, 0.0], vec![0.0, 1.0]]);
//! assert_eq!(utilities.as_slice(), &[1.0, 1.0]);
//! ```

// Module declarations
pub mod core;
pub mod evaluation;
pub mod generation;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod simulator;

// Re-exports for convenience
pub use evaluation::{borda_value, evaluate, EvaluationError};
pub use generation::{all_rankings, generate_profile, GenerationError, ProfileEnumerator};
pub use models::{
    allocation::{AllocationMatrix, MatrixError},
    phase::{EatingPhase, HouseConsumption, PhaseLog},
    profile::{Profile, ProfileError},
    utility::UtilityVector,
};
pub use orchestrator::{run, run_profile, RunConfig, RunError, RunReport};
pub use rng::RngManager;
pub use simulator::{
    simulate, simulate_exact, Arithmetic, ExactMatrix, ExactOutcome, SimulationError,
    SimulationOutcome, Simulator, SimulatorConfig,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn probabilistic_serial_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::functions::probability_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::expected_utilities, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::generate_profile, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::generate_preferences, m)?)?;
    Ok(())
}
