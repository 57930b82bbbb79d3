//! Allocation simulator (simultaneous eating)
//!
//! Turns a preference profile into the probabilistic serial allocation.
//!
//! - **engine**: the event loop, float runs, [`Simulator`]
//! - **exact**: the same loop on exact fractions
//! - **config**: tolerance and arithmetic selection
//!
//! # Critical Invariants
//!
//! 1. No randomness: same profile → same matrix
//! 2. Every phase exhausts at least one house (≤ `H` phases)
//! 3. Supplies never go negative; float residue is snapped to zero

pub mod config;
pub mod engine;
pub mod exact;

pub use config::{Arithmetic, SimulatorConfig, DEFAULT_TOLERANCE};
pub use engine::{simulate, SimulationError, SimulationOutcome, Simulator};
pub use exact::{simulate_exact, ExactMatrix, ExactOutcome};
