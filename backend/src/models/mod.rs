//! Domain models for the probabilistic serial simulator

pub mod allocation;
pub mod phase;
pub mod profile;
pub mod utility;

// Re-exports
pub use allocation::{AllocationMatrix, MatrixError};
pub use phase::{EatingPhase, HouseConsumption, PhaseLog};
pub use profile::{Profile, ProfileError};
pub use utility::UtilityVector;
