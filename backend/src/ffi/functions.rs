//! PyO3 function wrappers
//!
//! Errors cross the boundary as `ValueError` carrying the Rust message.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::evaluation::evaluate;
use crate::generation::{all_rankings, generate_profile as generate_rust_profile};
use crate::models::{AllocationMatrix, Profile};
use crate::rng::RngManager;
use crate::simulator::{simulate, simulate_exact};

fn value_error<E: std::fmt::Display>(err: E) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn parse_profile(profile: Vec<Vec<usize>>) -> PyResult<Profile> {
    Profile::new(profile).map_err(value_error)
}

/// Probabilistic serial allocation of `profile` (list of rankings)
///
/// # Errors
///
/// Raises ValueError if a ranking is not a permutation of `0..H`, the
/// rankings differ in length, or the profile is empty.
#[pyfunction]
#[pyo3(signature = (profile, exact = false))]
pub fn probability_matrix(profile: Vec<Vec<usize>>, exact: bool) -> PyResult<Vec<Vec<f64>>> {
    let profile = parse_profile(profile)?;

    let matrix = if exact {
        simulate_exact(&profile).map_err(value_error)?.matrix.to_f64()
    } else {
        simulate(&profile).map_err(value_error)?
    };

    Ok(matrix.into_rows())
}

/// Expected Borda utility per agent
#[pyfunction]
pub fn expected_utilities(matrix: Vec<Vec<f64>>, profile: Vec<Vec<usize>>) -> PyResult<Vec<f64>> {
    let profile = parse_profile(profile)?;
    let matrix = AllocationMatrix::from_rows(matrix).map_err(value_error)?;

    let utilities = evaluate(&matrix, &profile).map_err(value_error)?;
    Ok(utilities.into_vec())
}

/// Random profile of `agent_amt` agents over `house_amt` houses
#[pyfunction]
#[pyo3(signature = (agent_amt, house_amt, seed = 0))]
pub fn generate_profile(agent_amt: usize, house_amt: usize, seed: u64) -> PyResult<Vec<Vec<usize>>> {
    let mut rng = RngManager::new(seed);
    let profile = generate_rust_profile(agent_amt, house_amt, &mut rng).map_err(value_error)?;
    Ok(profile.into_rankings())
}

/// Every ranking of `house_amt` houses, lexicographic
#[pyfunction]
pub fn generate_preferences(house_amt: usize) -> PyResult<Vec<Vec<usize>>> {
    all_rankings(house_amt).map_err(value_error)
}
