//! Exact-arithmetic simulation
//!
//! Runs the same eating loop as the float engine on [`Fraction`] values.
//! Supplies hit zero exactly, so no tolerance is involved and no residue can
//! build up across phases. The price is bounded range: long runs with many
//! distinct eater counts can overflow `i128`, which is reported as
//! [`SimulationError::ArithmeticOverflow`] instead of wrapping.

use serde::Serialize;

use crate::core::Fraction;
use crate::models::{AllocationMatrix, PhaseLog, Profile};

use super::engine::{run_eating, SimulationError};

/// Allocation matrix with exact entries
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::core::Fraction;
/// use probabilistic_serial_core_rs::{simulate_exact, Profile};
///
/// let profile = Profile::new(vec![vec![0, 1, 2]; 3]).unwrap();
/// let outcome = simulate_exact(&profile).unwrap();
///
/// let third = Fraction::new(1, 3).unwrap();
/// assert_eq!(outcome.matrix.get(2, 0), third);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExactMatrix {
    rows: Vec<Vec<Fraction>>,
}

impl ExactMatrix {
    pub fn agent_count(&self) -> usize {
        self.rows.len()
    }

    pub fn house_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// # Panics
    /// Panics if either index is out of range
    pub fn get(&self, agent: usize, house: usize) -> Fraction {
        self.rows[agent][house]
    }

    pub fn rows(&self) -> &[Vec<Fraction>] {
        &self.rows
    }

    /// Exact row sum; `None` on overflow
    pub fn row_sum(&self, agent: usize) -> Option<Fraction> {
        self.rows[agent]
            .iter()
            .try_fold(Fraction::ZERO, |acc, &share| acc.checked_add(share))
    }

    /// Exact column sum; `None` on overflow
    pub fn column_sum(&self, house: usize) -> Option<Fraction> {
        self.rows
            .iter()
            .try_fold(Fraction::ZERO, |acc, row| acc.checked_add(row[house]))
    }

    /// Round every entry to the nearest `f64`
    pub fn to_f64(&self) -> AllocationMatrix {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|share| share.to_f64()).collect())
            .collect();
        AllocationMatrix::from_parts(rows, self.house_count())
    }
}

/// Result of an exact run
#[derive(Debug, Clone, PartialEq)]
pub struct ExactOutcome {
    pub matrix: ExactMatrix,

    /// Phase record; times are rounded to `f64` for reporting
    pub phases: PhaseLog,

    /// Exact total time (`H / A`)
    pub elapsed: Fraction,
}

/// Compute the probabilistic serial allocation exactly
pub fn simulate_exact(profile: &Profile) -> Result<ExactOutcome, SimulationError> {
    run_exact(profile, true)
}

pub(crate) fn run_exact(
    profile: &Profile,
    record_phases: bool,
) -> Result<ExactOutcome, SimulationError> {
    // The tolerance is ignored by Fraction::snap
    let run = run_eating::<Fraction>(profile, 0.0, record_phases)?;

    Ok(ExactOutcome {
        matrix: ExactMatrix { rows: run.rows },
        phases: run.phases,
        elapsed: run.elapsed,
    })
}
