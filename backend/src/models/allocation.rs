//! Allocation matrix model
//!
//! `A agents × H houses` matrix of fractional shares. Entry `(i, h)` is the
//! probability that agent `i` ends up with house `h`.
//!
//! # Critical Invariants
//!
//! 1. **Column sums**: every house is fully handed out, `sum_i A[i][h] == 1`
//! 2. **Row sums**: every agent eats for the whole run, so each row sums to
//!    `H / A` (exactly `1` when agents and houses are equally many)
//! 3. **Bounds**: every entry is in `[0, 1]`
//!
//! The simulator produces matrices that satisfy these within floating
//! tolerance. Hand-built matrices (via [`AllocationMatrix::from_rows`]) are
//! only checked for shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a matrix from raw rows
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Matrix has no rows")]
    NoRows,

    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Fractional allocation of houses to agents
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::AllocationMatrix;
///
/// let matrix = AllocationMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.5, 0.5]]).unwrap();
/// assert_eq!(matrix.get(0, 1), 0.5);
/// assert!((matrix.column_sum(0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AllocationMatrix {
    rows: Vec<Vec<f64>>,
    house_count: usize,
}

impl AllocationMatrix {
    /// All-zero matrix of the given shape
    pub fn zeros(agent_count: usize, house_count: usize) -> Self {
        Self {
            rows: vec![vec![0.0; house_count]; agent_count],
            house_count,
        }
    }

    /// Build a matrix from explicit rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let house_count = rows.first().map(Vec::len).ok_or(MatrixError::NoRows)?;

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != house_count)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: house_count,
                found,
            });
        }

        Ok(Self { rows, house_count })
    }

    /// Number of rows
    pub fn agent_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn house_count(&self) -> usize {
        self.house_count
    }

    /// Share of `house` held by `agent`
    ///
    /// # Panics
    /// Panics if either index is out of range
    pub fn get(&self, agent: usize, house: usize) -> f64 {
        self.rows[agent][house]
    }

    /// One agent's row
    pub fn row(&self, agent: usize) -> &[f64] {
        &self.rows[agent]
    }

    /// All rows in agent order
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sum of an agent's row
    pub fn row_sum(&self, agent: usize) -> f64 {
        self.rows[agent].iter().sum()
    }

    /// Sum of a house's column
    pub fn column_sum(&self, house: usize) -> f64 {
        self.rows.iter().map(|row| row[house]).sum()
    }

    /// Row sum every PS allocation of this shape has: `H / A`
    pub fn expected_row_sum(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.house_count as f64 / self.rows.len() as f64
    }

    /// Check the column, row and bound invariants within `tolerance`
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        let expected_row = self.expected_row_sum();

        let entries_ok = self
            .rows
            .iter()
            .flatten()
            .all(|&share| share >= -tolerance && share <= 1.0 + tolerance);
        let rows_ok = (0..self.agent_count())
            .all(|agent| (self.row_sum(agent) - expected_row).abs() <= tolerance);
        let columns_ok =
            (0..self.house_count).all(|house| (self.column_sum(house) - 1.0).abs() <= tolerance);

        entries_ok && rows_ok && columns_ok
    }

    /// Wrap rows the simulator built; the caller guarantees the shape
    pub(crate) fn from_parts(rows: Vec<Vec<f64>>, house_count: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == house_count));
        Self { rows, house_count }
    }

    /// Consume the matrix, returning its rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for AllocationMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        AllocationMatrix::from_rows(rows)
    }
}

impl From<AllocationMatrix> for Vec<Vec<f64>> {
    fn from(matrix: AllocationMatrix) -> Self {
        matrix.into_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let matrix = AllocationMatrix::zeros(3, 2);
        assert_eq!(matrix.agent_count(), 3);
        assert_eq!(matrix.house_count(), 2);
        assert_eq!(matrix.row_sum(2), 0.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = AllocationMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(
            AllocationMatrix::from_rows(vec![]).unwrap_err(),
            MatrixError::NoRows
        );
    }

    #[test]
    fn test_expected_row_sum_non_square() {
        // 4 agents sharing 2 houses each eat for half a unit of time
        let matrix = AllocationMatrix::zeros(4, 2);
        assert_eq!(matrix.expected_row_sum(), 0.5);
    }

    #[test]
    fn test_consistency_check() {
        let good = AllocationMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let bad = AllocationMatrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();

        assert!(good.is_consistent(1e-9));
        assert!(!bad.is_consistent(1e-9));
    }
}
