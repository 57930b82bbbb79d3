//! Utility evaluation with Borda scores
//!
//! Converts each agent's ordinal ranking into cardinal Borda values and
//! takes the expected value under the agent's row of the allocation.
//!
//! With `H` houses, the house at zero-based rank `r` is worth `H - 1 - r`:
//! the favourite scores `H - 1`, the least liked scores `0`.
//!
//! # Example
//!
//! ```rust
//! use probabilistic_serial_core_rs::{evaluate, simulate, Profile};
//!
//! let profile = Profile::new(vec![vec![0, 1], vec![0, 1]]).unwrap();
//! let matrix = simulate(&profile).unwrap();
//! let utilities = evaluate(&matrix, &profile).unwrap();
//!
//! assert!((utilities.as_slice()[0] - 0.5).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::models::{AllocationMatrix, Profile, UtilityVector};

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error(
        "Matrix is {matrix_agents}x{matrix_houses} but profile is {profile_agents}x{profile_houses}"
    )]
    ShapeMismatch {
        matrix_agents: usize,
        matrix_houses: usize,
        profile_agents: usize,
        profile_houses: usize,
    },
}

/// Borda value of the house at `rank` among `house_count` houses
pub fn borda_value(house_count: usize, rank: usize) -> f64 {
    house_count.saturating_sub(1).saturating_sub(rank) as f64
}

/// Borda value of every house for one agent, indexed by house
pub fn borda_values(profile: &Profile, agent: usize) -> Vec<f64> {
    let house_count = profile.house_count();
    (0..house_count)
        .map(|house| borda_value(house_count, profile.rank_of(agent, house)))
        .collect()
}

/// Expected Borda utility of every agent under `matrix`
pub fn evaluate(
    matrix: &AllocationMatrix,
    profile: &Profile,
) -> Result<UtilityVector, EvaluationError> {
    if matrix.agent_count() != profile.agent_count()
        || matrix.house_count() != profile.house_count()
    {
        return Err(EvaluationError::ShapeMismatch {
            matrix_agents: matrix.agent_count(),
            matrix_houses: matrix.house_count(),
            profile_agents: profile.agent_count(),
            profile_houses: profile.house_count(),
        });
    }

    let utilities = (0..profile.agent_count())
        .map(|agent| {
            matrix
                .row(agent)
                .iter()
                .zip(borda_values(profile, agent))
                .map(|(share, value)| share * value)
                .sum()
        })
        .collect::<Vec<f64>>();

    Ok(UtilityVector::new(utilities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borda_value_endpoints() {
        assert_eq!(borda_value(4, 0), 3.0);
        assert_eq!(borda_value(4, 3), 0.0);
        assert_eq!(borda_value(1, 0), 0.0);
    }

    #[test]
    fn test_borda_values_follow_ranking() {
        let profile = Profile::new(vec![vec![2, 0, 1]]).unwrap();
        // house 2 best (2), house 0 middle (1), house 1 worst (0)
        assert_eq!(borda_values(&profile, 0), vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let profile = Profile::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let matrix = AllocationMatrix::zeros(3, 2);

        assert!(matches!(
            evaluate(&matrix, &profile),
            Err(EvaluationError::ShapeMismatch { matrix_agents: 3, .. })
        ));
    }

    #[test]
    fn test_values_scale_with_houses_not_agents() {
        // 1 agent, 3 houses: getting the favourite is worth H - 1 = 2
        let profile = Profile::new(vec![vec![1, 0, 2]]).unwrap();
        let matrix = AllocationMatrix::from_rows(vec![vec![0.0, 1.0, 0.0]]).unwrap();

        let utilities = evaluate(&matrix, &profile).unwrap();
        assert_eq!(utilities.as_slice(), &[2.0]);
    }
}
