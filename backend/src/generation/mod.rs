//! Preference profile generation
//!
//! Produces the profiles the simulator consumes. Two sources:
//!
//! 1. **Random**: every agent draws a uniformly random ranking
//! 2. **Enumerated**: every ranking (or every profile) in lexicographic order
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed → same profile
//! 2. **Explicit randomness**: the caller passes the [`RngManager`]; nothing
//!    here touches global state
//! 3. **Valid by construction**: generated rankings are always permutations
//!
//! # Example
//!
//! ```
//! use probabilistic_serial_core_rs::generation::generate_profile;
//! use probabilistic_serial_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(42);
//! let profile = generate_profile(3, 4, &mut rng).unwrap();
//!
//! assert_eq!(profile.agent_count(), 3);
//! assert_eq!(profile.house_count(), 4);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::models::Profile;
use crate::rng::RngManager;

/// Largest house count [`all_rankings`] will enumerate (10! rankings)
pub const MAX_ENUMERABLE_HOUSES: usize = 10;

/// Errors that can occur during generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Degenerate input: {agents} agents, {houses} houses (both must be positive)")]
    DegenerateInput { agents: usize, houses: usize },

    #[error("Refusing to enumerate rankings of {houses} houses (limit {limit})")]
    TooManyRankings { houses: usize, limit: usize },
}

fn check_counts(agents: usize, houses: usize) -> Result<(), GenerationError> {
    if agents == 0 || houses == 0 {
        return Err(GenerationError::DegenerateInput { agents, houses });
    }
    Ok(())
}

/// Draw one uniformly random ranking of `houses` houses
pub fn generate_ranking(houses: usize, rng: &mut RngManager) -> Vec<usize> {
    rng.permutation(houses)
}

/// Draw a random profile: one independent random ranking per agent
pub fn generate_profile(
    agents: usize,
    houses: usize,
    rng: &mut RngManager,
) -> Result<Profile, GenerationError> {
    check_counts(agents, houses)?;

    let rankings = (0..agents)
        .map(|_| generate_ranking(houses, rng))
        .collect::<Vec<_>>();

    debug!(agents, houses, rng_state = rng.get_state(), "generated random profile");

    // Permutations always validate
    Profile::new(rankings).map_err(|_| GenerationError::DegenerateInput { agents, houses })
}

/// Advance `order` to its next lexicographic permutation; false at the last
fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }
    let Some(pivot) = (0..order.len() - 1).rev().find(|&i| order[i] < order[i + 1]) else {
        return false;
    };
    // A successor exists because order[pivot] < order[pivot + 1]
    let mut successor = order.len() - 1;
    while order[successor] <= order[pivot] {
        successor -= 1;
    }
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

/// Every ranking of `houses` houses, in lexicographic order
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::generation::all_rankings;
///
/// let rankings = all_rankings(3).unwrap();
/// assert_eq!(rankings.len(), 6);
/// assert_eq!(rankings[0], vec![0, 1, 2]);
/// assert_eq!(rankings[5], vec![2, 1, 0]);
/// ```
pub fn all_rankings(houses: usize) -> Result<Vec<Vec<usize>>, GenerationError> {
    check_counts(1, houses)?;
    if houses > MAX_ENUMERABLE_HOUSES {
        return Err(GenerationError::TooManyRankings {
            houses,
            limit: MAX_ENUMERABLE_HOUSES,
        });
    }

    let mut order: Vec<usize> = (0..houses).collect();
    let mut rankings = vec![order.clone()];
    while next_permutation(&mut order) {
        rankings.push(order.clone());
    }
    Ok(rankings)
}

/// Iterator over every profile of `agents` agents and `houses` houses
///
/// Yields `(H!)^A` profiles, ordered like an odometer whose last agent
/// turns fastest.
pub struct ProfileEnumerator {
    rankings: Vec<Vec<usize>>,
    /// Index into `rankings` for each agent; `None` once exhausted
    digits: Option<Vec<usize>>,
}

impl ProfileEnumerator {
    pub fn new(agents: usize, houses: usize) -> Result<Self, GenerationError> {
        check_counts(agents, houses)?;
        let rankings = all_rankings(houses)?;
        Ok(Self {
            rankings,
            digits: Some(vec![0; agents]),
        })
    }

    /// Total number of profiles, `None` if it does not fit in `usize`
    pub fn total(&self) -> Option<usize> {
        let agents = self.digits.as_ref().map_or(0, Vec::len);
        let exponent = u32::try_from(agents).ok()?;
        self.rankings.len().checked_pow(exponent)
    }
}

impl Iterator for ProfileEnumerator {
    type Item = Profile;

    fn next(&mut self) -> Option<Profile> {
        let digits = self.digits.as_mut()?;
        let rankings = digits
            .iter()
            .map(|&d| self.rankings[d].clone())
            .collect::<Vec<_>>();

        // Odometer increment, last agent fastest
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.rankings.len() {
                carry = false;
                break;
            }
            *digit = 0;
        }
        if carry {
            self.digits = None;
        }

        Profile::new(rankings).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_wraps_off_end() {
        let mut order = vec![2, 1, 0];
        assert!(!next_permutation(&mut order));

        let mut order = vec![0, 2, 1];
        assert!(next_permutation(&mut order));
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_single_house_has_one_ranking() {
        assert_eq!(all_rankings(1).unwrap(), vec![vec![0]]);
    }

    #[test]
    fn test_enumerator_counts() {
        let enumerator = ProfileEnumerator::new(2, 3).unwrap();
        assert_eq!(enumerator.total(), Some(36));
        assert_eq!(enumerator.count(), 36);
    }

    #[test]
    fn test_enumerator_order() {
        let profiles: Vec<Profile> = ProfileEnumerator::new(2, 2).unwrap().collect();

        let rankings: Vec<Vec<Vec<usize>>> = profiles
            .into_iter()
            .map(Profile::into_rankings)
            .collect();
        assert_eq!(
            rankings,
            vec![
                vec![vec![0, 1], vec![0, 1]],
                vec![vec![0, 1], vec![1, 0]],
                vec![vec![1, 0], vec![0, 1]],
                vec![vec![1, 0], vec![1, 0]],
            ]
        );
    }
}
