//! Preference profile model
//!
//! A profile holds one strict ranking per agent. Each ranking lists house
//! indices from most to least preferred and must be a permutation of
//! `0..H`, with `H` shared by every agent.
//!
//! # Critical Invariants
//!
//! 1. **Bijection**: every ranking contains each house in `0..H` exactly once
//! 2. **Uniform width**: all rankings have the same house count `H ≥ 1`
//! 3. **Non-empty**: at least one agent
//! 4. **Immutable**: a constructed profile never changes
//!
//! Validation happens once, in [`Profile::new`]. Everything downstream (the
//! simulator, the evaluator) relies on these invariants and does not re-check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a profile
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile has no agents")]
    Empty,

    #[error("Profile has no houses (agent 0 has an empty ranking)")]
    NoHouses,

    #[error("Agent {agent} ranks {found} houses, expected {expected}")]
    HouseCountMismatch {
        agent: usize,
        expected: usize,
        found: usize,
    },

    #[error("Agent {agent} ranks house {house}, but only houses 0..{house_count} exist")]
    HouseOutOfRange {
        agent: usize,
        house: usize,
        house_count: usize,
    },

    #[error("Agent {agent} ranks house {house} more than once")]
    DuplicateHouse { agent: usize, house: usize },
}

/// Validated preference profile
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::Profile;
///
/// let profile = Profile::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
/// assert_eq!(profile.agent_count(), 2);
/// assert_eq!(profile.house_count(), 2);
/// assert_eq!(profile.rank_of(1, 1), 0); // agent 1 likes house 1 best
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct Profile {
    /// Per-agent rankings, most preferred first
    rankings: Vec<Vec<usize>>,

    /// Inverse rankings: `positions[agent][house]` is the rank of `house`
    positions: Vec<Vec<usize>>,
}

impl Profile {
    /// Build a profile, checking that every ranking is a permutation of `0..H`
    pub fn new(rankings: Vec<Vec<usize>>) -> Result<Self, ProfileError> {
        let house_count = match rankings.first() {
            None => return Err(ProfileError::Empty),
            Some(first) if first.is_empty() => return Err(ProfileError::NoHouses),
            Some(first) => first.len(),
        };

        let mut positions = Vec::with_capacity(rankings.len());

        for (agent, ranking) in rankings.iter().enumerate() {
            if ranking.len() != house_count {
                return Err(ProfileError::HouseCountMismatch {
                    agent,
                    expected: house_count,
                    found: ranking.len(),
                });
            }

            // usize::MAX marks "not yet seen"
            let mut inverse = vec![usize::MAX; house_count];
            for (rank, &house) in ranking.iter().enumerate() {
                if house >= house_count {
                    return Err(ProfileError::HouseOutOfRange {
                        agent,
                        house,
                        house_count,
                    });
                }
                if inverse[house] != usize::MAX {
                    return Err(ProfileError::DuplicateHouse { agent, house });
                }
                inverse[house] = rank;
            }

            positions.push(inverse);
        }

        Ok(Self {
            rankings,
            positions,
        })
    }

    /// Number of agents (rows of the allocation matrix)
    pub fn agent_count(&self) -> usize {
        self.rankings.len()
    }

    /// Number of houses (columns of the allocation matrix)
    pub fn house_count(&self) -> usize {
        self.positions[0].len()
    }

    /// Ranking of one agent, most preferred house first
    ///
    /// # Panics
    /// Panics if `agent` is out of range
    pub fn ranking(&self, agent: usize) -> &[usize] {
        &self.rankings[agent]
    }

    /// All rankings in agent order
    pub fn rankings(&self) -> &[Vec<usize>] {
        &self.rankings
    }

    /// Zero-based position of `house` in `agent`'s ranking
    ///
    /// # Panics
    /// Panics if `agent` or `house` is out of range
    pub fn rank_of(&self, agent: usize, house: usize) -> usize {
        self.positions[agent][house]
    }

    /// Most preferred house of `agent`
    pub fn top_choice(&self, agent: usize) -> usize {
        self.rankings[agent][0]
    }

    /// True if every agent submitted the same ranking
    pub fn is_unanimous(&self) -> bool {
        self.rankings.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Consume the profile, returning the raw rankings
    pub fn into_rankings(self) -> Vec<Vec<usize>> {
        self.rankings
    }
}

impl TryFrom<Vec<Vec<usize>>> for Profile {
    type Error = ProfileError;

    fn try_from(rankings: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Profile::new(rankings)
    }
}

impl From<Profile> for Vec<Vec<usize>> {
    fn from(profile: Profile) -> Self {
        profile.into_rankings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_invert_rankings() {
        let profile = Profile::new(vec![vec![2, 0, 1]]).unwrap();

        assert_eq!(profile.rank_of(0, 2), 0);
        assert_eq!(profile.rank_of(0, 0), 1);
        assert_eq!(profile.rank_of(0, 1), 2);
    }

    #[test]
    fn test_unanimous_detection() {
        let same = Profile::new(vec![vec![0, 1], vec![0, 1]]).unwrap();
        let split = Profile::new(vec![vec![0, 1], vec![1, 0]]).unwrap();

        assert!(same.is_unanimous());
        assert!(!split.is_unanimous());
    }

    #[test]
    fn test_single_agent_is_unanimous() {
        let profile = Profile::new(vec![vec![1, 0]]).unwrap();
        assert!(profile.is_unanimous());
    }
}
