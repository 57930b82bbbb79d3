//! Utility vector model
//!
//! One expected utility per agent, in agent order.

use serde::{Deserialize, Serialize};

/// Expected utility of each agent under an allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtilityVector {
    values: Vec<f64>,
}

impl UtilityVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Utility of one agent
    pub fn get(&self, agent: usize) -> Option<f64> {
        self.values.get(agent).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Utilitarian welfare (sum over agents)
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Average utility, `0.0` for an empty vector
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.total() / self.values.len() as f64
        }
    }

    /// Egalitarian welfare (worst-off agent)
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for UtilityVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welfare_summaries() {
        let utilities = UtilityVector::new(vec![1.0, 0.5, 2.5]);

        assert_eq!(utilities.total(), 4.0);
        assert!((utilities.mean() - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(utilities.min(), Some(0.5));
        assert_eq!(utilities.max(), Some(2.5));
    }

    #[test]
    fn test_empty_vector() {
        let utilities = UtilityVector::new(Vec::new());

        assert!(utilities.is_empty());
        assert_eq!(utilities.mean(), 0.0);
        assert_eq!(utilities.min(), None);
    }
}
