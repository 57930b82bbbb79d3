//! Eating phase log for replaying and auditing a run.
//!
//! A run of the simultaneous eating process is a sequence of phases. Within a
//! phase every agent eats one fixed house at unit speed; the phase ends the
//! moment the next house runs out. Recording the phases lets callers:
//! - Explain an allocation (who ate what, and when)
//! - Check the order in which houses were exhausted
//! - Verify that the run took at most `H` phases
//!
//! # Example
//!
//! ```rust
//! use probabilistic_serial_core_rs::models::{EatingPhase, HouseConsumption, PhaseLog};
//!
//! let mut log = PhaseLog::new();
//! log.log(EatingPhase {
//!     step: 0,
//!     start_time: 0.0,
//!     duration: 0.5,
//!     consumption: vec![HouseConsumption { house: 0, eaters: 2 }],
//!     exhausted: vec![0],
//! });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.exhaustion_order(), vec![0]);
//! ```

use serde::{Deserialize, Serialize};

/// How many agents ate a given house during one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseConsumption {
    pub house: usize,
    pub eaters: usize,
}

/// One iteration of the event loop, between two exhaustion events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EatingPhase {
    /// Zero-based phase index
    pub step: usize,

    /// Clock value when the phase began
    pub start_time: f64,

    /// Length of the phase (time until the next house ran out)
    pub duration: f64,

    /// Houses being eaten, ascending by house index
    pub consumption: Vec<HouseConsumption>,

    /// Houses that reached zero at the end of the phase, ascending
    pub exhausted: Vec<usize>,
}

impl EatingPhase {
    /// Clock value when the phase ended
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Number of agents eating `house` in this phase (0 if nobody)
    pub fn eaters_of(&self, house: usize) -> usize {
        self.consumption
            .iter()
            .find(|c| c.house == house)
            .map_or(0, |c| c.eaters)
    }
}

/// Ordered record of every phase in a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseLog {
    phases: Vec<EatingPhase>,
}

impl PhaseLog {
    /// Create a new empty phase log
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Append a phase
    pub fn log(&mut self, phase: EatingPhase) {
        self.phases.push(phase);
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// All phases in order
    pub fn phases(&self) -> &[EatingPhase] {
        &self.phases
    }

    /// Phases during which `house` was being eaten
    pub fn phases_for_house(&self, house: usize) -> Vec<&EatingPhase> {
        self.phases
            .iter()
            .filter(|p| p.eaters_of(house) > 0)
            .collect()
    }

    /// Houses in the order they ran out (ties ascending by index)
    pub fn exhaustion_order(&self) -> Vec<usize> {
        self.phases
            .iter()
            .flat_map(|p| p.exhausted.iter().copied())
            .collect()
    }

    /// Moment `house` ran out, if it did
    pub fn exhaustion_time(&self, house: usize) -> Option<f64> {
        self.phases
            .iter()
            .find(|p| p.exhausted.contains(&house))
            .map(EatingPhase::end_time)
    }

    /// Total simulated time across all phases
    pub fn total_time(&self) -> f64 {
        self.phases.last().map_or(0.0, EatingPhase::end_time)
    }

    /// Clear all phases
    pub fn clear(&mut self) {
        self.phases.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(step: usize, start: f64, duration: f64, eaten: &[(usize, usize)], gone: &[usize]) -> EatingPhase {
        EatingPhase {
            step,
            start_time: start,
            duration,
            consumption: eaten
                .iter()
                .map(|&(house, eaters)| HouseConsumption { house, eaters })
                .collect(),
            exhausted: gone.to_vec(),
        }
    }

    #[test]
    fn test_exhaustion_queries() {
        let mut log = PhaseLog::new();
        log.log(phase(0, 0.0, 0.5, &[(0, 2)], &[0]));
        log.log(phase(1, 0.5, 0.5, &[(1, 2)], &[1]));

        assert_eq!(log.exhaustion_order(), vec![0, 1]);
        assert_eq!(log.exhaustion_time(1), Some(1.0));
        assert_eq!(log.exhaustion_time(7), None);
        assert_eq!(log.total_time(), 1.0);
        assert_eq!(log.phases_for_house(1).len(), 1);
    }

    #[test]
    fn test_empty_log() {
        let log = PhaseLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total_time(), 0.0);
    }
}
