//! Simultaneous eating engine
//!
//! Computes the probabilistic serial allocation by simulating every agent
//! eating its favourite remaining house at unit speed.
//!
//! # Architecture
//!
//! ```text
//! While some house has supply left:
//! 1. Each agent picks its most preferred house with supply left
//! 2. Count eaters per house (= consumption rate)
//! 3. For each eaten house, time to exhaustion = supply / rate
//! 4. Phase length t = min over eaten houses
//! 5. Every agent eats t of its house; supplies drop by t per eater
//! 6. Zero the pacing house(s); snap others at or below the tolerance
//! ```
//!
//! Each phase exhausts at least one house, so a run takes at most `H`
//! phases. Step 1 uses a per-agent cursor into the ranking that only moves
//! forward: supplies never grow back, so a house skipped once stays skipped.
//!
//! The loop is generic over [`Quantity`], so float and exact runs share it.
//!
//! # Example
//!
//! ```rust
//! use probabilistic_serial_core_rs::{simulate, Profile};
//!
//! let profile = Profile::new(vec![vec![0, 1], vec![0, 1]]).unwrap();
//! let matrix = simulate(&profile).unwrap();
//!
//! assert!((matrix.get(0, 0) - 0.5).abs() < 1e-9);
//! assert!((matrix.get(1, 1) - 0.5).abs() < 1e-9);
//! ```

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{EatingClock, Quantity};
use crate::models::{AllocationMatrix, EatingPhase, HouseConsumption, PhaseLog, Profile, ProfileError};

use super::config::{Arithmetic, SimulatorConfig};
use super::exact::run_exact;

/// Simulation error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// Malformed preference profile
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Exact arithmetic left the `i128` range
    #[error("Arithmetic overflow in phase {step}")]
    ArithmeticOverflow { step: usize },

    /// A phase ended without exhausting any house
    #[error("Eating loop made no progress in phase {step}")]
    NoProgress { step: usize },
}

/// Raw result of the generic eating loop
#[derive(Debug, Clone)]
pub(crate) struct EatingRun<Q: Quantity> {
    pub rows: Vec<Vec<Q>>,
    pub phases: PhaseLog,
    pub elapsed: Q,
}

/// Result of a simulator run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Fractional allocation (agents × houses)
    pub matrix: AllocationMatrix,

    /// Phase-by-phase record (empty if recording was disabled)
    pub phases: PhaseLog,

    /// Total simulated time (`H / A` for a complete run)
    pub elapsed: f64,
}

/// Probabilistic serial simulator
///
/// Holds only configuration; every run owns its own supplies and matrix,
/// so one `Simulator` can be reused across profiles.
///
/// # Example
///
/// ```rust
/// use probabilistic_serial_core_rs::{Profile, Simulator, SimulatorConfig};
///
/// let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
/// let profile = Profile::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
///
/// let outcome = simulator.run(&profile).unwrap();
/// assert_eq!(outcome.matrix.get(0, 0), 1.0);
/// assert_eq!(outcome.phases.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator, validating the configuration
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run the eating process on `profile`
    pub fn run(&self, profile: &Profile) -> Result<SimulationOutcome, SimulationError> {
        match self.config.arithmetic {
            Arithmetic::Float => {
                let run = run_eating::<f64>(profile, self.config.tolerance, self.config.record_phases)?;
                Ok(SimulationOutcome {
                    matrix: AllocationMatrix::from_parts(run.rows, profile.house_count()),
                    phases: run.phases,
                    elapsed: run.elapsed,
                })
            }
            Arithmetic::Exact => {
                let outcome = run_exact(profile, self.config.record_phases)?;
                Ok(SimulationOutcome {
                    matrix: outcome.matrix.to_f64(),
                    phases: outcome.phases,
                    elapsed: outcome.elapsed.to_f64(),
                })
            }
        }
    }
}

/// Compute the probabilistic serial allocation with default settings
pub fn simulate(profile: &Profile) -> Result<AllocationMatrix, SimulationError> {
    Simulator::default().run(profile).map(|outcome| outcome.matrix)
}

/// The simultaneous eating loop
pub(crate) fn run_eating<Q: Quantity>(
    profile: &Profile,
    tolerance: f64,
    record_phases: bool,
) -> Result<EatingRun<Q>, SimulationError> {
    let agent_count = profile.agent_count();
    let house_count = profile.house_count();

    let mut supply = vec![Q::one(); house_count];
    let mut rows = vec![vec![Q::zero(); house_count]; agent_count];
    let mut cursors = vec![0usize; agent_count];
    let mut eating = vec![0usize; agent_count];
    let mut clock = EatingClock::<Q>::new();
    let mut phases = PhaseLog::new();

    while supply.iter().any(|s| s.is_positive()) {
        let step = clock.step();
        let overflow = || SimulationError::ArithmeticOverflow { step };

        // 1-2. Who eats what, and how fast each house goes
        let mut eaters = vec![0usize; house_count];
        for agent in 0..agent_count {
            let ranking = profile.ranking(agent);
            let cursor = &mut cursors[agent];
            while *cursor < house_count && !supply[ranking[*cursor]].is_positive() {
                *cursor += 1;
            }
            let house = *ranking
                .get(*cursor)
                .ok_or(SimulationError::NoProgress { step })?;

            trace!(step, agent, house, "agent eating");
            eating[agent] = house;
            eaters[house] += 1;
        }

        // 3-4. Phase ends when the next house runs out
        let mut time_left: Vec<Option<Q>> = vec![None; house_count];
        let mut duration: Option<Q> = None;
        for (house, &count) in eaters.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let t = supply[house].checked_div_count(count).ok_or_else(overflow)?;
            if duration.map_or(true, |best| t < best) {
                duration = Some(t);
            }
            time_left[house] = Some(t);
        }
        let duration = duration.ok_or(SimulationError::NoProgress { step })?;

        // 5. Everyone eats for `duration`
        for (agent, &house) in eating.iter().enumerate() {
            rows[agent][house] = rows[agent][house].checked_add(duration).ok_or_else(overflow)?;
            supply[house] = supply[house].checked_sub(duration).ok_or_else(overflow)?;
        }

        // 6. Houses that set the pace are gone by definition; elsewhere snap
        //    residue so ties and rounding cannot stall the loop
        let mut exhausted = Vec::new();
        for (house, t) in time_left.iter().enumerate() {
            let Some(t) = *t else { continue };
            let snapped = supply[house].snap(tolerance);
            if t == duration || !snapped.is_positive() {
                supply[house] = Q::zero();
                exhausted.push(house);
            } else {
                supply[house] = snapped;
            }
        }

        if exhausted.is_empty() {
            return Err(SimulationError::NoProgress { step });
        }

        debug!(
            step,
            duration = duration.to_f64(),
            exhausted = ?exhausted,
            "eating phase complete"
        );

        if record_phases {
            phases.log(EatingPhase {
                step,
                start_time: clock.elapsed().to_f64(),
                duration: duration.to_f64(),
                consumption: eaters
                    .iter()
                    .enumerate()
                    .filter(|&(_, &count)| count > 0)
                    .map(|(house, &count)| HouseConsumption {
                        house,
                        eaters: count,
                    })
                    .collect(),
                exhausted,
            });
        }

        clock.advance(duration).ok_or_else(overflow)?;
    }

    debug!(
        agents = agent_count,
        houses = house_count,
        phases = clock.step(),
        elapsed = clock.elapsed().to_f64(),
        "eating run finished"
    );

    Ok(EatingRun {
        rows,
        phases,
        elapsed: clock.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(rankings: Vec<Vec<usize>>) -> Profile {
        Profile::new(rankings).unwrap()
    }

    #[test]
    fn test_cursor_skips_exhausted_houses() {
        // Both agents start on house 0; after it runs out both jump to 1
        let run = run_eating::<f64>(&profile(vec![vec![0, 1], vec![0, 1]]), 1e-9, true).unwrap();

        let phases = run.phases.phases();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].eaters_of(0), 2);
        assert_eq!(phases[1].eaters_of(1), 2);
        assert_eq!(phases[1].eaters_of(0), 0);
    }

    #[test]
    fn test_tied_houses_exhaust_in_same_phase() {
        let run = run_eating::<f64>(
            &profile(vec![vec![0, 1, 2], vec![1, 0, 2], vec![2, 0, 1]]),
            1e-9,
            true,
        )
        .unwrap();

        assert_eq!(run.phases.len(), 1);
        assert_eq!(run.phases.phases()[0].exhausted, vec![0, 1, 2]);
    }

    #[test]
    fn test_recording_can_be_disabled() {
        let run = run_eating::<f64>(&profile(vec![vec![0, 1], vec![0, 1]]), 1e-9, false).unwrap();
        assert!(run.phases.is_empty());
        assert!((run.elapsed - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_house_single_agent() {
        let run = run_eating::<f64>(&profile(vec![vec![0]]), 1e-9, true).unwrap();
        assert_eq!(run.rows, vec![vec![1.0]]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulatorConfig {
            tolerance: -1.0,
            ..SimulatorConfig::default()
        };
        assert!(Simulator::new(config).is_err());
    }
}
