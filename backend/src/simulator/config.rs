//! Simulator configuration

use serde::{Deserialize, Serialize};

use super::SimulationError;

/// Default exhaustion tolerance for float runs
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Number system the eating loop runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arithmetic {
    /// `f64` with residue snapped to zero below the tolerance
    #[default]
    Float,

    /// Exact fractions; the tolerance is unused
    Exact,
}

/// Complete simulator configuration
///
/// # Fields
///
/// * `tolerance` - Supply at or below this is treated as exhausted (float runs)
/// * `arithmetic` - Float or exact arithmetic
/// * `record_phases` - Keep a [`PhaseLog`](crate::models::PhaseLog) of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub tolerance: f64,
    pub arithmetic: Arithmetic,
    pub record_phases: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            arithmetic: Arithmetic::Float,
            record_phases: true,
        }
    }
}

impl SimulatorConfig {
    /// Exact-arithmetic configuration
    pub fn exact() -> Self {
        Self {
            arithmetic: Arithmetic::Exact,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.tolerance.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "tolerance must be finite, got {}",
                self.tolerance
            )));
        }

        if self.tolerance < 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "tolerance must be >= 0, got {}",
                self.tolerance
            )));
        }

        // A tolerance of 1 or more would treat fresh houses as already eaten
        if self.tolerance >= 1.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "tolerance must be < 1, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
        assert!(SimulatorConfig::exact().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tolerance in [f64::NAN, f64::INFINITY, -1e-9, 1.0, 2.5] {
            let config = SimulatorConfig {
                tolerance,
                ..SimulatorConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(SimulationError::InvalidConfig(_))),
                "tolerance {} should be rejected",
                tolerance
            );
        }
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: SimulatorConfig =
            serde_json::from_str(r#"{"arithmetic": "exact"}"#).unwrap();

        assert_eq!(config.arithmetic, Arithmetic::Exact);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(config.record_phases);
    }
}
