//! Continuous clock for the eating process
//!
//! Unlike a tick-based simulator, the eating process jumps straight from one
//! exhaustion event to the next. The clock records how much simulated time
//! has passed and how many phases have run.

use super::quantity::Quantity;

/// Tracks elapsed time and phase count during one run
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::core::EatingClock;
///
/// let mut clock = EatingClock::<f64>::new();
/// clock.advance(0.5).unwrap();
/// clock.advance(0.25).unwrap();
/// assert_eq!(clock.elapsed(), 0.75);
/// assert_eq!(clock.step(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EatingClock<Q: Quantity> {
    /// Simulated time since the run started
    elapsed: Q,
    /// Phases completed so far
    step: usize,
}

impl<Q: Quantity> EatingClock<Q> {
    pub fn new() -> Self {
        Self {
            elapsed: Q::zero(),
            step: 0,
        }
    }

    /// Close the current phase after `duration`; `None` on overflow
    pub fn advance(&mut self, duration: Q) -> Option<()> {
        self.elapsed = self.elapsed.checked_add(duration)?;
        self.step += 1;
        Some(())
    }

    pub fn elapsed(&self) -> Q {
        self.elapsed
    }

    /// Index of the phase currently running (= phases completed)
    pub fn step(&self) -> usize {
        self.step
    }
}

impl<Q: Quantity> Default for EatingClock<Q> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fraction;

    #[test]
    fn test_exact_clock_sums_exactly() {
        let mut clock = EatingClock::<Fraction>::new();
        let third = Fraction::new(1, 3).unwrap();
        for _ in 0..3 {
            clock.advance(third).unwrap();
        }
        assert_eq!(clock.elapsed(), Fraction::ONE);
        assert_eq!(clock.step(), 3);
    }
}
