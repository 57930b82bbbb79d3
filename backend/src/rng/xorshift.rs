//! xorshift64* random number generator
//!
//! Small, fast PRNG with 64-bit state. Passes BigCrush, which is more than
//! enough for drawing random rankings.
//!
//! # Determinism
//!
//! Same seed → same sequence → same profile. Reproducing a reported run only
//! needs the seed printed by the CLI.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let index = rng.below(10); // [0, 10)
/// assert!(index < 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by `1`, since xorshift gets stuck at zero.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random index in `[0, bound)`
    ///
    /// Uses rejection sampling so every index is equally likely; plain modulo
    /// would favour small indices when `bound` does not divide 2^64.
    ///
    /// # Panics
    /// Panics if `bound == 0`
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Shuffle a slice in place (Fisher–Yates)
    ///
    /// # Example
    /// ```
    /// use probabilistic_serial_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// let mut houses = vec![0, 1, 2, 3];
    /// rng.shuffle(&mut houses);
    ///
    /// let mut sorted = houses.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, vec![0, 1, 2, 3]);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Draw a uniformly random permutation of `0..n`
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        self.shuffle(&mut order);
        order
    }

    /// Get current RNG state (for replaying a generator mid-stream)
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
