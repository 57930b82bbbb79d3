//! Python bindings (PyO3)
//!
//! Exposes the allocation pipeline as plain functions over nested lists, so
//! Python callers can swap in the Rust engine without new types.
//!
//! ```python
//! from probabilistic_serial_core_rs import generate_profile, probability_matrix, expected_utilities
//!
//! profile = generate_profile(3, 3, seed=42)
//! matrix = probability_matrix(profile)
//! print(expected_utilities(matrix, profile))
//! ```

pub mod functions;
