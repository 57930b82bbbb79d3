//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible sampling of preference profiles.
//! The allocation core never draws randomness; every random ranking in the
//! crate is produced through an explicitly passed [`RngManager`].

mod xorshift;

pub use xorshift::RngManager;
