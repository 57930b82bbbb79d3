//! Time and arithmetic primitives shared by the simulators

pub mod clock;
pub mod fraction;
pub mod quantity;

pub use clock::EatingClock;
pub use fraction::Fraction;
pub use quantity::Quantity;
