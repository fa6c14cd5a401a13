pub mod interval;
mod scalar;
mod system;

pub use interval::{Interval, IntervalError};
pub use scalar::{CONVERGENCE_NOISE_FLOOR, Elementary, Scalar};
pub use system::EquationSystem;
