//! Ready-made nonlinear equation systems.
//!
//! Each system is written once, generic over any scalar implementing
//! [`Scalar`](newt_core::Scalar) and [`Elementary`](newt_core::Elementary),
//! so the same definition drives both the plain `f64` solver and the
//! interval solver.

mod circle_line;
mod parabola_exponential;
mod trig_exponential;

pub use circle_line::CircleLine;
pub use parabola_exponential::ParabolaExponential;
pub use trig_exponential::TrigExponential;
