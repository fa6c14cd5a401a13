pub mod newton;
mod solver;

pub use solver::{Outcome, Solver, SolverStatus};
