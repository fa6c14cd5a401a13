use newt_core::Scalar;

/// Call-time parameters for a Newton run.
///
/// The third input, the initial iterate, is passed separately because it
/// doubles as the output buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    /// Iteration cap; must be at least 1.
    pub max_iters: usize,
    /// Convergence tolerance; must be non-negative. For intervals, each
    /// endpoint step is measured against the corresponding endpoint of
    /// `eps`.
    pub eps: T,
}

impl<T: Scalar> Config<T> {
    /// Validates the iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns a reason string if `max_iters` is zero or `eps` is not a
    /// valid tolerance for the scalar kind.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters < 1 {
            return Err("max_iters must be at least 1");
        }
        if !self.eps.valid_epsilon() {
            return Err("eps must be finite and non-negative");
        }
        Ok(())
    }
}

impl<T: Scalar + From<f64>> Default for Config<T> {
    fn default() -> Self {
        Self {
            max_iters: 100,
            eps: T::from(1e-6),
        }
    }
}
