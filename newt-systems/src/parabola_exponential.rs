use newt_core::{Elementary, EquationSystem, Scalar};

/// The intersection of a parabola and an exponential:
///
/// ```text
/// f1 = x1^2 + 8*x2 - 16
/// f2 = x1 - e^(x2)
/// ```
///
/// The positive root sits near `(2.7898, 1.0260)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParabolaExponential;

impl<T: Scalar + Elementary> EquationSystem<T> for ParabolaExponential {
    fn len(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "ExampleC"
    }

    fn eval(&self, i: usize, x: &[T]) -> T {
        match i {
            0 => x[0].squared() + T::from(8.0) * x[1] - T::from(16.0),
            _ => x[0] - x[1].exp(),
        }
    }

    fn eval_derivatives(&self, i: usize, x: &[T], dfdx: &mut [T]) {
        match i {
            0 => {
                dfdx[0] = T::from(2.0) * x[0];
                dfdx[1] = T::from(8.0);
            }
            _ => {
                dfdx[0] = T::ONE;
                dfdx[1] = -x[1].exp();
            }
        }
    }
}
