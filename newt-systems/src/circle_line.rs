use newt_core::{Elementary, EquationSystem, Scalar};

/// The intersection of a circle and a line:
///
/// ```text
/// f1 = x1^2 + x2^2 - 4
/// f2 = x1 - x2 - 1
/// ```
///
/// From the guess `(0, 1)` Newton converges to the positive intersection
/// `(1 + sqrt(2), sqrt(2))` in a handful of iterations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleLine;

impl<T: Scalar + Elementary> EquationSystem<T> for CircleLine {
    fn len(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "Quadratic System"
    }

    fn eval(&self, i: usize, x: &[T]) -> T {
        match i {
            0 => x[0].squared() + x[1].squared() - T::from(4.0),
            _ => x[0] - x[1] - T::ONE,
        }
    }

    fn eval_derivatives(&self, i: usize, x: &[T], dfdx: &mut [T]) {
        match i {
            0 => {
                dfdx[0] = T::from(2.0) * x[0];
                dfdx[1] = T::from(2.0) * x[1];
            }
            _ => {
                dfdx[0] = T::ONE;
                dfdx[1] = -T::ONE;
            }
        }
    }
}
