use newt_core::{Elementary, EquationSystem, Scalar};

/// A three-equation system mixing trigonometric and exponential terms:
///
/// ```text
/// f1 = 3*x1 - cos(x2*x3) - 1/2
/// f2 = x1^2 - 81*(x2 + 0.1)^2 + sin(x3) + 1.06
/// f3 = e^(-x1*x2) + 20*x3 + (10*pi - 3)/3
/// ```
///
/// The standard textbook example for Newton's method on systems; from
/// the guess `(0.1, 0.1, -0.1)` it converges to
/// `(0.5, 0, -pi/6)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigExponential;

impl<T: Scalar + Elementary> EquationSystem<T> for TrigExponential {
    fn len(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "ExampleA"
    }

    fn eval(&self, i: usize, x: &[T]) -> T {
        match i {
            0 => T::from(3.0) * x[0] - (x[1] * x[2]).cos() - T::from(0.5),
            1 => {
                x[0].squared() - T::from(81.0) * (x[1] + T::from(0.1)).squared() + x[2].sin()
                    + T::from(1.06)
            }
            _ => {
                (-(x[0] * x[1])).exp()
                    + T::from(20.0) * x[2]
                    + (T::from(10.0) * T::pi() - T::from(3.0)) / T::from(3.0)
            }
        }
    }

    fn eval_derivatives(&self, i: usize, x: &[T], dfdx: &mut [T]) {
        match i {
            0 => {
                dfdx[0] = T::from(3.0);
                dfdx[1] = x[2] * (x[1] * x[2]).sin();
                dfdx[2] = x[1] * (x[1] * x[2]).sin();
            }
            1 => {
                dfdx[0] = T::from(2.0) * x[0];
                dfdx[1] = T::from(-162.0) * (x[1] + T::from(0.1));
                dfdx[2] = x[2].cos();
            }
            _ => {
                let e = (-(x[0] * x[1])).exp();
                dfdx[0] = -x[1] * e;
                dfdx[1] = -x[0] * e;
                dfdx[2] = T::from(20.0);
            }
        }
    }
}
