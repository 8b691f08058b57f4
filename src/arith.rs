//! Elementary arithmetic on scalars.

use crate::error::{require_finite, require_number, NumericError, Result};

/// Average of two numbers, computed as `a/2 + b/2`.
///
/// Halving before adding keeps the result finite for operands near
/// `f64::MAX`.
///
/// # Examples
/// ```
/// use u_numkit::arith::average;
/// assert_eq!(average(10.0, 0.0).unwrap(), 5.0);
/// assert_eq!(average(-3.0, 3.0).unwrap(), 0.0);
/// ```
pub fn average(a: f64, b: f64) -> Result<f64> {
    require_number("a", a)?;
    require_number("b", b)?;
    Ok(a / 2.0 + b / 2.0)
}

/// Root of the linear equation `a·x + b = 0`.
///
/// # Errors
/// - `TypeMismatch` if a coefficient is NaN.
/// - `InvalidValue` if `a == 0` (the equation is not linear).
///
/// # Examples
/// ```
/// use u_numkit::arith::linear_equation_root;
/// assert_eq!(linear_equation_root(5.0, -10.0).unwrap(), 2.0);
/// assert_eq!(linear_equation_root(1.0, 8.0).unwrap(), -8.0);
/// assert!(linear_equation_root(0.0, 1.0).is_err());
/// ```
pub fn linear_equation_root(a: f64, b: f64) -> Result<f64> {
    require_number("a", a)?;
    require_number("b", b)?;
    if a == 0.0 {
        return Err(NumericError::invalid(
            "a",
            "coefficient must be non-zero for a linear equation",
        ));
    }
    Ok(-b / a)
}

/// Cube `n³` of a finite number.
///
/// # Examples
/// ```
/// use u_numkit::arith::cube;
/// assert_eq!(cube(3.0).unwrap(), 27.0);
/// assert_eq!(cube(-2.0).unwrap(), -8.0);
/// assert!(cube(f64::INFINITY).is_err());
/// ```
pub fn cube(n: f64) -> Result<f64> {
    require_finite("n", n)?;
    Ok(n * n * n)
}

/// Sine of `x` (radians).
///
/// Infinite input is accepted and yields NaN; only NaN input is rejected.
///
/// # Examples
/// ```
/// use u_numkit::arith::sine;
/// use std::f64::consts::FRAC_PI_2;
/// assert_eq!(sine(0.0).unwrap(), 0.0);
/// assert_eq!(sine(FRAC_PI_2).unwrap(), 1.0);
/// ```
pub fn sine(x: f64) -> Result<f64> {
    require_number("x", x)?;
    Ok(x.sin())
}

/// Larger of two numbers. `+0` wins over `-0`.
///
/// # Examples
/// ```
/// use u_numkit::arith::max;
/// assert_eq!(max(1.0, 2.0).unwrap(), 2.0);
/// assert_eq!(max(-5.0, -6.0).unwrap(), -5.0);
/// ```
pub fn max(a: f64, b: f64) -> Result<f64> {
    require_number("a", a)?;
    require_number("b", b)?;
    if a > b {
        Ok(a)
    } else if b > a || a.is_sign_negative() {
        Ok(b)
    } else {
        Ok(a)
    }
}

/// Sum of three numbers. NaN propagates.
///
/// # Examples
/// ```
/// use u_numkit::arith::sum_of_three;
/// assert_eq!(sum_of_three(1.0, 2.0, 3.0), 6.0);
/// assert!((sum_of_three(0.1, 0.2, 0.3) - 0.6).abs() < 1e-15);
/// ```
pub fn sum_of_three(x1: f64, x2: f64, x3: f64) -> f64 {
    x1 + x2 + x3
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn average_between_operands(a in -1e12_f64..1e12, b in -1e12_f64..1e12) {
            let m = average(a, b).unwrap();
            prop_assert!(m >= a.min(b) && m <= a.max(b));
        }

        #[test]
        fn linear_root_satisfies_equation(a in 1e-3_f64..1e3, b in -1e3_f64..1e3) {
            let x = linear_equation_root(a, b).unwrap();
            prop_assert!((a * x + b).abs() < 1e-9);
        }

        #[test]
        fn max_is_one_of_operands(a in -1e9_f64..1e9, b in -1e9_f64..1e9) {
            let m = max(a, b).unwrap();
            prop_assert!(m == a || m == b);
            prop_assert!(m >= a && m >= b);
        }
    }
}
